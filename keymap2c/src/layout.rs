//! The ErgoDox EZ layout this tool exists for.
//!
//! Letters are declared in Colemak order with their QWERTY position as the
//! second code, for hosts that already remap to Colemak in software. Keys
//! referenced from a sequence are declared before the keys that use them.

use crate::registry::{Registry, RegistryBuilder};
use keymap_core::{KeyCodeTable, KeymapError, Layer, PhysicalKeys};

/// Builds the reference registry against `table`.
pub fn reference_registry(table: &KeyCodeTable) -> Result<Registry, KeymapError> {
    let markers = PhysicalKeys::from_table(table)?;
    let mut b = RegistryBuilder::new(table, markers);

    b.physical_markers()?;

    // Modifiers. Their codes are only compared against in the firmware,
    // the modifier report carries the same values.
    b.alias("lshift", "KC_LSHIFT")?
        .alias("lctrl", "KC_LCTRL")?
        .alias("lgui", "KC_LGUI")?
        .alias("lalt", "KC_LALT")?
        .alias("ralt", "KC_RALT")?;

    // Main three rows
    b.alias("q", "KC_Q")?
        .alias("w", "KC_W")?
        .dual("f", "KC_F", "KC_E")?
        .dual("p", "KC_P", "KC_R")?
        .dual("g", "KC_G", "KC_T")?
        .alias("a", "KC_A")?
        .dual("r", "KC_R", "KC_S")?
        .dual("s", "KC_S", "KC_D")?
        .dual("t", "KC_T", "KC_F")?
        .dual("d", "KC_D", "KC_G")?
        .alias("z", "KC_Z")?
        .alias("x", "KC_X")?
        .alias("c", "KC_C")?
        .alias("v", "KC_V")?
        .alias("b", "KC_B")?
        .dual("j", "KC_J", "KC_Y")?
        .dual("l", "KC_L", "KC_U")?
        .dual("u", "KC_U", "KC_I")?
        .dual("y", "KC_Y", "KC_O")?
        .dual("scolon", "KC_SCOLON", "KC_P")?
        .alias("h", "KC_H")?
        .dual("n", "KC_N", "KC_J")?
        .dual("e", "KC_E", "KC_K")?
        .dual("i", "KC_I", "KC_L")?
        .dual("o", "KC_O", "KC_SCOLON")?
        .dual("k", "KC_K", "KC_N")?
        .alias("m", "KC_M")?
        .alias("comma", "KC_COMMA")?
        .alias("dot", "KC_DOT")?
        .alias("slash", "KC_SLASH")?;

    // Upper rows of the main layer
    b.alias("pscreen", "KC_PSCREEN")?
        .alias("application", "KC_APPLICATION")?
        .alias("tab", "KC_TAB")?
        .alias("capslock", "KC_CAPSLOCK")?
        .alias("audio_mute", "KC_AUDIO_MUTE")?
        .alias("bslash", "KC_BSLASH")?
        .alias("escape", "KC_ESCAPE")?
        .alias("bspace", "KC_BSPACE")?
        .alias("audio_vol_down", "KC_AUDIO_VOL_DOWN")?
        .alias("audio_vol_up", "KC_AUDIO_VOL_UP")?
        .alias("left", "KC_LEFT")?
        .alias("down", "KC_DOWN")?
        .alias("up", "KC_UP")?
        .alias("right", "KC_RIGHT")?;

    // Thumb clusters
    b.alias("delete", "KC_DELETE")?
        .alias("home", "KC_HOME")?
        .alias("pgup", "KC_PGUP")?
        .alias("space", "KC_SPACE")?
        .alias("end", "KC_END")?
        .alias("insert", "KC_INSERT")?
        .alias("pgdown", "KC_PGDOWN")?
        .alias("enter", "KC_ENTER")?;

    // Numbers and their shifted symbols
    for (digit, code, symbol) in [
        ("1", "KC_1", "exlm"),
        ("2", "KC_2", "at"),
        ("3", "KC_3", "hash"),
        ("4", "KC_4", "dlr"),
        ("5", "KC_5", "perc"),
        ("6", "KC_6", "circ"),
        ("7", "KC_7", "ampr"),
        ("8", "KC_8", "astr"),
        ("9", "KC_9", "lprn"),
        ("0", "KC_0", "rprn"),
    ] {
        b.alias(digit, code)?.shifted(symbol, digit)?;
    }

    // Remaining punctuation
    for (name, code, symbol) in [
        ("grave", "KC_GRAVE", "tild"),
        ("minus", "KC_MINUS", "unds"),
        ("equal", "KC_EQUAL", "plus"),
        ("lbracket", "KC_LBRACKET", "lcbr"),
        ("rbracket", "KC_RBRACKET", "rcbr"),
        ("quote", "KC_QUOTE", "dquo"),
    ] {
        b.alias(name, code)?.shifted(symbol, name)?;
    }
    b.shifted("colon", "scolon")?;

    for n in 1..=24 {
        b.alias(&format!("f{}", n), &format!("KC_F{}", n))?;
    }

    // Spanish
    for vowel in ["a", "e", "i", "o", "u"] {
        b.diacritic(vowel)?;
    }
    b.sequence("n_tilde", &["ralt", "n"], &["lalt", "n", "n"])?
        .sequence("u_dier", &["ralt", "y"], &["lalt", "u", "u"])?
        .sequence("exlm_inv", &["ralt", "lshift", "1"], &["lalt", "1"])?
        .sequence("ques_inv", &["ralt", "slash"], &["lalt", "lshift", "slash"])?;

    // Focus the Firefox address bar, then tab back to the page menu
    b.sequence(
        "firefox_menu",
        &["lctrl", "l", "lshift", "tab", "lshift", "tab", "application"],
        &[],
    )?;

    b.unicode("emoji_grin", "1f604")?
        .unicode("emoji_squint", "1f606")?
        .unicode("emoji_joy", "1f602")?
        .unicode("emoji_sweat", "1f605")?
        .unicode("emoji_smile", "1f600")?
        .unicode("emoji_thumb", "1f44d")?
        .unicode("emoji_thinking", "1f914")?
        .unicode("emoji_wink", "1f609")?
        .unicode("emoji_pouting", "1f621")?
        .unicode("emoji_ok", "1f44c")?;

    Ok(b.finish())
}

/// Base, function keys, symbols, number pad.
#[rustfmt::skip]
pub fn reference_layers() -> Vec<Layer> {
    vec![
        Layer::new([
            "", "1", "2", "3", "4", "5", "pscreen",
            "tab", "q", "w", "f", "p", "g", "capslock",
            "escape", "a", "r", "s", "t", "d",
            "layer2", "z", "x", "c", "v", "b", "audio_vol_down",
            "qwerty", "mac", "lalt", "left", "down",
            "delete", "home", "pgup", "space", "lctrl", "lgui",
            "firefox_menu", "6", "7", "8", "9", "0", "application",
            "audio_mute", "j", "l", "u", "y", "scolon", "bslash",
            "h", "n", "e", "i", "o", "bspace",
            "audio_vol_up", "k", "m", "comma", "dot", "slash", "layer2",
            "up", "right", "lalt", "", "layer3",
            "end", "insert", "pgdown", "layer1", "lshift", "enter",
        ]),
        Layer::new([
            "", "", "", "", "", "", "",
            "", "f1", "f2", "f3", "f4", "", "",
            "", "f5", "f6", "f7", "f8", "",
            "", "f9", "f10", "f11", "f12", "", "",
            "", "", "", "", "",
            "", "", "", "", "", "",
            "", "", "", "", "", "", "",
            "", "", "f13", "f14", "f15", "f16", "",
            "", "f17", "f18", "f19", "f20", "",
            "", "", "f21", "f22", "f23", "f24", "",
            "", "", "", "", "",
            "", "", "", "", "", "",
        ]),
        Layer::new([
            "", "emoji_grin", "emoji_squint", "emoji_joy", "emoji_sweat", "emoji_smile", "",
            "", "", "exlm_inv", "tild", "grave", "hash", "",
            "", "a_tilde", "exlm", "plus", "equal", "dlr",
            "", "ques_inv", "at", "lbracket", "rbracket", "perc", "",
            "", "", "", "", "",
            "", "", "", "quote", "dquo", "",
            "", "emoji_thumb", "emoji_thinking", "emoji_wink", "emoji_pouting", "emoji_ok", "",
            "", "circ", "u_dier", "u_tilde", "", "", "",
            "ampr", "n_tilde", "e_tilde", "i_tilde", "o_tilde", "",
            "", "astr", "minus", "unds", "lcbr", "rcbr", "",
            "", "", "", "", "",
            "", "", "", "", "lprn", "rprn",
        ]),
        Layer::new([
            "", "", "", "", "", "", "",
            "tab", "", "", "", "", "", "",
            "", "slash", "astr", "minus", "plus", "",
            "", "", "", "equal", "dot", "", "",
            "", "", "", "", "",
            "", "", "", "space", "lctrl", "",
            "", "", "", "", "", "", "",
            "", "", "7", "8", "9", "colon", "",
            "", "4", "5", "6", "0", "bspace",
            "", "", "1", "2", "3", "", "",
            "", "", "", "", "layer0",
            "", "", "", "", "", "enter",
        ]),
    ]
}
