//! Raw hardware key codes.
//!
//! The compiler never hard-codes key code values; it looks names up in a
//! [`KeyCodeTable`] handed to it at startup. [`KeyCodeTable::qmk`] carries
//! the basic QMK keycodes (USB HID usage ids) and the long-form aliases the
//! firmware header defines for them.

use crate::types::errors::{KeymapError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCodeTable {
    codes: HashMap<String, u32>,
}

impl KeyCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The QMK basic keycode set.
    pub fn qmk() -> Self {
        QMK_BASIC_KEYCODES.iter().copied().collect()
    }

    /// Adds or replaces a code, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: u32) -> Option<u32> {
        self.codes.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.codes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Looks up a code that must fit in a single record byte.
    pub fn code(&self, name: &str) -> Result<u8> {
        let value = self
            .get(name)
            .ok_or_else(|| KeymapError::UnknownKeyCode(name.to_string()))?;
        u8::try_from(value).map_err(|_| KeymapError::KeyCodeRange {
            name: name.to_string(),
            value,
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.codes.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for KeyCodeTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, u32)> for KeyCodeTable {
    fn extend<I: IntoIterator<Item = (S, u32)>>(&mut self, iter: I) {
        self.codes
            .extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}

const QMK_BASIC_KEYCODES: &[(&str, u32)] = &[
    ("KC_NO", 0x00),
    ("KC_TRANSPARENT", 0x01),
    ("KC_A", 0x04),
    ("KC_B", 0x05),
    ("KC_C", 0x06),
    ("KC_D", 0x07),
    ("KC_E", 0x08),
    ("KC_F", 0x09),
    ("KC_G", 0x0A),
    ("KC_H", 0x0B),
    ("KC_I", 0x0C),
    ("KC_J", 0x0D),
    ("KC_K", 0x0E),
    ("KC_L", 0x0F),
    ("KC_M", 0x10),
    ("KC_N", 0x11),
    ("KC_O", 0x12),
    ("KC_P", 0x13),
    ("KC_Q", 0x14),
    ("KC_R", 0x15),
    ("KC_S", 0x16),
    ("KC_T", 0x17),
    ("KC_U", 0x18),
    ("KC_V", 0x19),
    ("KC_W", 0x1A),
    ("KC_X", 0x1B),
    ("KC_Y", 0x1C),
    ("KC_Z", 0x1D),
    ("KC_1", 0x1E),
    ("KC_2", 0x1F),
    ("KC_3", 0x20),
    ("KC_4", 0x21),
    ("KC_5", 0x22),
    ("KC_6", 0x23),
    ("KC_7", 0x24),
    ("KC_8", 0x25),
    ("KC_9", 0x26),
    ("KC_0", 0x27),
    ("KC_ENTER", 0x28),
    ("KC_ESCAPE", 0x29),
    ("KC_BSPACE", 0x2A),
    ("KC_TAB", 0x2B),
    ("KC_SPACE", 0x2C),
    ("KC_MINUS", 0x2D),
    ("KC_EQUAL", 0x2E),
    ("KC_LBRACKET", 0x2F),
    ("KC_RBRACKET", 0x30),
    ("KC_BSLASH", 0x31),
    ("KC_NONUS_HASH", 0x32),
    ("KC_SCOLON", 0x33),
    ("KC_QUOTE", 0x34),
    ("KC_GRAVE", 0x35),
    ("KC_COMMA", 0x36),
    ("KC_DOT", 0x37),
    ("KC_SLASH", 0x38),
    ("KC_CAPSLOCK", 0x39),
    ("KC_F1", 0x3A),
    ("KC_F2", 0x3B),
    ("KC_F3", 0x3C),
    ("KC_F4", 0x3D),
    ("KC_F5", 0x3E),
    ("KC_F6", 0x3F),
    ("KC_F7", 0x40),
    ("KC_F8", 0x41),
    ("KC_F9", 0x42),
    ("KC_F10", 0x43),
    ("KC_F11", 0x44),
    ("KC_F12", 0x45),
    ("KC_PSCREEN", 0x46),
    ("KC_SCROLLLOCK", 0x47),
    ("KC_PAUSE", 0x48),
    ("KC_INSERT", 0x49),
    ("KC_HOME", 0x4A),
    ("KC_PGUP", 0x4B),
    ("KC_DELETE", 0x4C),
    ("KC_END", 0x4D),
    ("KC_PGDOWN", 0x4E),
    ("KC_RIGHT", 0x4F),
    ("KC_LEFT", 0x50),
    ("KC_DOWN", 0x51),
    ("KC_UP", 0x52),
    ("KC_NUMLOCK", 0x53),
    ("KC_KP_SLASH", 0x54),
    ("KC_KP_ASTERISK", 0x55),
    ("KC_KP_MINUS", 0x56),
    ("KC_KP_PLUS", 0x57),
    ("KC_KP_ENTER", 0x58),
    ("KC_KP_1", 0x59),
    ("KC_KP_2", 0x5A),
    ("KC_KP_3", 0x5B),
    ("KC_KP_4", 0x5C),
    ("KC_KP_5", 0x5D),
    ("KC_KP_6", 0x5E),
    ("KC_KP_7", 0x5F),
    ("KC_KP_8", 0x60),
    ("KC_KP_9", 0x61),
    ("KC_KP_0", 0x62),
    ("KC_KP_DOT", 0x63),
    ("KC_NONUS_BSLASH", 0x64),
    ("KC_APPLICATION", 0x65),
    ("KC_POWER", 0x66),
    ("KC_KP_EQUAL", 0x67),
    ("KC_F13", 0x68),
    ("KC_F14", 0x69),
    ("KC_F15", 0x6A),
    ("KC_F16", 0x6B),
    ("KC_F17", 0x6C),
    ("KC_F18", 0x6D),
    ("KC_F19", 0x6E),
    ("KC_F20", 0x6F),
    ("KC_F21", 0x70),
    ("KC_F22", 0x71),
    ("KC_F23", 0x72),
    ("KC_F24", 0x73),
    ("KC_SYSTEM_POWER", 0xA5),
    ("KC_SYSTEM_SLEEP", 0xA6),
    ("KC_SYSTEM_WAKE", 0xA7),
    ("KC_AUDIO_MUTE", 0xA8),
    ("KC_AUDIO_VOL_UP", 0xA9),
    ("KC_AUDIO_VOL_DOWN", 0xAA),
    ("KC_LCTRL", 0xE0),
    ("KC_LSHIFT", 0xE1),
    ("KC_LALT", 0xE2),
    ("KC_LGUI", 0xE3),
    ("KC_RCTRL", 0xE4),
    ("KC_RSHIFT", 0xE5),
    ("KC_RALT", 0xE6),
    ("KC_RGUI", 0xE7),
    // Short aliases
    ("KC_ENT", 0x28),
    ("KC_ESC", 0x29),
    ("KC_BSPC", 0x2A),
    ("KC_SPC", 0x2C),
    ("KC_SCLN", 0x33),
    ("KC_QUOT", 0x34),
    ("KC_GRV", 0x35),
    ("KC_COMM", 0x36),
    ("KC_CAPS", 0x39),
    ("KC_PSCR", 0x46),
    ("KC_INS", 0x49),
    ("KC_DEL", 0x4C),
    ("KC_APP", 0x65),
    ("KC_LCTL", 0xE0),
    ("KC_LSFT", 0xE1),
    ("KC_RCTL", 0xE4),
    ("KC_RSFT", 0xE5),
];
