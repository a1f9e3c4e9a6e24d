//! Constructors that expand compact declarations into virtual keys.
//!
//! Expansion never looks names up: sequences hold the names of other
//! virtual keys and are resolved when the registry is compiled.

use keymap_core::{PhysicalKey, PhysicalKeys, VirtualKey};

pub const SHIFT: &str = "lshift";
pub const CTRL: &str = "lctrl";
pub const ALT: &str = "lalt";
pub const ALT_GR: &str = "ralt";

/// Option+E on a Mac arms the acute accent for the next letter.
pub const MAC_ACUTE: &str = "e";

/// Linux unicode entry: Ctrl+Shift+U, the hex digits, then space.
pub const UNICODE_PREFIX: &str = "u";
pub const UNICODE_COMMIT: &str = "space";

/// A key with the same code under both host layouts.
pub fn alias(name: &str, code: u8) -> VirtualKey {
    VirtualKey::new(name).with_codes(code, code)
}

/// A key whose position differs between the two host layouts.
pub fn dual(name: &str, code_a: u8, code_b: u8) -> VirtualKey {
    VirtualKey::new(name).with_codes(code_a, code_b)
}

/// Hold shift, press `base`.
pub fn shifted(shifted: &str, base: &str) -> VirtualKey {
    VirtualKey::new(shifted).with_primary([SHIFT, base])
}

/// Acute-accented `letter`, named `<letter>_tilde`.
pub fn diacritic(letter: &str) -> VirtualKey {
    VirtualKey::new(format!("{}_tilde", letter))
        .with_primary([ALT_GR, letter])
        .with_secondary([ALT, MAC_ACUTE, letter])
}

/// Types a code point through the unicode entry chord, one key per hex digit.
pub fn unicode(name: &str, codepoint: &str) -> VirtualKey {
    let mut keys = vec![CTRL.to_string(), SHIFT.to_string(), UNICODE_PREFIX.to_string()];
    keys.extend(
        codepoint
            .chars()
            .map(|digit| digit.to_ascii_lowercase().to_string()),
    );
    keys.push(UNICODE_COMMIT.to_string());
    VirtualKey::new(name).with_primary(keys)
}

/// Literal sequences for anything the other constructors can't express.
pub fn sequence(name: &str, primary: &[&str], secondary: &[&str]) -> VirtualKey {
    VirtualKey::new(name)
        .with_primary(primary.iter().copied())
        .with_secondary(secondary.iter().copied())
}

/// The state-changing key for a physical marker.
pub fn physical(key: PhysicalKey, markers: &PhysicalKeys) -> VirtualKey {
    alias(key.name(), markers.code(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alias_uses_code_twice() {
        let key = alias("q", 0x14);
        assert_eq!(key.primary_code, 0x14);
        assert_eq!(key.secondary_code, 0x14);
        assert!(key.primary.is_empty());
        assert!(key.secondary.is_empty());
    }

    #[test]
    fn test_dual() {
        let key = dual("f", 0x09, 0x08);
        assert_eq!((key.primary_code, key.secondary_code), (0x09, 0x08));
    }

    #[test]
    fn test_shifted() {
        let key = shifted("exlm", "1");
        assert_eq!(key.name, "exlm");
        assert_eq!(key.primary, vec!["lshift", "1"]);
        assert!(key.secondary.is_empty());
        assert_eq!((key.primary_code, key.secondary_code), (0, 0));
    }

    #[test]
    fn test_diacritic() {
        let key = diacritic("a");
        assert_eq!(key.name, "a_tilde");
        assert_eq!(key.primary, vec!["ralt", "a"]);
        assert_eq!(key.secondary, vec!["lalt", "e", "a"]);
    }

    #[test]
    fn test_unicode_splits_digits() {
        let key = unicode("emoji_thumb", "1F44D");
        assert_eq!(
            key.primary,
            vec!["lctrl", "lshift", "u", "1", "f", "4", "4", "d", "space"]
        );
        assert!(key.secondary.is_empty());
    }

    #[test]
    fn test_sequence() {
        let key = sequence("exlm_inv", &["ralt", "lshift", "1"], &["lalt", "1"]);
        assert_eq!(key.primary, vec!["ralt", "lshift", "1"]);
        assert_eq!(key.secondary, vec!["lalt", "1"]);
    }

    #[test]
    fn test_physical() {
        let markers = PhysicalKeys::new(0x59).unwrap();
        let key = physical(PhysicalKey::Layer2, &markers);
        assert_eq!(key.name, "layer2");
        assert_eq!(key.primary_code, 0x5D);
    }
}
