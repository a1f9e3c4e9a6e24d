use super::errors::{KeymapError, Result};
use crate::keycodes::KeyCodeTable;

/// Keys that change keyboard state rather than send a code.
///
/// The ErgoDox has no number pad, so the keypad codes are repurposed for
/// these markers: marker `i` is sent as `KC_KP_1 + i`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalKey {
    Qwerty = 0,
    Mac = 1,
    Layer0 = 2,
    Layer1 = 3,
    Layer2 = 4,
    Layer3 = 5,
}

impl PhysicalKey {
    pub const ALL: [PhysicalKey; 6] = [
        PhysicalKey::Qwerty,
        PhysicalKey::Mac,
        PhysicalKey::Layer0,
        PhysicalKey::Layer1,
        PhysicalKey::Layer2,
        PhysicalKey::Layer3,
    ];

    /// Name of the virtual key carrying this marker.
    pub fn name(self) -> &'static str {
        match self {
            PhysicalKey::Qwerty => "qwerty",
            PhysicalKey::Mac => "mac",
            PhysicalKey::Layer0 => "layer0",
            PhysicalKey::Layer1 => "layer1",
            PhysicalKey::Layer2 => "layer2",
            PhysicalKey::Layer3 => "layer3",
        }
    }
}

/// The marker code assignment handed to the registry builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalKeys {
    base: u8,
}

impl PhysicalKeys {
    /// Keycode the first marker is repurposed from.
    pub const BASE_KEYCODE: &'static str = "KC_KP_1";

    pub fn new(base: u8) -> Result<Self> {
        let last = base as usize + PhysicalKey::ALL.len() - 1;
        if last > u8::MAX as usize {
            return Err(KeymapError::KeyCodeRange {
                name: PhysicalKey::Layer3.name().to_string(),
                value: last as u32,
            });
        }
        Ok(Self { base })
    }

    pub fn from_table(table: &KeyCodeTable) -> Result<Self> {
        Self::new(table.code(Self::BASE_KEYCODE)?)
    }

    pub fn code(&self, key: PhysicalKey) -> u8 {
        self.base + key as u8
    }
}
