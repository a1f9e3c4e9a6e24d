/// Largest number of references a single sequence can hold (1-byte count).
pub const MAX_SEQUENCE_LEN: usize = u8::MAX as usize;

/// Size in bytes of a serialized record with the given sequence lengths:
/// count byte + offsets for each sequence, then the two code bytes.
pub const fn record_len(primary: usize, secondary: usize) -> usize {
    1 + 2 * primary + 1 + 2 * secondary + 2
}

/// A named logical key.
///
/// The sequences reference other virtual keys by name and are replayed as a
/// chord by the firmware; `primary` is used with the standard desktop
/// conventions and `secondary` with the Mac ones. The two codes are raw
/// hardware codes for the two host layouts (Colemak and QWERTY) and are only
/// ever compared against, never sent as part of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualKey {
    pub name: String,
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub primary_code: u8,
    pub secondary_code: u8,
}

impl VirtualKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The unnamed key used for unassigned grid cells.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    pub fn with_codes(mut self, primary_code: u8, secondary_code: u8) -> Self {
        self.primary_code = primary_code;
        self.secondary_code = secondary_code;
        self
    }

    pub fn with_primary<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_secondary<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Every name this key references, primary sequence first.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.primary.iter().chain(self.secondary.iter()).map(String::as_str)
    }

    pub fn encoded_len(&self) -> usize {
        record_len(self.primary.len(), self.secondary.len())
    }
}
