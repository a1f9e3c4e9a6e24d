use keymap_core::{KeymapError, ReferenceSite};
use std::collections::HashMap;

/// Key name to the absolute offset of its record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    offsets: HashMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a key's record starts. Returns false if the name is
    /// already taken.
    pub fn reserve(&mut self, name: &str, offset: u16) -> bool {
        if self.offsets.contains_key(name) {
            return false;
        }
        self.offsets.insert(name.to_string(), offset);
        true
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.offsets.get(name).copied()
    }

    pub fn resolve(&self, name: &str, site: impl FnOnce() -> ReferenceSite) -> Result<u16, KeymapError> {
        self.get(name)
            .ok_or_else(|| KeymapError::unresolved(name, site()))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.offsets.iter().map(|(name, &offset)| (name.as_str(), offset))
    }

    /// Name of the key starting at `offset`.
    pub fn name_at(&self, offset: u16) -> Option<&str> {
        self.iter()
            .find(|&(_, start)| start == offset)
            .map(|(name, _)| name)
    }
}
