//! The ordered list of virtual keys that gets compiled.

use crate::macros;
use keymap_core::{KeyCodeTable, KeymapError, PhysicalKey, PhysicalKeys, VirtualKey};
use std::collections::HashMap;

/// Virtual keys in declaration order.
///
/// The placeholder is always the first entry, so it is the first record in
/// the compiled blob. Names are unique.
#[derive(Debug, Clone)]
pub struct Registry {
    keys: Vec<VirtualKey>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert(String::new(), 0);
        Self {
            keys: vec![VirtualKey::placeholder()],
            index,
        }
    }

    pub fn push(&mut self, key: VirtualKey) -> Result<(), KeymapError> {
        if self.index.contains_key(&key.name) {
            return Err(KeymapError::DuplicateKey(key.name));
        }
        self.index.insert(key.name.clone(), self.keys.len());
        self.keys.push(key);
        Ok(())
    }

    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    pub fn get(&self, name: &str) -> Option<&VirtualKey> {
        self.index.get(name).map(|&i| &self.keys[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of the key in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; the placeholder is present from the start.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a registry from key code names, looking codes up in an injected
/// table.
pub struct RegistryBuilder<'a> {
    table: &'a KeyCodeTable,
    markers: PhysicalKeys,
    registry: Registry,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(table: &'a KeyCodeTable, markers: PhysicalKeys) -> Self {
        Self {
            table,
            markers,
            registry: Registry::new(),
        }
    }

    /// Declares one key per physical marker.
    pub fn physical_markers(&mut self) -> Result<&mut Self, KeymapError> {
        for key in PhysicalKey::ALL {
            self.registry.push(macros::physical(key, &self.markers))?;
        }
        Ok(self)
    }

    pub fn alias(&mut self, name: &str, code: &str) -> Result<&mut Self, KeymapError> {
        let code = self.table.code(code)?;
        self.key(macros::alias(name, code))
    }

    pub fn dual(&mut self, name: &str, code_a: &str, code_b: &str) -> Result<&mut Self, KeymapError> {
        let code_a = self.table.code(code_a)?;
        let code_b = self.table.code(code_b)?;
        self.key(macros::dual(name, code_a, code_b))
    }

    pub fn shifted(&mut self, shifted: &str, base: &str) -> Result<&mut Self, KeymapError> {
        self.key(macros::shifted(shifted, base))
    }

    pub fn diacritic(&mut self, letter: &str) -> Result<&mut Self, KeymapError> {
        self.key(macros::diacritic(letter))
    }

    pub fn unicode(&mut self, name: &str, codepoint: &str) -> Result<&mut Self, KeymapError> {
        self.key(macros::unicode(name, codepoint))
    }

    pub fn sequence(
        &mut self,
        name: &str,
        primary: &[&str],
        secondary: &[&str],
    ) -> Result<&mut Self, KeymapError> {
        self.key(macros::sequence(name, primary, secondary))
    }

    pub fn key(&mut self, key: VirtualKey) -> Result<&mut Self, KeymapError> {
        self.registry.push(key)?;
        Ok(self)
    }

    pub fn finish(self) -> Registry {
        self.registry
    }
}
