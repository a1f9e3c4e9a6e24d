//! The binary keymap table consumed by the firmware.
//!
//! A blob holds two regions: the virtual key records, laid out back to back
//! in registry order, and one offset table per layer. Every offset in the
//! blob is a big-endian `u16` absolute position of a record start.
//!
//! Record layout:
//!
//! ```text
//! [N1][N1 x offset][N2][N2 x offset][primary code][secondary code]
//! ```

pub mod error;
pub mod loader;

pub use error::BlobError;
pub use loader::{BlobLoader, Keymap, KeyRecord};

/// Which region comes first in the blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayerPlacement {
    /// Layer tables at the front, the firmware finds layer `i` at
    /// `i * cells * 2`. The placeholder sits right after the tables.
    Leading,
    /// Records at the front, so the placeholder is at offset 0.
    #[default]
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobLayout {
    pub layer_count: usize,
    pub cells: usize,
    pub placement: LayerPlacement,
}

impl BlobLayout {
    pub fn new(layer_count: usize, cells: usize, placement: LayerPlacement) -> Self {
        Self {
            layer_count,
            cells,
            placement,
        }
    }

    /// Total size of all layer tables.
    pub fn layer_table_len(&self) -> usize {
        self.layer_count * self.cells * 2
    }

    /// Absolute offset of the first record.
    pub fn record_base(&self) -> usize {
        match self.placement {
            LayerPlacement::Leading => self.layer_table_len(),
            LayerPlacement::Trailing => 0,
        }
    }

    /// Absolute offset of the first layer table, given the record region size.
    pub fn layer_base(&self, records_len: usize) -> usize {
        match self.placement {
            LayerPlacement::Leading => 0,
            LayerPlacement::Trailing => records_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_layout() {
        let layout = BlobLayout::new(4, 76, LayerPlacement::Trailing);
        assert_eq!(layout.layer_table_len(), 608);
        assert_eq!(layout.record_base(), 0);
        assert_eq!(layout.layer_base(100), 100);
    }

    #[test]
    fn test_leading_layout() {
        let layout = BlobLayout::new(4, 76, LayerPlacement::Leading);
        assert_eq!(layout.record_base(), 608);
        assert_eq!(layout.layer_base(100), 0);
    }
}
