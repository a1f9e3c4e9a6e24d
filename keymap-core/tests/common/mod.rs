//! Helpers for building keymap blobs by hand

#![allow(dead_code)]

use keymap_core::{BlobLayout, LayerPlacement};

/// Parses a hex dump, ignoring whitespace.
pub fn blob(dump: &str) -> Vec<u8> {
    let compact: String = dump.split_whitespace().collect();
    hex::decode(compact).expect("invalid hex in test blob")
}

pub fn trailing(layers: usize, cells: usize) -> BlobLayout {
    BlobLayout::new(layers, cells, LayerPlacement::Trailing)
}

pub fn leading(layers: usize, cells: usize) -> BlobLayout {
    BlobLayout::new(layers, cells, LayerPlacement::Leading)
}

/// Placeholder, lshift, 1 and a shifted exlm, followed by two layers of
/// two cells.
pub const SHIFTED_SAMPLE: &str = "
    00000000
    0000e1e1
    00001e1e
    02 0004 0008 00 0000
    000c 0000
    0004 0008
";
