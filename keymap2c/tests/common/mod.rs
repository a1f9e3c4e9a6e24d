//! Shared helpers for the keymap2c integration tests

#![allow(dead_code)]

use keymap2c::{BlobLayout, BlobLoader, CompileOptions, CompiledKeymap, Keymap, Layer, LayerPlacement, VirtualKey};

/// Options for small hand-written grids.
pub fn options(cells: usize) -> CompileOptions {
    CompileOptions {
        cells,
        placement: LayerPlacement::Trailing,
    }
}

pub fn compile(keys: &[VirtualKey], layers: &[Layer], cells: usize) -> CompiledKeymap {
    keymap2c::compile_keymap(keys, layers, &options(cells)).expect("compilation failed")
}

/// Decodes a compiled table back through the loader.
pub fn reload(compiled: &CompiledKeymap) -> Keymap {
    BlobLoader::load(&compiled.data, &compiled.layout).expect("blob failed to load")
}

/// Decodes with an explicitly rebuilt layout, as a firmware reader would.
pub fn reload_with(data: &[u8], layers: usize, cells: usize, placement: LayerPlacement) -> Keymap {
    BlobLoader::load(data, &BlobLayout::new(layers, cells, placement)).expect("blob failed to load")
}

/// The shape of the spanish sample: letters, a shift and a composed key.
pub fn sample_keys() -> Vec<VirtualKey> {
    vec![
        VirtualKey::placeholder(),
        VirtualKey::new("lshift").with_codes(0xE1, 0xE1),
        VirtualKey::new("a").with_codes(0x04, 0x04),
        VirtualKey::new("f").with_codes(0x09, 0x08),
        VirtualKey::new("1").with_codes(0x1E, 0x1E),
        VirtualKey::new("exlm").with_primary(["lshift", "1"]),
    ]
}
