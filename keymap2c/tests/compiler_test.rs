mod common;

use common::{compile, options, reload, sample_keys};
use keymap2c::binary::KeymapWriter;
use keymap2c::*;
use pretty_assertions::assert_eq;

#[test]
fn test_symbols_match_record_offsets() {
    let keys = sample_keys();
    let layers = [Layer::new(["", "a", "f", "exlm"])];
    let compiled = compile(&keys, &layers, 4);
    let keymap = reload(&compiled);

    assert_eq!(keymap.keys.len(), keys.len());
    for (key, record) in keys.iter().zip(&keymap.keys) {
        assert_eq!(compiled.symbols.get(&key.name), Some(record.offset), "offset of {:?}", key.name);
        assert_eq!(record.primary.len(), key.primary.len());
        assert_eq!(record.secondary.len(), key.secondary.len());
    }
}

#[test]
fn test_sequence_counts_and_offsets() {
    let compiled = compile(&sample_keys(), &[], 4);
    let keymap = reload(&compiled);

    let exlm = keymap.key_at(compiled.symbols.get("exlm").unwrap()).unwrap();
    assert_eq!(
        exlm.primary,
        vec![compiled.symbols.get("lshift").unwrap(), compiled.symbols.get("1").unwrap()]
    );
    assert!(exlm.secondary.is_empty());
    assert_eq!((exlm.primary_code, exlm.secondary_code), (0, 0));
}

#[test]
fn test_placeholder_and_empty_cells_at_zero() {
    let layers = [Layer::new(["", "a", "", ""])];
    let compiled = compile(&sample_keys(), &layers, 4);

    assert_eq!(compiled.symbols.get(""), Some(0));
    assert_eq!(&compiled.data[..4], &[0, 0, 0, 0]);

    let keymap = reload(&compiled);
    let cells = &keymap.layers[0];
    assert_eq!(cells[0], 0);
    assert_eq!(cells[2], 0);
    assert_eq!(cells[3], 0);
    assert_eq!(cells[1], compiled.symbols.get("a").unwrap());
}

#[test]
fn test_dual_key_record() {
    let keys = [VirtualKey::placeholder(), keymap2c::macros::dual("q", 0x14, 0x08)];
    let compiled = compile(&keys, &[], 4);
    assert_eq!(compiled.symbols.get("q"), Some(4));
    assert_eq!(&compiled.data[4..], &[0x00, 0x00, 0x14, 0x08]);
}

#[test]
fn test_shifted_record_bytes() {
    let mut symbols = SymbolTable::new();
    symbols.reserve("lshift", 0x0005);
    symbols.reserve("1", 0x0020);

    let key = keymap2c::macros::shifted("exlm", "1");
    let mut writer = KeymapWriter::new(Vec::new());
    writer.write_key(&key, &symbols).unwrap();

    assert_eq!(
        writer.into_inner(),
        vec![0x02, 0x00, 0x05, 0x00, 0x20, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_forward_reference() {
    let keys = [
        VirtualKey::placeholder(),
        VirtualKey::new("exlm").with_primary(["lshift", "1"]),
        VirtualKey::new("lshift").with_codes(0xE1, 0xE1),
        VirtualKey::new("1").with_codes(0x1E, 0x1E),
    ];
    let compiled = compile(&keys, &[], 4);

    // placeholder 4 bytes, exlm 8 bytes
    assert_eq!(compiled.symbols.get("exlm"), Some(4));
    assert_eq!(compiled.symbols.get("lshift"), Some(12));
    assert_eq!(compiled.symbols.get("1"), Some(16));
    assert_eq!(&compiled.data[4..12], &[0x02, 0x00, 0x0c, 0x00, 0x10, 0x00, 0x00, 0x00]);
}

#[test]
fn test_deterministic() {
    let layers = [Layer::new(["exlm", "", "f", "a"])];
    let first = compile(&sample_keys(), &layers, 4);
    let second = compile(&sample_keys(), &layers, 4);
    assert_eq!(first.data, second.data);
}

#[test]
fn test_unresolved_in_sequence() {
    let keys = [
        VirtualKey::placeholder(),
        VirtualKey::new("exlm").with_primary(["lshift", "1"]),
    ];
    let err = compile_keymap(&keys, &[], &options(4)).unwrap_err();
    match err {
        KeymapError::UnresolvedReference { name, site } => {
            assert_eq!(name, "lshift");
            assert_eq!(site, ReferenceSite::Key("exlm".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unresolved_in_layer_cell() {
    let layers = [Layer::empty(4), Layer::new(["", "", "a", "f13"])];
    let err = compile_keymap(&sample_keys(), &layers, &options(4)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unrecognized \"f13\" key referenced by layer 1 cell 3"
    );
}

#[test]
fn test_duplicate_key() {
    let mut keys = sample_keys();
    keys.push(VirtualKey::new("a").with_codes(0x04, 0x04));
    let err = compile_keymap(&keys, &[], &options(4)).unwrap_err();
    assert!(matches!(err, KeymapError::DuplicateKey(ref name) if name == "a"));
}

#[test]
fn test_layer_size_checked() {
    let layers = [Layer::empty(4), Layer::empty(3)];
    let err = compile_keymap(&sample_keys(), &layers, &options(4)).unwrap_err();
    assert!(matches!(
        err,
        KeymapError::LayerSize { layer: 1, expected: 4, actual: 3 }
    ));
}

#[test]
fn test_offset_overflow() {
    let mut keys = vec![VirtualKey::placeholder()];
    for i in 0..130 {
        let sequence = vec![String::new(); MAX_SEQUENCE_LEN];
        keys.push(VirtualKey::new(format!("k{}", i)).with_primary(sequence));
    }

    // Each record is 514 bytes; k128 would start at 65796
    let err = compile_keymap(&keys, &[], &options(4)).unwrap_err();
    match err {
        KeymapError::OffsetOverflow { key, offset } => {
            assert_eq!(key, "k128");
            assert_eq!(offset, 4 + 128 * 514);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_placeholder_out_of_order() {
    let keys = [VirtualKey::new("a").with_codes(0x04, 0x04), VirtualKey::placeholder()];
    let layers = [Layer::new(["", "a", "", ""])];
    let err = compile_keymap(&keys, &layers, &options(4)).unwrap_err();
    assert!(matches!(err, KeymapError::MissingPlaceholder));
}

#[test]
fn test_placeholder_with_sequence() {
    let keys = [
        VirtualKey::new("").with_primary(["a"]),
        VirtualKey::new("a").with_codes(0x04, 0x04),
    ];
    let err = compile_keymap(&keys, &[], &options(4)).unwrap_err();
    assert!(matches!(err, KeymapError::InvalidPlaceholder { index: 0 }));
}
