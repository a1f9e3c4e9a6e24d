use super::symbols::SymbolTable;
use super::writer::KeymapWriter;
use keymap_core::{
    BlobLayout, KeymapError, Layer, LayerPlacement, VirtualKey, GRID_CELLS, MAX_SEQUENCE_LEN,
};
use log::{debug, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Cells every layer must have.
    pub cells: usize,
    pub placement: LayerPlacement,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            cells: GRID_CELLS,
            placement: LayerPlacement::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledKeymap {
    pub data: Vec<u8>,
    pub symbols: SymbolTable,
    pub layout: BlobLayout,
}

impl CompiledKeymap {
    /// Size of the virtual key record region.
    pub fn records_len(&self) -> usize {
        self.data.len() - self.layout.layer_table_len()
    }
}

/// Turns a registry and its layers into the binary keymap table.
///
/// Compilation runs in two phases. The first walks the registry and
/// records the offset of every key before looking at any sequence, which
/// is possible because a record's size only depends on its sequence
/// lengths. The second writes the records and layer tables, resolving
/// names against the complete symbol table. A key may therefore reference
/// itself or a key declared after it.
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn compile(&self, keys: &[VirtualKey], layers: &[Layer]) -> Result<CompiledKeymap, KeymapError> {
        self.check_layers(layers)?;

        let layout = BlobLayout::new(layers.len(), self.options.cells, self.options.placement);
        let (symbols, records_len) = self.reserve(keys, layout.record_base())?;
        debug!(
            "reserved {} symbols, {} bytes of records starting at {:#06x}",
            symbols.len(),
            records_len,
            layout.record_base()
        );

        let mut writer = KeymapWriter::new(Vec::with_capacity(records_len + layout.layer_table_len()));
        match layout.placement {
            LayerPlacement::Leading => {
                Self::write_layers(&mut writer, layers, &symbols)?;
                Self::write_keys(&mut writer, keys, &symbols)?;
            }
            LayerPlacement::Trailing => {
                Self::write_keys(&mut writer, keys, &symbols)?;
                Self::write_layers(&mut writer, layers, &symbols)?;
            }
        }
        let data = writer.into_inner();
        debug!("encoded {} keys and {} layers into {} bytes", keys.len(), layers.len(), data.len());

        Self::report_unused(keys, layers);

        Ok(CompiledKeymap {
            data,
            symbols,
            layout,
        })
    }

    fn check_layers(&self, layers: &[Layer]) -> Result<(), KeymapError> {
        for (index, layer) in layers.iter().enumerate() {
            if layer.len() != self.options.cells {
                return Err(KeymapError::LayerSize {
                    layer: index,
                    expected: self.options.cells,
                    actual: layer.len(),
                });
            }
        }
        Ok(())
    }

    /// First phase: assign every key its offset. Returns the table and the
    /// size of the record region.
    fn reserve(&self, keys: &[VirtualKey], base: usize) -> Result<(SymbolTable, usize), KeymapError> {
        match keys.first() {
            Some(first) if first.is_placeholder() => {}
            _ => return Err(KeymapError::MissingPlaceholder),
        }

        let mut symbols = SymbolTable::new();
        let mut offset = base;

        for (index, key) in keys.iter().enumerate() {
            // Empty cells resolve to the placeholder, so it must be a bare
            // record at the start of the region
            if key.is_placeholder() && (index > 0 || *key != VirtualKey::placeholder()) {
                return Err(KeymapError::InvalidPlaceholder { index });
            }
            for sequence in [&key.primary, &key.secondary] {
                if sequence.len() > MAX_SEQUENCE_LEN {
                    return Err(KeymapError::SequenceTooLong {
                        key: key.name.clone(),
                        len: sequence.len(),
                    });
                }
            }

            let start = u16::try_from(offset).map_err(|_| KeymapError::OffsetOverflow {
                key: key.name.clone(),
                offset,
            })?;
            if !symbols.reserve(&key.name, start) {
                return Err(KeymapError::DuplicateKey(key.name.clone()));
            }
            offset += key.encoded_len();
        }

        Ok((symbols, offset - base))
    }

    fn write_keys(
        writer: &mut KeymapWriter<Vec<u8>>,
        keys: &[VirtualKey],
        symbols: &SymbolTable,
    ) -> Result<(), KeymapError> {
        for key in keys {
            writer.write_key(key, symbols)?;
        }
        Ok(())
    }

    fn write_layers(
        writer: &mut KeymapWriter<Vec<u8>>,
        layers: &[Layer],
        symbols: &SymbolTable,
    ) -> Result<(), KeymapError> {
        for (index, layer) in layers.iter().enumerate() {
            writer.write_layer(index, layer, symbols)?;
        }
        Ok(())
    }

    fn report_unused(keys: &[VirtualKey], layers: &[Layer]) {
        let used: HashSet<&str> = keys
            .iter()
            .flat_map(|key| key.references())
            .chain(layers.iter().flat_map(|layer| layer.cells().iter().map(String::as_str)))
            .collect();

        for key in keys {
            if !key.is_placeholder() && !used.contains(key.name.as_str()) {
                warn!("virtual key {:?} is never referenced", key.name);
            }
        }
    }
}
