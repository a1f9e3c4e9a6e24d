use super::symbols::SymbolTable;
use byteorder::{BigEndian, WriteBytesExt};
use keymap_core::{KeymapError, Layer, ReferenceSite, VirtualKey};
use std::io::Write;

pub struct KeymapWriter<W: Write> {
    writer: W,
}

impl<W: Write> KeymapWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one record; every referenced name must already be in `symbols`.
    pub fn write_key(&mut self, key: &VirtualKey, symbols: &SymbolTable) -> Result<(), KeymapError> {
        self.write_sequence(&key.name, &key.primary, symbols)?;
        self.write_sequence(&key.name, &key.secondary, symbols)?;

        self.writer.write_u8(key.primary_code)?;
        self.writer.write_u8(key.secondary_code)?;

        Ok(())
    }

    fn write_sequence(
        &mut self,
        owner: &str,
        names: &[String],
        symbols: &SymbolTable,
    ) -> Result<(), KeymapError> {
        let count = u8::try_from(names.len()).map_err(|_| KeymapError::SequenceTooLong {
            key: owner.to_string(),
            len: names.len(),
        })?;
        self.writer.write_u8(count)?;

        for name in names {
            let offset = symbols.resolve(name, || ReferenceSite::Key(owner.to_string()))?;
            self.writer.write_u16::<BigEndian>(offset)?;
        }

        Ok(())
    }

    /// Writes the offset table of layer `index`, one entry per cell.
    pub fn write_layer(&mut self, index: usize, layer: &Layer, symbols: &SymbolTable) -> Result<(), KeymapError> {
        for (cell, name) in layer.cells().iter().enumerate() {
            let offset = symbols.resolve(name, || ReferenceSite::LayerCell { layer: index, cell })?;
            self.writer.write_u16::<BigEndian>(offset)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_key_big_endian() {
        let mut symbols = SymbolTable::new();
        symbols.reserve("lshift", 0x0005);
        symbols.reserve("1", 0x0120);

        let key = VirtualKey::new("exlm").with_primary(["lshift", "1"]);
        let mut writer = KeymapWriter::new(Vec::new());
        writer.write_key(&key, &symbols).unwrap();

        assert_eq!(
            writer.into_inner(),
            vec![0x02, 0x00, 0x05, 0x01, 0x20, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_write_layer_reports_cell() {
        let mut symbols = SymbolTable::new();
        symbols.reserve("", 0);

        let layer = Layer::new(["", "", "f1"]);
        let mut writer = KeymapWriter::new(Vec::new());
        let err = writer.write_layer(2, &layer, &symbols).unwrap_err();
        assert!(matches!(
            err,
            KeymapError::UnresolvedReference { site: ReferenceSite::LayerCell { layer: 2, cell: 2 }, .. }
        ));
    }
}
