use super::error::{BlobError, Result};
use super::BlobLayout;
use byteorder::{BigEndian, ReadBytesExt};
use log::debug;
use std::collections::HashSet;
use std::io::{self, Cursor};

/// A decoded virtual key record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// Absolute offset of the record in the blob.
    pub offset: u16,
    pub primary: Vec<u16>,
    pub secondary: Vec<u16>,
    pub primary_code: u8,
    pub secondary_code: u8,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    pub layout: BlobLayout,
    /// Records in blob order.
    pub keys: Vec<KeyRecord>,
    /// One offset per cell, per layer.
    pub layers: Vec<Vec<u16>>,
}

impl Keymap {
    pub fn key_at(&self, offset: u16) -> Option<&KeyRecord> {
        self.keys
            .binary_search_by_key(&offset, |key| key.offset)
            .ok()
            .map(|index| &self.keys[index])
    }
}

pub struct BlobLoader;

impl BlobLoader {
    /// Decode a blob produced with the given layout.
    pub fn load(data: &[u8], layout: &BlobLayout) -> Result<Keymap> {
        let table_len = layout.layer_table_len();
        if data.len() < table_len {
            return Err(BlobError::FileTooSmall {
                expected: table_len,
                actual: data.len(),
            });
        }

        let records_len = data.len() - table_len;
        let records_start = layout.record_base();
        let records = &data[records_start..records_start + records_len];
        let tables_start = layout.layer_base(records_len);
        let tables = &data[tables_start..tables_start + table_len];

        let keys = Self::read_records(records, records_start)?;
        let layers = Self::read_layers(tables, layout)?;
        debug!(
            "loaded {} records and {} layers from {} bytes",
            keys.len(),
            layers.len(),
            data.len()
        );

        let keymap = Keymap {
            layout: *layout,
            keys,
            layers,
        };
        Self::validate(&keymap)?;
        Ok(keymap)
    }

    fn read_records(region: &[u8], base: usize) -> Result<Vec<KeyRecord>> {
        let mut cursor = Cursor::new(region);
        let mut keys = Vec::new();

        while (cursor.position() as usize) < region.len() {
            let start = base + cursor.position() as usize;
            let offset = u16::try_from(start).map_err(|_| BlobError::OffsetRange(start))?;
            let key = Self::read_record(&mut cursor, offset)
                .map_err(|_| BlobError::Truncated(start))?;
            keys.push(key);
        }

        Ok(keys)
    }

    fn read_record(cursor: &mut Cursor<&[u8]>, offset: u16) -> io::Result<KeyRecord> {
        let primary = Self::read_sequence(cursor)?;
        let secondary = Self::read_sequence(cursor)?;
        let primary_code = cursor.read_u8()?;
        let secondary_code = cursor.read_u8()?;

        Ok(KeyRecord {
            offset,
            primary,
            secondary,
            primary_code,
            secondary_code,
        })
    }

    fn read_sequence(cursor: &mut Cursor<&[u8]>) -> io::Result<Vec<u16>> {
        let count = cursor.read_u8()? as usize;
        let mut offsets = Vec::with_capacity(count);
        for _ in 0..count {
            offsets.push(cursor.read_u16::<BigEndian>()?);
        }
        Ok(offsets)
    }

    fn read_layers(region: &[u8], layout: &BlobLayout) -> Result<Vec<Vec<u16>>> {
        let mut cursor = Cursor::new(region);
        let mut layers = Vec::with_capacity(layout.layer_count);

        for _ in 0..layout.layer_count {
            let mut cells = Vec::with_capacity(layout.cells);
            for _ in 0..layout.cells {
                cells.push(cursor.read_u16::<BigEndian>()?);
            }
            layers.push(cells);
        }

        Ok(layers)
    }

    fn validate(keymap: &Keymap) -> Result<()> {
        let starts: HashSet<u16> = keymap.keys.iter().map(|key| key.offset).collect();

        for key in &keymap.keys {
            for &target in key.primary.iter().chain(key.secondary.iter()) {
                if !starts.contains(&target) {
                    return Err(BlobError::DanglingKeyReference {
                        record: key.offset,
                        target,
                    });
                }
            }
        }

        for (layer, cells) in keymap.layers.iter().enumerate() {
            for (cell, &target) in cells.iter().enumerate() {
                if !starts.contains(&target) {
                    return Err(BlobError::DanglingCellReference {
                        layer,
                        cell,
                        target,
                    });
                }
            }
        }

        Ok(())
    }
}
