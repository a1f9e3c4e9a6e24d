//! Renders the compiled table as C source for the QMK keymap.

use std::io::{self, Write};

pub const BYTES_PER_LINE: usize = 12;
pub const TABLE_NAME: &str = "keymapData";

pub struct Emitter<W: Write> {
    writer: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the byte array declaration followed by `template` verbatim.
    pub fn emit(mut self, data: &[u8], template: &[u8]) -> io::Result<W> {
        self.writer.write_all(b"#include QMK_KEYBOARD_H\n\n")?;
        self.write_table(data)?;
        self.writer.write_all(template)?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_table(&mut self, data: &[u8]) -> io::Result<()> {
        write!(self.writer, "const unsigned char {}[] PROGMEM = {{", TABLE_NAME)?;
        for (i, byte) in data.iter().enumerate() {
            if i % BYTES_PER_LINE == 0 {
                self.writer.write_all(b"\n\t")?;
            } else {
                self.writer.write_all(b" ")?;
            }
            write!(self.writer, "0x{:02x},", byte)?;
        }
        self.writer.write_all(b"\n};\n\n")
    }
}

/// Renders the whole output file in memory.
pub fn render(data: &[u8], template: &[u8]) -> io::Result<Vec<u8>> {
    Emitter::new(Vec::new()).emit(data, template)
}
