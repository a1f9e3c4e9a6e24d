pub mod compiler;
pub mod symbols;
pub mod writer;

pub use compiler::{CompileOptions, CompiledKeymap, Compiler};
pub use symbols::SymbolTable;
pub use writer::KeymapWriter;
