pub mod lexer;
pub mod header;
pub mod macros;
pub mod registry;
pub mod binary;
pub mod emitter;
pub mod layout;

pub use keymap_core::*;
pub use binary::{CompileOptions, CompiledKeymap, Compiler, SymbolTable};
pub use registry::{Registry, RegistryBuilder};

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE: &str = "keymap.c";
pub const DEFAULT_OUTPUT: &str = "qmk/keyboards/ergodox_ez/keymaps/xudongz/keymap.c";

/// Settings for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Hand-written firmware source appended after the table.
    pub template: PathBuf,
    pub output: PathBuf,
    /// Firmware keycode header; the built-in QMK table when unset.
    pub keycodes: Option<PathBuf>,
    /// Also write the bare table here.
    pub raw: Option<PathBuf>,
    pub options: CompileOptions,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            keycodes: None,
            raw: None,
            options: CompileOptions::default(),
        }
    }
}

pub fn compile_keymap(
    keys: &[VirtualKey],
    layers: &[Layer],
    options: &CompileOptions,
) -> Result<CompiledKeymap> {
    Compiler::new(*options).compile(keys, layers)
}

pub fn load_keycodes(header: Option<&Path>) -> Result<KeyCodeTable> {
    match header {
        Some(path) => header::load_keycode_header(path),
        None => Ok(KeyCodeTable::qmk()),
    }
}

/// Compiles the built-in ErgoDox layout.
pub fn compile_reference(table: &KeyCodeTable, options: &CompileOptions) -> Result<CompiledKeymap> {
    let registry = layout::reference_registry(table)?;
    compile_keymap(registry.keys(), &layout::reference_layers(), options)
}

/// Compiles the reference layout and writes the firmware source.
///
/// Nothing is written unless compilation succeeds and the template can be
/// read.
pub fn generate(config: &GenerateConfig) -> Result<CompiledKeymap> {
    let table = load_keycodes(config.keycodes.as_deref())?;
    let compiled = compile_reference(&table, &config.options)?;

    let template = fs::read(&config.template)?;
    let artifact = emitter::render(&compiled.data, &template)?;

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&config.output, artifact)?;
    info!(
        "wrote {} bytes of keymap data to {}",
        compiled.data.len(),
        config.output.display()
    );

    if let Some(raw) = &config.raw {
        fs::write(raw, &compiled.data)?;
        info!("wrote raw table to {}", raw.display());
    }

    Ok(compiled)
}
