use anyhow::Context;
use clap::Parser;
use keymap2c::{
    compile_reference, BlobLayout, BlobLoader, CompileOptions, KeyCodeTable, KeyRecord,
    LayerPlacement, GRID_CELLS,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump a binary keymap table", long_about = None)]
struct Args {
    /// Raw table written by `keymap2c --raw`
    input: PathBuf,

    /// Number of layer tables in the blob
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// Cells per layer
    #[arg(long, default_value_t = GRID_CELLS)]
    cells: usize,

    /// The layer tables precede the key records
    #[arg(long)]
    layers_first: bool,

    /// Label offsets with key names from the built-in layout
    #[arg(long)]
    names: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let placement = if args.layers_first {
        LayerPlacement::Leading
    } else {
        LayerPlacement::Trailing
    };
    let layout = BlobLayout::new(args.layers, args.cells, placement);

    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let keymap = BlobLoader::load(&data, &layout).context("not a valid keymap table")?;

    let symbols = if args.names {
        let options = CompileOptions {
            cells: args.cells,
            placement,
        };
        Some(compile_reference(&KeyCodeTable::qmk(), &options)?.symbols)
    } else {
        None
    };
    let label = |offset: u16| match symbols.as_ref().and_then(|s| s.name_at(offset)) {
        Some(name) => format!("{:#06x}({:?})", offset, name),
        None => format!("{:#06x}", offset),
    };

    println!("Size: {} bytes", data.len());
    println!("Records: {}, layers: {} x {} cells", keymap.keys.len(), keymap.layers.len(), args.cells);

    println!("\n=== KEYS ===");
    for key in &keymap.keys {
        print_key(key, &label);
    }

    // With names, unassigned cells are left out
    let placeholder = keymap.keys.first().map(|key| key.offset);
    println!("\n=== LAYERS ===");
    for (index, cells) in keymap.layers.iter().enumerate() {
        println!("Layer[{}]:", index);
        for (cell, &offset) in cells.iter().enumerate() {
            if symbols.is_none() || Some(offset) != placeholder {
                println!("  [{:2}] {}", cell, label(offset));
            }
        }
    }

    Ok(())
}

fn print_key(key: &KeyRecord, label: &impl Fn(u16) -> String) {
    let sequence = |offsets: &[u16]| {
        offsets
            .iter()
            .map(|&offset| label(offset))
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!(
        "{}: codes=({:#04x}, {:#04x}) primary=[{}] secondary=[{}]",
        label(key.offset),
        key.primary_code,
        key.secondary_code,
        sequence(&key.primary),
        sequence(&key.secondary)
    );
}
