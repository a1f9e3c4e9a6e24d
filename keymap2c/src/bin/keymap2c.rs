use anyhow::Context;
use clap::Parser;
use keymap2c::{generate, CompileOptions, GenerateConfig, LayerPlacement, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "ErgoDox layout to QMK keymap table compiler", long_about = None)]
struct Args {
    /// Firmware source appended after the generated table
    #[arg(default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Generated keymap source
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Read key codes from this C header instead of the built-in QMK table
    #[arg(short, long)]
    keycodes: Option<PathBuf>,

    /// Place the layer tables before the key records
    #[arg(long)]
    layers_first: bool,

    /// Also write the bare binary table to this path
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
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

    let config = GenerateConfig {
        template: args.template,
        output: args.output,
        keycodes: args.keycodes,
        raw: args.raw,
        options: CompileOptions {
            placement,
            ..CompileOptions::default()
        },
    };

    info!("Generating {} from {}", config.output.display(), config.template.display());
    let compiled = generate(&config)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;
    info!(
        "{} keys, {} layers, {} bytes",
        compiled.symbols.len(),
        compiled.layout.layer_count,
        compiled.data.len()
    );

    Ok(())
}
