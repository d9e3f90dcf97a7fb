use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use tiny_loader::{load_program, memory_map, AssemblyParser, Config};

#[derive(Parser)]
#[command(name = "tinyload", version, about = "Encode a TinyOS program listing into a memory image")]
struct Cli {
  /// Program listing, one instruction per line
  program: PathBuf,

  /// Configuration file
  #[arg(short, long, default_value = "tinyload.toml")]
  config: PathBuf,

  /// Where to write the memory image
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Print the memory map
  #[arg(long)]
  map: bool,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let config = Config::load(&cli.config)?;
  let program = load_program(&cli.program, &AssemblyParser)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  program.dump(&mut out, config.dump_program)?;

  let encoder = config.encoder();
  let image = program.memory_image_with(&encoder)
                     .with_context(|| format!("cannot encode {}", cli.program.display()))?;

  if cli.map {
    let table = memory_map(&program, &encoder)?;
    write!(out, "{}", table)?;
  }

  match &cli.output {
    Some(path) => {
      fs::write(path, &image).with_context(|| format!("cannot write {}", path.display()))?;
      info!(path = %path.display(), bytes = image.len(), "wrote memory image");
    }
    None => info!(bytes = image.len(), "encoded memory image")
  }

  Ok(())
}
