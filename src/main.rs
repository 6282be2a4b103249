use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tangrams::run::{self, Config};
use tangrams::{figures, ExportOptions, Format};

/// Draws the tangram and dissection figures.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Directory to write into. Created if missing.
    #[arg(long, default_value = "figures")]
    output_dir: PathBuf,

    /// Output format; repeat for several. Defaults to pdf and eps.
    #[arg(long = "format", value_enum)]
    formats: Vec<Format>,

    /// Only draw the named figure; repeat for several.
    #[arg(long)]
    only: Vec<String>,

    /// Blank space around each drawing, in points.
    #[arg(long)]
    margin: Option<f64>,

    /// Resolution of png previews.
    #[arg(long)]
    dpi: Option<f64>,

    /// Print the figure names and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn config(self) -> Config {
        let defaults = Config::default();
        let options = ExportOptions {
            margin: self.margin.unwrap_or(defaults.options.margin),
            dpi: self.dpi.unwrap_or(defaults.options.dpi),
        };
        Config {
            out_dir: self.output_dir,
            formats: if self.formats.is_empty() {
                defaults.formats
            } else {
                self.formats
            },
            only: self.only,
            options,
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Cli::parse();
    if args.list {
        for entry in figures::catalog() {
            println!("{}", entry.name);
        }
        return Ok(());
    }

    let config = args.config();
    run::run(&config)
        .with_context(|| format!("drawing figures into {}", config.out_dir.display()))?;
    Ok(())
}
