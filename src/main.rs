use anyhow::{Context, Result};
use clap::Parser;
use pondlife_lib::app::App;
use pondlife_lib::model::config::PondConfig;
use pondlife_lib::model::metrics::init_logging;
use pondlife_lib::model::persistence::{load_snapshot, save_snapshot};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of days to simulate
    #[arg(short, long, default_value_t = 30)]
    days: u32,

    /// Seed for the random source
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Species to stock a fresh pond with
    #[arg(long, default_value = "koi")]
    species: String,

    /// Number of individuals to buy for a fresh pond
    #[arg(long, default_value_t = 4)]
    stock: u32,

    /// Rule table in TOML; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resume from a snapshot file
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write a snapshot file when the run ends
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print one JSON report per day instead of a summary
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<PondConfig> {
    let Some(path) = path else {
        return Ok(PondConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    PondConfig::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config = load_config(args.config.as_ref())?;
    let mut app = App::new(config, args.seed)?;

    if let Some(path) = &args.load {
        let snapshot = load_snapshot(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
        app.restore(snapshot);
    }
    if !app.pond.built {
        let added = app.stock(&args.species, args.stock)?;
        tracing::info!(species = %args.species, added, "Pond stocked");
    }

    for _ in 0..args.days {
        let report = app.run_day();
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    if let Some(path) = &args.save {
        save_snapshot(&app.snapshot(), path)
            .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
    }

    if !args.json {
        println!("{}", app.summary());
    }
    Ok(())
}
