//! HeroSort — rebuilds hero skill icons and skin assets into a per-hero
//! folder layout and writes the lookup tables used by the game client.
//!
//! Thin binary entry point. All logic lives in the `herosort-core` crate.

use anyhow::Context;
use clap::Parser;
use herosort_core::RunConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "herosort", version)]
#[command(about = "Reorganise hero skill icons and skins into hero/<id>/ folders", long_about = None)]
#[command(
    after_help = "Outputs are written to the current directory.\n\nExample:\n  herosort \"C:\\folder\\skill\\hero\" \"C:\\folder\\skin\\hero\" \"C:\\folder\\skill\\skillInfo.csv\""
)]
struct Cli {
    /// Folder containing icon_skill_<id>_<n>.png files (any depth)
    skill_dir: PathBuf,

    /// Folder containing hero_<id>_<name>/.../Skin<n>/<file> assets
    skin_dir: PathBuf,

    /// CSV of skill names: header row, then <id>_<n>,<name> rows
    skill_csv: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("HeroSort starting");

    let config = RunConfig::new(&cli.skill_dir, &cli.skin_dir, &cli.skill_csv);
    herosort_core::run(&config).with_context(|| {
        format!(
            "run failed (skills: {}, skins: {}, csv: {})",
            cli.skill_dir.display(),
            cli.skin_dir.display(),
            cli.skill_csv.display()
        )
    })?;

    Ok(())
}
