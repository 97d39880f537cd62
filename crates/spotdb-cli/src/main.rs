mod search;
mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spotdb_core::{Vibe, DEFAULT_ORIGIN, DEFAULT_RADIUS_KM};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "spotdb-cli")]
#[command(about = "Search and inspect hidden spots offline")]
struct Cli {
    /// Seed file holding the spot dataset.
    #[arg(
        long,
        global = true,
        env = "SPOTDB_SEED_PATH",
        default_value = "./config/spots.yaml"
    )]
    seed: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank spots by distance from an origin.
    Search {
        #[arg(long, default_value_t = DEFAULT_ORIGIN.latitude, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, default_value_t = DEFAULT_ORIGIN.longitude, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in kilometres.
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius: f64,
        /// Only spots with this vibe (case-insensitive).
        #[arg(long)]
        vibe: Option<Vibe>,
        /// Only spots whose name or description contains this text.
        #[arg(long = "search")]
        term: Option<String>,
        /// Print results as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate the seed file and summarise its contents.
    CheckSeed,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            lat,
            lng,
            radius,
            vibe,
            term,
            json,
        }) => {
            let args = search::SearchArgs {
                lat,
                lng,
                radius,
                vibe,
                term,
                json,
            };
            search::run_search(&cli.seed, &args)?;
        }
        Some(Commands::CheckSeed) => seed::run_check_seed(&cli.seed)?,
        None => println!("spotdb-cli: try `spotdb-cli search` or `spotdb-cli check-seed`"),
    }

    Ok(())
}
