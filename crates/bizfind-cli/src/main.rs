mod render;
mod saved;
mod search;

use bizfind_core::SearchCriteria;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bizfind")]
#[command(about = "Find businesses by type, location, rating and price")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for businesses and print the matches
    Search(SearchArgs),
    /// List saved searches, or print one of them
    Saved {
        /// 1-based index of the saved search to print
        #[arg(long)]
        show: Option<usize>,
    },
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Kind of business, e.g. "restaurant" or "coffee shop"
    #[arg(default_value = "restaurant")]
    business_type: String,

    #[arg(short, long, default_value = "New York")]
    location: String,

    /// Search radius in meters
    #[arg(
        short,
        long,
        default_value_t = 5_000,
        value_parser = clap::value_parser!(u32).range(
            i64::from(SearchCriteria::MIN_RADIUS_METERS)..=i64::from(SearchCriteria::MAX_RADIUS_METERS)
        )
    )]
    radius: u32,

    #[arg(long, default_value_t = 4.0, value_parser = parse_rating)]
    min_rating: f64,

    /// Highest price level to keep (1 = $, 4 = $$$$)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=4))]
    max_price: u8,

    #[arg(long)]
    open_now: bool,

    /// Additional keyword passed to the search
    #[arg(short, long)]
    keyword: Option<String>,

    /// Google Maps API key; falls back to GOOGLE_MAPS_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Append the results to the saved-searches file
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if (0.0..=5.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("rating must be between 0.0 and 5.0, got {value}"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bizfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => search::run_search(&config, args).await,
        Commands::Saved { show } => saved::run_saved(&config.saved_searches_path, show),
    }
}
