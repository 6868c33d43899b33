use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nbh::{HarvestError, HarvestReport};

#[derive(Parser)]
#[command(name = "nbh")]
#[command(version)]
#[command(
    about = "Harvest community prompt templates into a versioned catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one harvest: acquire, parse, classify, deduplicate, merge
    #[clap(visible_alias = "h")]
    Harvest {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "nbh.toml")]
        config: PathBuf,
        /// Override the catalog file path
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Override the per-run candidate limit
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Harvest { config, catalog, limit } => run_harvest(config, catalog, limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_harvest(
    config_path: PathBuf,
    catalog: Option<PathBuf>,
    limit: Option<usize>,
) -> Result<(), HarvestError> {
    let mut config = nbh::load_config(&config_path)?;
    if let Some(path) = catalog {
        config.catalog_path = path;
    }
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(HarvestError::config_error("--limit must be at least 1"));
        }
        config.limits.max_per_run = limit;
    }

    let report = nbh::harvest(&config)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &HarvestReport) {
    match &report.strategy {
        Some(strategy) => println!("✅ Acquired documents via {}", strategy),
        None => {
            println!("⚠️ No source available; catalog left untouched");
            return;
        }
    }

    println!(
        "Scanned {} documents: {} accepted, {} duplicates, {} parse failures, {} unreadable",
        report.scanned,
        report.accepted,
        report.duplicates,
        report.parse_failures,
        report.unreadable
    );
    println!("Catalog now holds {} templates", report.catalog_len);
}
