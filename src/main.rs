use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uidex::commands::{build_dataset, normalize_file, query_components, show_config, show_status};
use uidex::index::DEFAULT_SEARCH_LIMIT;

#[derive(Parser)]
#[command(name = "uidex")]
#[command(about = "Component template indexing and retrieval for AI-assisted website generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the component dataset and vector index
    Build {
        /// Skip components whose embedding fails instead of aborting
        #[arg(long)]
        skip_errors: bool,
    },
    /// Search the index for components matching a requirement text
    Query {
        /// Free-text requirement, e.g. "hero with a signup button"
        text: String,
        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Normalize a raw generation output file into renderer-ready sections
    Normalize {
        /// Path to a JSON array of {type, variant, props} sections
        file: PathBuf,
    },
    /// Show the effective configuration
    Config,
    /// Show provider health and dataset/index state
    Status,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { skip_errors } => {
            build_dataset(skip_errors)?;
        }
        Commands::Query { text, limit } => {
            query_components(&text, limit)?;
        }
        Commands::Normalize { file } => {
            normalize_file(&file)?;
        }
        Commands::Config => {
            show_config()?;
        }
        Commands::Status => {
            show_status()?;
        }
    }

    Ok(())
}
