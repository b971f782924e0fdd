mod import;
mod search;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use recipebox_server::config::DEFAULT_IMAGE_BASE_URL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Recipebox CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import complete recipes from the corpus CSV into the database
    Import {
        /// SQLite database file (created and migrated if missing)
        #[arg(long, env = "DATABASE_URL", default_value = "recipe_database.sqlite3")]
        database_url: String,
        /// Recipe corpus CSV
        #[arg(long, default_value = "Food.csv")]
        csv: PathBuf,
        /// Base URL that image names are resolved against
        #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
        image_base_url: String,
    },
    /// Search the corpus CSV and print matches as JSON
    #[command(group(ArgGroup::new("query").required(true).args(["name", "ingredients"])))]
    Search {
        /// Recipe corpus CSV
        #[arg(long, default_value = "Food.csv")]
        csv: PathBuf,
        /// Substring of the recipe title
        #[arg(long)]
        name: Option<String>,
        /// Comma-separated ingredients that must all appear
        #[arg(long)]
        ingredients: Option<String>,
        /// Base URL that image names are resolved against
        #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
        image_base_url: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            database_url,
            csv,
            image_base_url,
        } => {
            import::import_corpus(&database_url, &csv, &image_base_url)?;
        }
        Commands::Search {
            csv,
            name,
            ingredients,
            image_base_url,
        } => {
            let query = match (name, ingredients) {
                (Some(name), _) => search::Query::Name(name),
                (None, Some(ingredients)) => search::Query::Ingredients(ingredients),
                (None, None) => anyhow::bail!("either --name or --ingredients is required"),
            };
            search::search(&csv, &image_base_url, &query)?;
        }
    }

    Ok(())
}
