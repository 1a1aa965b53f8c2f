//! `tcg-import`: derive catalog cards from the creature database.
//!
//! ```text
//! tcg-import card pikachu
//! tcg-import --snapshot catalog.bin range 1 151
//! tcg-import --snapshot catalog.bin list --type fire
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tcg_catalog::catalog::{CardQuery, Catalog, MemoryStore};
use tcg_catalog::core::{logging, CatalogConfig, Result};
use tcg_catalog::pokeapi::PokeApiClient;
use tcg_catalog::tables::Tables;

#[derive(Parser, Debug)]
#[command(name = "tcg-import", version)]
#[command(about = "Import trading cards derived from creature data")]
struct Cli {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store snapshot; loaded if present and saved after the command.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Skip the pause between creatures in range imports.
    #[arg(long)]
    no_throttle: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import one creature by name or id.
    Card { identifier: String },
    /// Import creature ids `start..=end`.
    Range { start: u32, end: u32 },
    /// List stored cards.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long = "type")]
        category: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if cli.no_throttle {
        config.catalog.import_throttle_ms = 0;
    }

    let store = match &cli.snapshot {
        Some(path) if path.exists() => MemoryStore::load(path)?,
        _ => MemoryStore::new(),
    };
    let client = PokeApiClient::new(&config.api)?;
    let tables = Tables::load(&config.tables)?;
    let mut catalog = Catalog::new(client, tables, store, config.catalog.clone());

    match cli.command {
        Command::Card { identifier } => {
            let stored = catalog.import_card(&identifier)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Command::Range { start, end } => {
            let result = catalog.import_range(start, end);
            // Cards stored before a failure are still worth saving.
            if let Some(path) = &cli.snapshot {
                catalog.store().save(path)?;
            }
            let imported = result?;
            println!("{}", serde_json::to_string_pretty(&imported)?);
            return Ok(());
        }
        Command::List {
            page,
            page_size,
            category,
            name,
        } => {
            let query = CardQuery {
                page,
                page_size,
                category,
                name,
            };
            let listing = catalog.list_cards(&query)?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }
    }

    if let Some(path) = &cli.snapshot {
        catalog.store().save(path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("tcg-import: {err}");
            ExitCode::FAILURE
        }
    }
}
