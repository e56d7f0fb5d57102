//! Pokédex CLI — fetch and print single catalog entries.
//!
//! Commands:
//! - `show` — fetch one entry by index and print its summary (or JSON)

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use pokedex_core::{CatalogProvider, Pokemon, RestCatalog};

#[derive(Parser)]
#[command(name = "pokedex", about = "Pokedex CLI — catalog entry lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one catalog entry and print it.
    Show {
        /// Catalog index (1-based).
        index: u32,

        /// Catalog base URL.
        #[arg(long, default_value = RestCatalog::DEFAULT_BASE_URL)]
        base_url: String,

        /// Print the entry as JSON instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            index,
            base_url,
            json,
        } => run_show(index, &base_url, json),
    }
}

fn run_show(index: u32, base_url: &str, json: bool) -> Result<()> {
    if index < 1 {
        bail!("index must be >= 1");
    }

    let catalog = RestCatalog::with_base_url(base_url);
    let pokemon = catalog.fetch(index)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pokemon)?);
    } else {
        print_summary(&pokemon);
    }
    Ok(())
}

fn print_summary(pokemon: &Pokemon) {
    println!("#{} {}", pokemon.index, pokemon.display_name());
    if let Some(url) = &pokemon.sprite_url {
        println!("sprite: {url}");
    }

    println!("\nAbilities:");
    for ability in &pokemon.abilities {
        println!("  - {ability}");
    }

    println!("\nStats:");
    for stat in &pokemon.stats {
        println!("  {}: {}", stat.name, stat.value);
    }
}
