// Tunesmith CLI.
//
// Thin front end over the catalogue and music crates: prints a page as JSON,
// renders one song (optionally to a MIDI file), or resolves a chord symbol.
// Logging goes to stderr via `env_logger` (set `RUST_LOG=debug` for per-page
// traces); generated data goes to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tunesmith_catalog::{Catalog, CatalogConfig, PageRequest};
use tunesmith_music::midi::write_midi;
use tunesmith_music::theory::{Key, resolve_chord_symbol};

/// Tunesmith - deterministic fictitious song catalogue
#[derive(Parser)]
#[command(name = "tunesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the catalogue as JSON
    Page {
        /// Catalogue seed
        #[arg(long, allow_negative_numbers = true)]
        seed: i64,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: i64,

        /// Target average likes per song, within [0, 10]
        #[arg(long, default_value_t = 0.0)]
        likes: f64,

        /// Localization tag (en, ru)
        #[arg(long, default_value = "en")]
        locale: String,

        /// Path to a JSON config overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the musical content of one item as JSON
    Song {
        /// Item seed
        #[arg(long, allow_negative_numbers = true)]
        item_seed: i64,

        /// Genre label driving the song's form
        #[arg(long)]
        genre: String,

        /// Also write the song as a MIDI file
        #[arg(long)]
        midi: Option<PathBuf>,
    },

    /// Resolve a roman numeral to a chord symbol
    Chord {
        /// Numeral such as IV or vi
        numeral: String,

        /// Key name, e.g. "G major"
        #[arg(long, default_value = "C major")]
        key: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Page {
            seed,
            page,
            likes,
            locale,
            config,
            pretty,
        } => {
            let request = PageRequest {
                seed,
                page,
                likes,
                localization: locale,
            };
            request.validate().context("invalid page request")?;

            let config = match config {
                Some(path) => CatalogConfig::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => CatalogConfig::default(),
            };

            let songs = Catalog::new(config).page(
                request.seed,
                request.page,
                request.localization(),
                request.likes,
            );
            let json = if pretty {
                serde_json::to_string_pretty(&songs)?
            } else {
                serde_json::to_string(&songs)?
            };
            println!("{json}");
        }
        Commands::Song {
            item_seed,
            genre,
            midi,
        } => {
            let song = tunesmith_music::assemble(item_seed, &genre);
            println!("{}", serde_json::to_string_pretty(&song)?);
            if let Some(path) = midi {
                write_midi(&song, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                log::info!("wrote {}", path.display());
            }
        }
        Commands::Chord { numeral, key } => {
            let key: Key = key.parse()?;
            println!("{}", resolve_chord_symbol(&numeral, key)?);
        }
    }

    Ok(())
}
