//! AqlStore CLI
//!
//! Command-line interface for a person store file.

use std::path::PathBuf;

use aqlstore::export::export_record;
use aqlstore::form::{self, FormInput};
use aqlstore::{seed, AqlError, Config, DecodeMode, PersonStore, Record, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

/// AqlStore CLI
#[derive(Parser, Debug)]
#[command(name = "aqlstore")]
#[command(about = "CRUD over a flat AQL person store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./AqlData")]
    data_dir: String,

    /// Store file name inside the data directory
    #[arg(short, long, default_value = "people.aql")]
    file: String,

    /// Fail on records with a non-positive id or a bad header
    #[arg(long)]
    strict: bool,

    /// fsync after every write
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all records
    List,

    /// Show one record
    Get {
        /// Record id
        id: i64,
    },

    /// Add a record (the id is assigned)
    Add {
        name: String,

        /// Age; empty means 0
        age: String,

        city: String,
    },

    /// Replace every field of an existing record
    Update {
        /// Record id
        id: i64,

        name: String,

        /// Age; empty means 0
        age: String,

        city: String,
    },

    /// Delete a record
    Delete {
        /// Record id
        id: i64,
    },

    /// Print the raw store file
    Raw,

    /// Append generated test records
    Generate {
        /// Number of records to add
        #[arg(short, long, default_value = "500")]
        count: usize,

        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write one record to its own file
    Export {
        /// Record id
        id: i64,

        /// Output directory (defaults to the data directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aqlstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("AqlStore CLI v{}", aqlstore::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .file_name(&args.file)
        .decode_mode(mode)
        .sync_writes(args.sync)
        .build();

    let store = PersonStore::open(config)?;

    match args.command {
        Commands::List => {
            for record in store.get_all()? {
                print_record(&record);
            }
        }
        Commands::Get { id } => match store.get(id)? {
            Some(record) => print_record(&record),
            None => println!("No record with id {}", id),
        },
        Commands::Add { name, age, city } => {
            let saved = form::save(&store, None, &FormInput::new(name, age, city))?;
            println!("Added record {}", saved.id);
        }
        Commands::Update { id, name, age, city } => {
            let Some(selected) = store.get(id)? else {
                println!("No record with id {}", id);
                return Ok(());
            };
            form::save(&store, Some(&selected), &FormInput::new(name, age, city))?;
            println!("Updated record {}", id);
        }
        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted record {}", id);
            } else {
                println!("No record with id {}", id);
            }
        }
        Commands::Raw => {
            print!("{}", store.read_raw()?);
        }
        Commands::Generate { count, seed: rng_seed } => {
            let mut rng = match rng_seed {
                Some(value) => StdRng::seed_from_u64(value),
                None => StdRng::from_entropy(),
            };
            let ids = seed::generate(&store, count, &mut rng)?;
            match (ids.first(), ids.last()) {
                (Some(first), Some(last)) => {
                    println!("Generated {} records (ids {}..={})", ids.len(), first, last)
                }
                _ => println!("Generated 0 records"),
            }
        }
        Commands::Export { id, out } => {
            let record = store
                .get(id)?
                .ok_or_else(|| AqlError::InvalidInput(format!("no record with id {}", id)))?;
            let dir = out.unwrap_or_else(|| store.config().data_dir.clone());
            let path = export_record(&record, &store.config().entity, &dir)?;
            println!("Exported record {} to {}", id, path.display());
        }
    }

    Ok(())
}

fn print_record(record: &Record) {
    println!(
        "{:>5}  {:<24} {:>4}  {}",
        record.id, record.name, record.age, record.city
    );
}
