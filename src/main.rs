use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use swatnav::catalog;
use swatnav::config;
use swatnav::db::Database;
use swatnav::errors::{Result, SwatNavError};
use swatnav::preview::{format_result_as_json, format_result_as_markdown};
use swatnav::resolution::{resolve, ResolveRequest};

/// Foreign-key navigation for SWAT+ plain-text datasets.
#[derive(Parser)]
#[command(name = "swatnav", about = "Foreign-key navigation for SWAT+ plain-text datasets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the relationship under a cursor position in a dataset file
    Resolve {
        /// Dataset file to resolve in
        file: PathBuf,
        /// 0-based line index of the cursor
        #[arg(short, long)]
        line: usize,
        /// 0-based character offset of the cursor within the line
        #[arg(short, long)]
        column: usize,
        /// Dataset root (default: the file's directory)
        #[arg(short, long)]
        dataset: Option<PathBuf>,
        /// SQLite project database (default: from dataset config)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// List tables in a project database
    Tables {
        /// SQLite project database
        #[arg(long)]
        db: PathBuf,
    },
    /// List foreign keys declared on a table
    ForeignKeys {
        /// Table to inspect
        table: String,
        /// SQLite project database
        #[arg(long)]
        db: PathBuf,
    },
    /// Print the recognized file/table pairs
    Catalog,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            file,
            line,
            column,
            dataset,
            db,
            json,
        } => {
            let dataset_root = match dataset {
                Some(d) => d,
                None => file
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")),
            };
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| SwatNavError::Dataset {
                    message: "file path has no base name".to_string(),
                    path: file.display().to_string(),
                })?;
            let text = std::fs::read_to_string(&file)?;

            let cfg = config::load_config(&dataset_root)?;
            let db_path = db.or_else(|| config::database_path(&dataset_root, &cfg));

            // An unusable database degrades to fallback-only resolution.
            let database = db_path.and_then(|p| match Database::open_read_only(&p) {
                Ok(db) => Some(db),
                Err(e) => {
                    tracing::debug!(error = %e, "project database not usable");
                    None
                }
            });

            let mut request = ResolveRequest::new(
                &dataset_root,
                &file_name,
                &text,
                line,
                column,
                database.as_ref(),
            );
            request.max_header_lines = cfg.max_header_lines;

            match resolve(&request)? {
                Some(result) => {
                    if json {
                        println!("{}", format_result_as_json(&result));
                    } else {
                        println!("{}", format_result_as_markdown(&result));
                    }
                }
                None => println!("No relationship found at {}:{}:{}", file_name, line, column),
            }
        }
        Commands::Tables { db } => {
            let database = Database::open_read_only(&db)?;
            for table in database.list_tables()? {
                println!("{}", table);
            }
        }
        Commands::ForeignKeys { table, db } => {
            let database = Database::open_read_only(&db)?;
            let decls = database.foreign_key_declarations(&table)?;
            if decls.is_empty() {
                println!("No foreign keys declared on '{}'", table);
            } else {
                for d in decls {
                    println!(
                        "{} -> {}.{}",
                        d.source_column, d.target_table, d.target_column
                    );
                }
            }
        }
        Commands::Catalog => {
            for ft in catalog::FILE_TYPES {
                println!("{} <-> {}", ft.file_name, ft.table);
            }
        }
    }
    Ok(())
}
