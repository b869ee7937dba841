// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider resource-planner project*
//!
//! Basic database management for the resource planner
//!

use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValue};
use resource_planner_crud::{
    DatabaseRowCount, backup, db_url_from_path, restore, setup_database_at_path,
};
use sqlx::SqlitePool;
use std::path::PathBuf;

/// Resource planner database entry point
///
/// One of:
/// - Create the database (and run migrations)
/// - Backup the database to JSON
/// - Restore the database from JSON
/// - Print database stats
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Check the options
    match (&args.cli_command, &args.database, &args.json) {
        //----------------------------------------------------------------------
        // Valid
        //----------------------------------------------------------------------
        (Command::Create, database, _) => match setup_database_at_path(database).await {
            Ok(_pool) => println!("Success"),
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
        (Command::Backup, database, Some(json)) => {
            let mut transaction = begin_transaction(database).await;

            match backup(&mut transaction, json.to_owned()).await {
                Ok(()) => println!("Successfully backed up database to {json:?}"),
                Err(error) => {
                    eprintln!("Error backing up database: {error}");
                    std::process::exit(1);
                }
            }
        }
        (Command::Restore, database, Some(json)) => {
            let mut transaction = begin_transaction(database).await;

            // Restore the database
            match restore(&mut transaction, json.to_owned()).await {
                Ok(()) => (),
                Err(error) => {
                    eprintln!("Error restoring database: {error}");
                    std::process::exit(1);
                }
            }

            // Commit the transaction
            match transaction.commit().await {
                Ok(()) => println!("Successfully restored database"),
                Err(error) => {
                    eprintln!("Error committing transaction: {error}");
                    std::process::exit(1);
                }
            }
        }
        (Command::Stats, database, _) => {
            let mut transaction = begin_transaction(database).await;

            match DatabaseRowCount::all(&mut transaction).await {
                Ok(row_counts) => {
                    println!("people:      {}", row_counts.people);
                    println!("clients:     {}", row_counts.clients);
                    println!("projects:    {}", row_counts.projects);
                    println!("assignments: {}", row_counts.assignments);
                }
                Err(error) => {
                    eprintln!("Error fetching stats: {error}");
                    std::process::exit(1);
                }
            }
        }
        //----------------------------------------------------------------------
        // Invalid
        //----------------------------------------------------------------------
        _ => {
            eprintln!("CLI Error: invalid options");
            Cli::command().print_long_help()?;
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Open the database at `database` and begin a transaction
async fn begin_transaction(database: &PathBuf) -> sqlx::Transaction<'static, sqlx::Sqlite> {
    // Generate database URL
    let db_url = db_url_from_path(database);

    // Open database connection
    let pool = match SqlitePool::connect(&db_url).await {
        Ok(pool) => pool,
        Err(error) => {
            eprintln!("Error connecting to database: {error}");
            std::process::exit(1);
        }
    };

    // Begin database transaction
    match pool.begin().await {
        Ok(transaction) => transaction,
        Err(error) => {
            eprintln!("Error starting transaction: {error}");
            std::process::exit(1);
        }
    }
}

/// Resource planner CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Resource planner tool for basic database management",
    after_help = "This is intended for use when deploying to a server and in CI"
)]
pub struct Cli {
    // Database command
    #[arg(value_enum)]
    pub cli_command: Command,

    /// Path to the database
    #[arg(long)]
    pub database: PathBuf,

    /// Path to the dir that contains the JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Command {
    Create,
    Backup,
    Restore,
    Stats,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Create, Self::Backup, Self::Restore, Self::Stats]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Create => {
                Some(PossibleValue::new("create").help("Create a new database at the path"))
            }
            Command::Backup => Some(
                PossibleValue::new("backup")
                    .help("Backup the database at path to JSON in dir at path"),
            ),
            Command::Restore => Some(
                PossibleValue::new("restore")
                    .help("Restore the database at path from JSON in dir at path"),
            ),
            Command::Stats => Some(PossibleValue::new("stats").help("Print database stats")),
        }
    }
}
