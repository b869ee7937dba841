// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider resource-planner project*
//!
//! Serve the resource planner web API (and, optionally, the built frontend)
//!

use clap::Parser;
use log::info;
use resource_planner_crud::db_url_from_path;
use resource_planner_www_api::{ApiAccessMode, prepare_api_router};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

/// Entry point for the API server
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("resource_planner")
        .add_filter_allow_str("tower_http")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let args = Cli::parse();

    // Read-only unless asked otherwise
    let access_mode = if args.read_only {
        ApiAccessMode::Read
    } else {
        ApiAccessMode::ReadWrite
    };

    // Build the router against the database
    let db_url = db_url_from_path(&args.database);
    let router = prepare_api_router(&db_url, access_mode, args.static_dir.as_deref()).await?;

    // Serve
    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    info!("API listening on {}", args.address);
    axum::serve(listener, router).await?;

    Ok(())
}

/// Resource planner API server CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Serve the resource planner web API")]
pub struct Cli {
    /// Path to the database
    #[arg(long)]
    pub database: PathBuf,

    /// Address to bind, e.g. 127.0.0.1:8000
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub address: String,

    /// Serve the API read-only (no create/update/delete routes)
    #[arg(long)]
    pub read_only: bool,

    /// Dir holding the built frontend to serve alongside the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}
