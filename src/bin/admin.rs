//! CLI administration tool for shorturl.
//!
//! Inspects the record store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show the URL behind a short id
//! cargo run --bin admin -- resolve 42
//!
//! # Show the short id of a URL, if it has one
//! cargo run --bin admin -- lookup "https://example.com/"
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! Pool and retry settings are read the same way the server reads them.

use shorturl::config::{self, StorageBackend};
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::infrastructure::sequencer::PgSequencer;
use shorturl::server::connect_database;
use shorturl::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// Show the URL stored under a short id
    Resolve {
        /// Numeric short id
        short_id: i64,
    },

    /// Show the short id stored for a URL
    Lookup {
        /// URL in any equivalent spelling
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin only works with STORAGE_BACKEND=postgres");
    }

    let pool = Arc::new(connect_database(&config).await?);

    match cli.command {
        Commands::Stats => handle_stats(pool).await?,
        Commands::Resolve { short_id } => handle_resolve(pool, short_id).await?,
        Commands::Lookup { url } => handle_lookup(pool, &url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays record count and the last issued short id.
///
/// The two can differ: ids drawn by requests that lost an insert race are
/// never reused.
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgUrlRepository::new(pool.clone());
    let sequencer = PgSequencer::new(pool);

    let records = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    let last_issued = sequencer
        .last_issued()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Records:          {}",
        records.to_string().bright_green().bold()
    );
    println!(
        "  Last issued id:   {}",
        last_issued
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string())
            .bright_green()
            .bold()
    );
    println!();

    Ok(())
}

async fn handle_resolve(pool: Arc<PgPool>, short_id: i64) -> Result<()> {
    let repo = PgUrlRepository::new(pool);

    let record = repo
        .find_by_short_id(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("No record for short id {short_id}"))?;

    println!("  Short id:  {}", record.short_id.to_string().cyan());
    println!("  URL:       {}", record.canonical_url.bright_white());
    println!(
        "  Created:   {}",
        record.created_at.to_rfc3339().bright_black()
    );

    Ok(())
}

/// Normalizes `url` first, so any equivalent spelling finds the record.
async fn handle_lookup(pool: Arc<PgPool>, url: &str) -> Result<()> {
    let normalized = normalize_url(url).context("Not a valid http(s) URL")?;
    let repo = PgUrlRepository::new(pool);

    match repo
        .find_by_canonical_url(&normalized.canonical)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    {
        Some(record) => {
            println!("  Canonical: {}", record.canonical_url.bright_white());
            println!("  Short id:  {}", record.short_id.to_string().cyan().bold());
        }
        None => {
            println!("  Canonical: {}", normalized.canonical.bright_white());
            println!("{}", "⚠️  Not shortened yet".yellow());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
