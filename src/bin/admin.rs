//! CLI administration tool for linktrail.
//!
//! Manages links and shows analytics directly against the PostgreSQL store,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a random code
//! cargo run --bin admin -- links create https://example.com
//!
//! # Create a link with an alias and an expiration
//! cargo run --bin admin -- links create https://example.com --alias ex1 --expires-at 2026-12-31
//!
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Delete a link
//! cargo run --bin admin -- links delete ex1
//!
//! # Global or per-link analytics
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- stats ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `BASE_URL`, `CODE_LENGTH`, `CODE_MAX_ATTEMPTS`: same as the server

use linktrail::config::Config;
use linktrail::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use linktrail::server::connect_pool;
use linktrail::state::AppState;
use linktrail::utils::timestamp::parse_expires_at;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linktrail.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show analytics: global summary, or one link when a code is given
    Stats {
        /// Short code to summarise
        code: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Destination URL (http or https)
        url: String,

        /// Custom short code
        #[arg(short, long)]
        alias: Option<String>,

        /// Expiration as ISO-8601 date or date-time
        #[arg(short, long)]
        expires_at: Option<String>,
    },

    /// List all links
    List,

    /// Delete a link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => {
            let state = pg_state(&config, &pool);
            handle_link_action(action, &state).await?
        }
        Commands::Stats { code } => {
            let state = pg_state(&config, &pool);
            handle_stats(code, &state).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Services over the PostgreSQL stores.
fn pg_state(config: &Config, pool: &PgPool) -> AppState {
    let pool = Arc::new(pool.clone());

    AppState::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgClickRepository::new(pool)),
        config.registry_settings(),
        false,
    )
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create {
            url,
            alias,
            expires_at,
        } => create_link(state, url, alias, expires_at).await,
        LinkAction::List => list_links(state).await,
        LinkAction::Delete { code, yes } => delete_link(state, code, yes).await,
    }
}

async fn create_link(
    state: &AppState,
    url: String,
    alias: Option<String>,
    expires_at: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let expires_at = expires_at.as_deref().map(parse_expires_at).transpose()?;

    let link = state
        .link_service
        .create_short_link(url, alias, expires_at)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:      {}", link.short_code.cyan());
    println!("  Short URL: {}", link.short_url.bright_yellow().bold());
    println!("  Target:    {}", link.original_url.bright_white());

    if let Some(expires_at) = link.expires_at {
        println!(
            "  Expires:   {}",
            expires_at.format("%Y-%m-%d %H:%M UTC").to_string().yellow()
        );
    }
    println!();

    Ok(())
}

/// Lists all links with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code                 Clicks   Created            Status   Target
///   ──────────────────────────────────────────────────────────────────────
///   ex1                  12       2026-01-15 10:30   ACTIVE   https://example.com
///   old                  3        2026-01-10 09:00   EXPIRED  https://example.org
/// ```
async fn list_links(state: &AppState) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<18} {:<8} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let status = if link.is_expired() {
            "EXPIRED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<20} {:<8} {:<18} {:<8} {}",
            link.short_code.cyan(),
            link.click_count,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status,
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation. Click history is kept.
async fn delete_link(state: &AppState, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link '{code}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = state
        .link_service
        .delete_link(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", format!("⚠️  No link with code '{code}'").yellow());
    }
    println!();

    Ok(())
}

/// Displays analytics for one link or for all of them.
async fn handle_stats(code: Option<String>, state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    match code {
        Some(code) => {
            let summary = state
                .analytics_service
                .summary_for(&code)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load summary: {}", e))?;

            println!("  Code:      {}", summary.short_code.cyan());
            println!("  Target:    {}", summary.original_url);
            println!(
                "  Clicks:    {}",
                summary.click_count.to_string().bright_green().bold()
            );
            println!(
                "  Last IPs:  {}",
                if summary.last_five_unique_ips.is_empty() {
                    "-".to_string()
                } else {
                    summary.last_five_unique_ips.join(", ")
                }
            );
        }
        None => {
            let traffic = state
                .analytics_service
                .global_summary()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load summary: {}", e))?;

            println!(
                "  {:<20} {:<8} {:<8} {}",
                "Code".bright_white().bold(),
                "Clicks".bright_white().bold(),
                "Unique".bright_white().bold(),
                "24h".bright_white().bold()
            );
            println!("  {}", "─".repeat(50).bright_black());

            for row in &traffic {
                println!(
                    "  {:<20} {:<8} {:<8} {}",
                    row.short_code.cyan(),
                    row.total_clicks,
                    row.unique_visitors,
                    row.clicks_last_24h
                );
            }

            let total: i64 = traffic.iter().map(|row| row.total_clicks).sum();

            println!();
            println!(
                "  Links:  {}",
                traffic.len().to_string().bright_green().bold()
            );
            println!("  Clicks: {}", total.to_string().bright_green().bold());
        }
    }
    println!();

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

            let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_events")
                .fetch_one(pool)
                .await
                .context("click_events table is missing; start the server once to migrate")?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Click events: {}", events.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
