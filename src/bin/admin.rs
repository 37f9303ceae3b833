//! CLI administration tool for tinylink.
//!
//! Works directly against the configured database through the same service
//! layer the HTTP API uses, so codes and URLs follow identical rules.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL, optionally with a custom code
//! cargo run --bin admin -- shorten https://example.com --code launch
//!
//! # Show statistics for one link
//! cargo run --bin admin -- stats launch
//!
//! # Delete a link (asks for confirmation unless -y is given)
//! cargo run --bin admin -- delete launch
//!
//! # Totals across all links
//! cargo run --bin admin -- summary
//!
//! # Check database connection and apply migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`tinylink::config`].

use tinylink::config;
use tinylink::server::build_state;
use tinylink::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing tinylink.
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
    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom short code (generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show statistics for a short link
    Stats {
        /// Short code
        code: String,
    },

    /// Delete a short link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show link and click totals
    Summary,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let state = build_state(&config).await?;

    match cli.command {
        Commands::Shorten { url, code } => shorten(&state, url, code).await?,
        Commands::Stats { code } => stats(&state, code).await?,
        Commands::Delete { code, yes } => delete(&state, code, yes).await?,
        Commands::Summary => summary(&state).await?,
        Commands::Db { action } => handle_db_action(action, &state).await?,
    }

    Ok(())
}

/// Creates a short link and prints the resulting URL.
async fn shorten(state: &AppState, url: String, code: Option<String>) -> Result<()> {
    let link = state
        .link_service
        .shorten(&url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!("  Short URL: {}", link.short_url.bright_yellow().bold());
    println!("  Target:    {}", link.original_url.cyan());

    Ok(())
}

/// Prints the stored record for a code.
async fn stats(state: &AppState, code: String) -> Result<()> {
    let record = state
        .link_service
        .stats(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "Link statistics".bright_blue().bold());
    println!();
    println!("  Code:    {}", record.short_code.cyan());
    println!("  Target:  {}", record.original_url);
    println!(
        "  Clicks:  {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created: {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
///
/// Shows the link first so the operator can see what is being removed;
/// the default answer is No.
async fn delete(state: &AppState, code: String, skip_confirm: bool) -> Result<()> {
    let record = state
        .link_service
        .stats(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  Code:   {}", record.short_code.cyan());
    println!("  Target: {}", record.original_url);
    println!("  Clicks: {}", record.clicks);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    state
        .link_service
        .delete(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", code, e))?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

/// Displays totals across all links.
async fn summary(state: &AppState) -> Result<()> {
    let totals = state
        .link_service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load totals: {}", e))?;

    println!("{}", "Summary".bright_blue().bold());
    println!();
    println!(
        "  Links:  {}",
        totals.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        totals.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            state
                .link_service
                .check_storage()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK, migrations applied".green().bold());
        }
    }

    Ok(())
}
