//! Tally CLI - Personal transaction analytics
//!
//! Usage:
//!   tally init                             Initialize database
//!   tally users add NAME EMAIL             Add a user
//!   tally -u EMAIL add --date ... --amount ... --kind expense
//!   tally -u EMAIL report summary          Income, expense, balance
//!   tally -u EMAIL recommend               Savings advice and forecast

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use tally_core::insights::InsightEngine;
use tally_core::models::User;
use tally_core::{Config, Database, ReportFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!(?config, "Loaded config");

    let symbol = config.recommender.currency_symbol.as_str();
    let for_user = || -> Result<(Database, User)> {
        let db = commands::open_db(&cli.db, cli.no_encrypt)?;
        let user = commands::resolve_user(&db, cli.user.as_deref(), &config)?;
        Ok((db, user))
    };

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Users { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(UsersAction::List) => commands::cmd_users_list(&db, cli.json),
                Some(UsersAction::Add { name, email }) => {
                    commands::cmd_users_add(&db, &name, &email).map(|_| ())
                }
            }
        }
        Commands::Add {
            date,
            amount,
            kind,
            category,
            description,
        } => {
            let kind = commands::parse_kind(&kind)?;
            let (db, user) = for_user()?;
            commands::cmd_add(
                &db,
                &user,
                &date,
                amount,
                kind,
                category.as_deref(),
                description.as_deref(),
            )
            .map(|_| ())
        }
        Commands::List {
            year,
            month,
            kind,
            limit,
        } => {
            let kind = kind.as_deref().map(commands::parse_kind).transpose()?;
            let filter = ReportFilter::new().year(year).month(month).kind(kind);
            let (db, user) = for_user()?;
            commands::cmd_list(&db, &user, &filter, limit, cli.json)
        }
        Commands::Delete { id } => {
            let (db, user) = for_user()?;
            commands::cmd_delete(&db, &user, id)
        }
        Commands::DeleteMonth { year, month } => {
            let (db, user) = for_user()?;
            commands::cmd_delete_month(&db, &user, year, month).map(|_| ())
        }
        Commands::DeleteYear { year } => {
            let (db, user) = for_user()?;
            commands::cmd_delete_year(&db, &user, year).map(|_| ())
        }
        Commands::Report { report } => {
            let (db, user) = for_user()?;
            match report {
                ReportType::Summary { year, month, kind } => {
                    let kind = kind.as_deref().map(commands::parse_kind).transpose()?;
                    let filter = ReportFilter::new().year(year).month(month).kind(kind);
                    commands::cmd_report_summary(&db, &user, &filter, symbol, cli.json)
                }
                ReportType::Categories { year, month } => {
                    let filter = ReportFilter::new().year(year).month(month);
                    commands::cmd_report_categories(&db, &user, &filter, symbol, cli.json)
                }
                ReportType::Trend { year } => {
                    commands::cmd_report_trend(&db, &user, year, symbol, cli.json)
                }
                ReportType::Years => commands::cmd_report_years(&db, &user, cli.json),
            }
        }
        Commands::Forecast => {
            let (db, user) = for_user()?;
            let engine = InsightEngine::with_config(config.recommender.clone());
            commands::cmd_forecast(&db, &user, &engine, cli.json)
        }
        Commands::Recommend => {
            let (db, user) = for_user()?;
            let engine = InsightEngine::with_config(config.recommender.clone());
            commands::cmd_recommend(&db, &user, &engine, cli.json)
        }
    }
}
