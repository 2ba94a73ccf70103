//! Tally Core Library
//!
//! Shared functionality for the Tally transaction analytics tool:
//! - Encrypted SQLite record store for users and transactions
//! - Aggregation of transactions into monthly and per-category totals
//! - Linear-trend forecast of next month's expenses
//! - Rule-based spending recommendations
//! - Period reports (summary, category breakdown, monthly trend)

pub mod config;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod reports;
pub mod source;

/// Test utilities (transaction fixture builders)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use insights::{
    AnalysisContext, ExpenseForecast, InsightEngine, InsightReport, Recommendation,
    RecommendationKind, RecommenderConfig,
};
pub use models::{MonthKey, NewTransaction, Transaction, TransactionKind, User};
pub use reports::ReportFilter;
pub use source::{InMemorySource, TransactionSource};
