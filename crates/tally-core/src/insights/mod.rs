//! Insight Engine - expense forecasting and savings recommendations
//!
//! Turns an unordered list of a user's transactions into a next-month
//! expense forecast and a prioritized list of plain-text recommendations.
//! Everything here is a pure computation: no I/O beyond the injected
//! [`TransactionSource`](crate::source::TransactionSource), no shared state.
//!
//! ## Components
//!
//! - **Aggregator** - totals, monthly buckets and category breakdown
//! - **Forecaster** - linear trend over monthly expense totals
//! - **Recommender** - ordered rule set producing advice strings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::{AnalysisContext, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let report = engine.analyze(&AnalysisContext::new(&db, user_id))?;
//! ```

pub mod aggregator;
pub mod engine;
pub mod forecaster;
pub mod recommender;
pub mod types;

pub use aggregator::{Aggregates, MonthlyBucket};
pub use engine::{AnalysisContext, InsightEngine};
pub use forecaster::{explain_forecast, forecast_next_month, ExpenseForecast, LinearFit};
pub use recommender::{recommend, Recommender, RecommenderConfig, NO_DATA_MESSAGE};
pub use types::{InsightReport, Recommendation, RecommendationKind};
