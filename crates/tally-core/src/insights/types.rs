//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// No transactions yet
    NoData,
    /// Overall savings rate
    SavingsRate,
    /// No income recorded, so no savings rate
    MissingIncome,
    /// One of the highest-spend categories
    TopCategory,
    /// Last month spiked above the historical average
    Volatility,
    /// Next-month forecast and savings target
    ForecastTarget,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::NoData => "no_data",
            RecommendationKind::SavingsRate => "savings_rate",
            RecommendationKind::MissingIncome => "missing_income",
            RecommendationKind::TopCategory => "top_category",
            RecommendationKind::Volatility => "volatility",
            RecommendationKind::ForecastTarget => "forecast_target",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_data" => Ok(RecommendationKind::NoData),
            "savings_rate" => Ok(RecommendationKind::SavingsRate),
            "missing_income" => Ok(RecommendationKind::MissingIncome),
            "top_category" => Ok(RecommendationKind::TopCategory),
            "volatility" => Ok(RecommendationKind::Volatility),
            "forecast_target" => Ok(RecommendationKind::ForecastTarget),
            _ => Err(format!("Unknown recommendation kind: {}", s)),
        }
    }
}

/// A single display-ready recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    /// Plain text, self-contained
    pub message: String,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Both engine outputs for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Highest priority first
    pub recommendations: Vec<String>,
    pub next_month_expense_prediction: f64,
}
