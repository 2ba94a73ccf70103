//! Domain models for Tally

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category assigned when a transaction has none
pub const DEFAULT_CATEGORY: &str = "Other";

/// A user whose transactions are tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Direction of a transaction. Amounts are always non-negative; the kind
/// carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!(
                "Unknown transaction kind: {} (valid: income, expense)",
                s
            )),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    /// Always >= 0
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// New transaction for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl NewTransaction {
    /// Check the amount invariant and resolve the category.
    ///
    /// Returns the category label to store.
    pub fn validate(&self) -> Result<String> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidData(format!(
                "Amount must be a finite number, got {}",
                self.amount
            )));
        }
        if self.amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "Amount must be non-negative (use kind to mark expenses), got {}",
                self.amount
            )));
        }

        Ok(self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string())
    }
}

/// Calendar month token. Orders chronologically and renders as `YYYY-MM`,
/// so lexical and chronological order coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!("Invalid month: {}", month)));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("Invalid month: {} (use YYYY-MM)", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Income/expense totals for a period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// A single month in a trend report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
}

/// Twelve zero-filled months of income and expense for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub year: i32,
    pub data: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn new_tx(amount: f64, category: Option<&str>) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            amount,
            kind: TransactionKind::Expense,
            category: category.map(String::from),
            description: None,
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            TransactionKind::from_str("Income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::from_str(" expense ").unwrap(),
            TransactionKind::Expense
        );
        assert!(TransactionKind::from_str("transfer").is_err());
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_validate_defaults_category() {
        assert_eq!(new_tx(10.0, None).validate().unwrap(), "Other");
        assert_eq!(new_tx(10.0, Some("  ")).validate().unwrap(), "Other");
        assert_eq!(new_tx(10.0, Some(" Food ")).validate().unwrap(), "Food");
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        assert!(matches!(
            new_tx(-5.0, None).validate(),
            Err(Error::InvalidData(_))
        ));
        assert!(new_tx(f64::NAN, None).validate().is_err());
        assert!(new_tx(f64::INFINITY, None).validate().is_err());
        assert!(new_tx(0.0, None).validate().is_ok());
    }

    #[test]
    fn test_month_key_order_matches_text_order() {
        let a = MonthKey::new(2023, 12).unwrap();
        let b = MonthKey::new(2024, 2).unwrap();
        let c = MonthKey::new(2024, 11).unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
        assert_eq!(b.to_string(), "2024-02");
    }

    #[test]
    fn test_month_key_parse() {
        assert_eq!(
            MonthKey::from_str("2024-07").unwrap(),
            MonthKey::new(2024, 7).unwrap()
        );
        assert!(MonthKey::from_str("2024-13").is_err());
        assert!(MonthKey::from_str("202407").is_err());
        assert!(MonthKey::new(2024, 0).is_err());
    }

    #[test]
    fn test_month_key_serializes_as_token() {
        let key = MonthKey::new(2025, 1).unwrap();
        assert_eq!(serde_json::to_value(key).unwrap(), "2025-01");
        let back: MonthKey = serde_json::from_str("\"2025-01\"").unwrap();
        assert_eq!(back, key);
    }
}
