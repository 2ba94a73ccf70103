//! Aggregator - groups transactions by month, kind and category
//!
//! Transactions are put into a canonical order before any summation, so the
//! result is identical (bit for bit) for any permutation of the input.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CategoryAmount, MonthKey, Transaction, TransactionKind};

/// Income and expense for one calendar month that has data
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

impl MonthlyBucket {
    fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: 0.0,
            expense: 0.0,
            income_count: 0,
            expense_count: 0,
        }
    }
}

/// Totals, monthly buckets and category breakdown for one user's transactions
#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregates {
    pub transaction_count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    /// Months with at least one transaction, oldest first
    pub monthly: Vec<MonthlyBucket>,
    /// Categories with positive expense, highest first (ties by label)
    pub category_totals: Vec<CategoryAmount>,
}

impl Aggregates {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by(|a, b| canonical_order(a, b));

        let mut months: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();
        let mut categories: BTreeMap<&str, f64> = BTreeMap::new();
        let mut total_income = 0.0;
        let mut total_expense = 0.0;

        for tx in &ordered {
            let key = tx.month_key();
            let bucket = months
                .entry(key)
                .or_insert_with(|| MonthlyBucket::empty(key));

            match tx.kind {
                TransactionKind::Income => {
                    total_income += tx.amount;
                    bucket.income += tx.amount;
                    bucket.income_count += 1;
                }
                TransactionKind::Expense => {
                    total_expense += tx.amount;
                    bucket.expense += tx.amount;
                    bucket.expense_count += 1;
                    *categories.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
                }
            }
        }

        // BTreeMap iteration is alphabetical and the sort is stable, so equal
        // totals stay in label order.
        let mut category_totals: Vec<CategoryAmount> = categories
            .into_iter()
            .filter(|(_, amount)| *amount > 0.0)
            .map(|(category, amount)| CategoryAmount {
                category: category.to_string(),
                amount,
            })
            .collect();
        category_totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        Self {
            transaction_count: ordered.len(),
            total_income,
            total_expense,
            monthly: months.into_values().collect(),
            category_totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// `(month, expense)` for every month containing an expense, oldest first
    pub fn monthly_expense_series(&self) -> Vec<(MonthKey, f64)> {
        self.monthly
            .iter()
            .filter(|b| b.expense_count > 0)
            .map(|b| (b.month, b.expense))
            .collect()
    }

    /// Up to `n` highest-spend categories
    pub fn top_categories(&self, n: usize) -> &[CategoryAmount] {
        &self.category_totals[..n.min(self.category_totals.len())]
    }

    pub fn category_total(&self, category: &str) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }
}

fn canonical_order(a: &Transaction, b: &Transaction) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.category.cmp(&b.category))
        .then_with(|| a.amount.total_cmp(&b.amount))
}
