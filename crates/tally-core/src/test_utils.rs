//! Test utilities for tally-core
//!
//! Fixture builders for in-memory transaction lists, so engine and report
//! code can be exercised without a database.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};

use crate::models::{NewTransaction, Transaction, TransactionKind};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// User id assigned to fixture transactions
pub const TEST_USER_ID: i64 = 1;

/// Build a transaction for [`TEST_USER_ID`]
///
/// Panics on an invalid calendar date; fixtures are expected to be valid.
pub fn transaction(
    (year, month, day): (i32, u32, u32),
    amount: f64,
    kind: TransactionKind,
    category: &str,
) -> Transaction {
    Transaction {
        id: NEXT_ID.fetch_add(1, Ordering::SeqCst),
        user_id: TEST_USER_ID,
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"),
        amount,
        kind,
        category: category.to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

pub fn expense(ymd: (i32, u32, u32), amount: f64, category: &str) -> Transaction {
    transaction(ymd, amount, TransactionKind::Expense, category)
}

pub fn income(ymd: (i32, u32, u32), amount: f64) -> Transaction {
    transaction(ymd, amount, TransactionKind::Income, "Salary")
}

/// One expense per consecutive month starting January 2024
pub fn monthly_expenses(totals: &[f64]) -> Vec<Transaction> {
    totals
        .iter()
        .enumerate()
        .map(|(i, amount)| {
            let year = 2024 + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            expense((year, month, 15), *amount, "Other")
        })
        .collect()
}

/// Insert payload for store tests
pub fn new_transaction(
    (year, month, day): (i32, u32, u32),
    amount: f64,
    kind: TransactionKind,
    category: Option<&str>,
) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"),
        amount,
        kind,
        category: category.map(String::from),
        description: None,
    }
}

/// Deterministic permutation (rotate then reverse) for order-independence tests
pub fn scrambled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    if !out.is_empty() {
        out.rotate_left(items.len() / 2);
        out.reverse();
    }
    out
}
