//! Report command implementations

use anyhow::Result;
use chrono::{Datelike, Utc};
use tally_core::db::Database;
use tally_core::models::User;
use tally_core::reports::{self, ReportFilter};
use tally_core::TransactionSource;

use super::{print_json, truncate};

fn current_year() -> i32 {
    Utc::now().year()
}

/// Human label for the period a filter selects
fn describe_period(filter: &ReportFilter) -> String {
    match (filter.year, filter.month) {
        (Some(y), Some(m)) => format!("{:04}-{:02}", y, m),
        (Some(y), None) => y.to_string(),
        (None, Some(m)) => format!("month {:02} of every year", m),
        (None, None) => "all time".to_string(),
    }
}

pub fn cmd_report_summary(
    db: &Database,
    user: &User,
    filter: &ReportFilter,
    symbol: &str,
    json: bool,
) -> Result<()> {
    let transactions = db.transactions_for_user(user.id)?;
    let summary = reports::summary(&transactions, filter);

    if json {
        return print_json(&summary);
    }

    println!();
    println!("📊 Summary");
    println!("   Period: {}", describe_period(filter));
    if let Some(kind) = filter.kind {
        println!("   Kind: {}", kind);
    }
    println!("   ─────────────────────────────");
    println!("   Income:  {}{:>12.2}", symbol, summary.income);
    println!("   Expense: {}{:>12.2}", symbol, summary.expense);
    println!("   Balance: {}{:>12.2}", symbol, summary.balance);

    Ok(())
}

pub fn cmd_report_categories(
    db: &Database,
    user: &User,
    filter: &ReportFilter,
    symbol: &str,
    json: bool,
) -> Result<()> {
    let transactions = db.transactions_for_user(user.id)?;
    let categories = reports::category_breakdown(&transactions, filter);

    if json {
        return print_json(&categories);
    }

    println!();
    println!("🏷️  Expenses by Category");
    println!("   Period: {}", describe_period(filter));
    println!("   ─────────────────────────────────────────────");

    if categories.is_empty() {
        println!("   No expenses found in this period.");
        return Ok(());
    }

    let total: f64 = categories.iter().map(|c| c.amount).sum();
    println!("   {:25} │ {:>12} │ {:>6}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼──────────────┼────────");
    for cat in &categories {
        let pct = if total > 0.0 {
            cat.amount / total * 100.0
        } else {
            0.0
        };
        println!(
            "   {:25} │ {}{:>11.2} │ {:>5.1}%",
            truncate(&cat.category, 25),
            symbol,
            cat.amount,
            pct
        );
    }

    Ok(())
}

pub fn cmd_report_trend(
    db: &Database,
    user: &User,
    year: Option<i32>,
    symbol: &str,
    json: bool,
) -> Result<()> {
    let transactions = db.transactions_for_user(user.id)?;
    let trend = reports::monthly_trend(&transactions, year, current_year());

    if json {
        return print_json(&trend);
    }

    println!();
    println!("📈 Monthly Trend ({})", trend.year);
    println!("   ─────────────────────────────────────────────");
    println!("   {:7} │ {:>13} │ {:>13}", "Month", "Income", "Expense");
    println!("   ────────┼───────────────┼───────────────");

    // Scale bars against the largest expense month
    let max = trend
        .data
        .iter()
        .map(|p| p.expense)
        .fold(0.0_f64, f64::max);

    for point in &trend.data {
        let bar_len = if max > 0.0 {
            ((point.expense / max) * 20.0).round() as usize
        } else {
            0
        };
        println!(
            "   {} │ {}{:>12.2} │ {}{:>12.2} {}",
            point.month,
            symbol,
            point.income,
            symbol,
            point.expense,
            "█".repeat(bar_len)
        );
    }

    Ok(())
}

pub fn cmd_report_years(db: &Database, user: &User, json: bool) -> Result<()> {
    let transactions = db.transactions_for_user(user.id)?;
    let years = reports::available_years(&transactions, current_year());

    if json {
        return print_json(&years);
    }

    let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    println!("📅 Years: {}", years.join(", "));

    Ok(())
}
