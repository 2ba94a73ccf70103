//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::db::Database;
use tally_core::models::{NewTransaction, Transaction, TransactionKind, User};
use tally_core::ReportFilter;

use super::{print_json, truncate};

fn format_amount(tx: &Transaction) -> String {
    match tx.kind {
        TransactionKind::Expense => format!("\x1b[31m-{:.2}\x1b[0m", tx.amount), // Red for expenses
        TransactionKind::Income => format!("\x1b[32m+{:.2}\x1b[0m", tx.amount), // Green for income
    }
}

pub fn cmd_add(
    db: &Database,
    user: &User,
    date: &str,
    amount: f64,
    kind: TransactionKind,
    category: Option<&str>,
    description: Option<&str>,
) -> Result<i64> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context("Invalid --date format (use YYYY-MM-DD)")?;

    let tx = NewTransaction {
        date,
        amount,
        kind,
        category: category.map(String::from),
        description: description.map(String::from),
    };
    let id = db.insert_transaction(user.id, &tx)?;

    println!("✅ Recorded {} {:.2} on {} (id {})", kind, amount, date, id);
    Ok(id)
}

pub fn cmd_list(db: &Database, user: &User, filter: &ReportFilter, limit: usize, json: bool) -> Result<()> {
    let total = db.count_transactions(user.id, filter)?;
    let mut transactions = db.list_transactions(user.id, filter)?;
    transactions.truncate(limit);

    if json {
        return print_json(&transactions);
    }

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  tally add --date 2024-01-05 --amount 250 --kind expense --category Food");
        return Ok(());
    }

    println!();
    println!(
        "📝 Transactions for {} (showing {} of {})",
        user.email,
        transactions.len(),
        total
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in &transactions {
        println!(
            "   [{:>4}] {} │ {:>10} │ {:15} │ {}",
            tx.id,
            tx.date,
            format_amount(tx),
            truncate(&tx.category, 15),
            truncate(tx.description.as_deref().unwrap_or(""), 30)
        );
    }

    Ok(())
}

pub fn cmd_delete(db: &Database, user: &User, id: i64) -> Result<()> {
    let tx = db
        .get_transaction(user.id, id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    db.delete_transaction(user.id, id)?;

    println!("🗑️  Deleted transaction {}:", id);
    println!(
        "   {} │ {} │ {}",
        tx.date,
        format_amount(&tx),
        tx.category
    );

    Ok(())
}

pub fn cmd_delete_month(db: &Database, user: &User, year: i32, month: u32) -> Result<usize> {
    let count = db.delete_month(user.id, year, month)?;
    println!(
        "🗑️  Deleted {} transaction(s) from {:04}-{:02}",
        count, year, month
    );
    Ok(count)
}

pub fn cmd_delete_year(db: &Database, user: &User, year: i32) -> Result<usize> {
    let count = db.delete_year(user.id, year)?;
    println!("🗑️  Deleted {} transaction(s) from {}", count, year);
    Ok(count)
}
