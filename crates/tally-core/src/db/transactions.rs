//! Transaction operations

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::transaction_filter::TransactionFilter;
use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::reports::ReportFilter;

const TRANSACTION_COLUMNS: &str =
    "id, user_id, date, amount, kind, category, description, created_at";

impl Database {
    /// Validate and insert a transaction, returning its id
    pub fn insert_transaction(&self, user_id: i64, tx: &NewTransaction) -> Result<i64> {
        let category = tx.validate()?;
        let conn = self.conn()?;

        let user_exists: Option<i64> = conn
            .query_row("SELECT id FROM users WHERE id = ?", params![user_id], |row| {
                row.get(0)
            })
            .optional()?;
        if user_exists.is_none() {
            return Err(Error::NotFound(format!("User {}", user_id)));
        }

        conn.execute(
            r#"
            INSERT INTO transactions (user_id, date, amount, kind, category, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                tx.date.to_string(),
                tx.amount,
                tx.kind.as_str(),
                category,
                tx.description,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_transaction(&self, user_id: i64, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {} FROM transactions WHERE id = ? AND user_id = ?",
            TRANSACTION_COLUMNS
        );
        let tx = conn
            .query_row(&sql, params![id, user_id], Self::row_to_transaction)
            .optional()?;
        Ok(tx)
    }

    /// List a user's transactions, newest first
    pub fn list_transactions(&self, user_id: i64, filter: &ReportFilter) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let built = TransactionFilter::from_report(user_id, filter).build();

        let sql = format!(
            "SELECT {} FROM transactions {} ORDER BY date DESC, id DESC",
            TRANSACTION_COLUMNS, built.where_clause
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(built.param_refs().as_slice(), Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn count_transactions(&self, user_id: i64, filter: &ReportFilter) -> Result<i64> {
        let conn = self.conn()?;
        let built = TransactionFilter::from_report(user_id, filter).build();
        let sql = format!("SELECT COUNT(*) FROM transactions {}", built.where_clause);
        let count = conn.query_row(&sql, built.param_refs().as_slice(), |row| row.get(0))?;
        Ok(count)
    }

    /// Delete one transaction owned by the user. Returns false if not found.
    pub fn delete_transaction(&self, user_id: i64, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM transactions WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        Ok(deleted > 0)
    }

    /// Delete every transaction in a calendar month, returning how many were removed
    pub fn delete_month(&self, user_id: i64, year: i32, month: u32) -> Result<usize> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!("Invalid month: {}", month)));
        }
        let filter = TransactionFilter::new(user_id)
            .year(Some(year))
            .month(Some(month));
        let count = self.delete_matching(filter)?;
        info!(user_id, year, month, count, "Deleted month of transactions");
        Ok(count)
    }

    /// Delete every transaction in a year, returning how many were removed
    pub fn delete_year(&self, user_id: i64, year: i32) -> Result<usize> {
        let count = self.delete_matching(TransactionFilter::new(user_id).year(Some(year)))?;
        info!(user_id, year, count, "Deleted year of transactions");
        Ok(count)
    }

    fn delete_matching(&self, filter: TransactionFilter) -> Result<usize> {
        let conn = self.conn()?;
        let built = filter.build();
        let sql = format!("DELETE FROM transactions {}", built.where_clause);
        Ok(conn.execute(&sql, built.param_refs().as_slice())?)
    }

    /// Map a row selected with `TRANSACTION_COLUMNS`
    fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(2)?;
        let kind_str: String = row.get(4)?;
        let created_at_str: String = row.get(7)?;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        let kind: TransactionKind = kind_str
            .parse()
            .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?;

        Ok(Transaction {
            id: row.get(0)?,
            user_id: row.get(1)?,
            date,
            amount: row.get(3)?,
            kind,
            category: row.get(5)?,
            description: row.get(6)?,
            created_at: parse_datetime(&created_at_str),
        })
    }
}
