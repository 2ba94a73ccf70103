//! Transaction filter builder for constructing dynamic SQL queries
//!
//! Shared by listing, counting and bulk deletes so the year/month/kind
//! conditions are written once.

use crate::models::TransactionKind;
use crate::reports::ReportFilter;

/// Builder for constructing transaction query filters
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionFilter {
    pub user_id: i64,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub kind: Option<TransactionKind>,
}

/// Result of building a filter - contains SQL components and parameters
pub struct FilterResult {
    /// WHERE clause including "WHERE" keyword (always restricts the user)
    pub where_clause: String,
    /// Parameters for the query (boxed for rusqlite compatibility)
    pub params: Vec<Box<dyn rusqlite::ToSql>>,
}

impl FilterResult {
    /// Borrowed parameter slice for rusqlite calls
    pub fn param_refs(&self) -> Vec<&dyn rusqlite::ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

impl TransactionFilter {
    /// Create a new filter builder for one user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Copy year/month/kind from a report filter
    pub fn from_report(user_id: i64, filter: &ReportFilter) -> Self {
        Self::new(user_id)
            .year(filter.year)
            .month(filter.month)
            .kind(filter.kind)
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn month(mut self, month: Option<u32>) -> Self {
        self.month = month;
        self
    }

    pub fn kind(mut self, kind: Option<TransactionKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Build the filter components
    pub fn build(self) -> FilterResult {
        let mut conditions = vec!["user_id = ?".to_string()];
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(self.user_id)];

        if let Some(year) = self.year {
            conditions.push("strftime('%Y', date) = ?".to_string());
            params.push(Box::new(format!("{:04}", year)));
        }

        if let Some(month) = self.month {
            conditions.push("strftime('%m', date) = ?".to_string());
            params.push(Box::new(format!("{:02}", month)));
        }

        if let Some(kind) = self.kind {
            conditions.push("kind = ?".to_string());
            params.push(Box::new(kind.as_str()));
        }

        FilterResult {
            where_clause: format!("WHERE {}", conditions.join(" AND ")),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_only() {
        let result = TransactionFilter::new(7).build();
        assert_eq!(result.where_clause, "WHERE user_id = ?");
        assert_eq!(result.params.len(), 1);
    }

    #[test]
    fn test_all_conditions() {
        let filter = ReportFilter::new()
            .year(Some(2024))
            .month(Some(3))
            .kind(Some(TransactionKind::Expense));
        let result = TransactionFilter::from_report(1, &filter).build();
        assert_eq!(
            result.where_clause,
            "WHERE user_id = ? AND strftime('%Y', date) = ? AND strftime('%m', date) = ? AND kind = ?"
        );
        assert_eq!(result.params.len(), 4);
    }
}
