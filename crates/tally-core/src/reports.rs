//! Reports over a user's transactions
//!
//! Summary totals, category breakdown, a zero-filled monthly trend and the
//! list of years with data. All functions are pure and reuse the insight
//! aggregator for grouping.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::insights::Aggregates;
use crate::models::{CategoryAmount, MonthKey, MonthlyTrend, Summary, Transaction, TransactionKind, TrendPoint};

/// Optional year/month/kind restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub year: Option<i32>,
    /// 1-12
    pub month: Option<u32>,
    pub kind: Option<TransactionKind>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
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

    /// Year and month match (kind ignored)
    pub fn matches_period(&self, tx: &Transaction) -> bool {
        self.year.map_or(true, |y| tx.date.year() == y)
            && self.month.map_or(true, |m| tx.date.month() == m)
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.matches_period(tx) && self.kind.map_or(true, |k| tx.kind == k)
    }

    fn period_aggregates(&self, transactions: &[Transaction]) -> Aggregates {
        let in_period: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| self.matches_period(tx))
            .cloned()
            .collect();
        Aggregates::from_transactions(&in_period)
    }
}

/// Income, expense and balance for the filtered period.
///
/// A kind filter zeroes the other side: income-only reports balance =
/// income, expense-only reports balance = -expense.
pub fn summary(transactions: &[Transaction], filter: &ReportFilter) -> Summary {
    let agg = filter.period_aggregates(transactions);
    let (income, expense) = match filter.kind {
        Some(TransactionKind::Income) => (agg.total_income, 0.0),
        Some(TransactionKind::Expense) => (0.0, agg.total_expense),
        None => (agg.total_income, agg.total_expense),
    };

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense per category for the filtered period, highest first.
///
/// Always a breakdown of expenses; the kind filter does not apply.
pub fn category_breakdown(transactions: &[Transaction], filter: &ReportFilter) -> Vec<CategoryAmount> {
    filter.period_aggregates(transactions).category_totals
}

/// Twelve months of income and expense for `year`, zero-filled.
///
/// Without a year, uses the latest year that has data, else `fallback_year`.
pub fn monthly_trend(
    transactions: &[Transaction],
    year: Option<i32>,
    fallback_year: i32,
) -> MonthlyTrend {
    let year = year.unwrap_or_else(|| {
        transactions
            .iter()
            .map(|tx| tx.date.year())
            .max()
            .unwrap_or(fallback_year)
    });

    let agg = ReportFilter::new()
        .year(Some(year))
        .period_aggregates(transactions);

    let data = (1..=12)
        .map(|month| {
            let key = MonthKey { year, month };
            let bucket = agg.monthly.iter().find(|b| b.month == key);
            TrendPoint {
                month: key,
                income: bucket.map_or(0.0, |b| b.income),
                expense: bucket.map_or(0.0, |b| b.expense),
            }
        })
        .collect();

    MonthlyTrend { year, data }
}

/// Distinct years with transactions, ascending; `[fallback_year]` if none
pub fn available_years(transactions: &[Transaction], fallback_year: i32) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|tx| tx.date.year()).collect();
    years.sort_unstable();
    years.dedup();
    if years.is_empty() {
        years.push(fallback_year);
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{expense, income};

    fn sample() -> Vec<Transaction> {
        vec![
            income((2023, 11, 1), 900.0),
            expense((2023, 11, 4), 150.0, "Food"),
            income((2024, 1, 1), 1000.0),
            expense((2024, 1, 3), 400.0, "Rent"),
            expense((2024, 1, 9), 60.0, "Food"),
            expense((2024, 2, 14), 90.0, "Food"),
            income((2024, 3, 1), 1000.0),
        ]
    }

    #[test]
    fn test_summary_all() {
        let s = summary(&sample(), &ReportFilter::new());
        assert_eq!(s.income, 2900.0);
        assert_eq!(s.expense, 700.0);
        assert_eq!(s.balance, 2200.0);
    }

    #[test]
    fn test_summary_by_year_and_month() {
        let jan = ReportFilter::new().year(Some(2024)).month(Some(1));
        let s = summary(&sample(), &jan);
        assert_eq!(s.income, 1000.0);
        assert_eq!(s.expense, 460.0);
        assert_eq!(s.balance, 540.0);

        let empty = summary(&sample(), &ReportFilter::new().year(Some(2020)));
        assert_eq!(empty, Summary { income: 0.0, expense: 0.0, balance: 0.0 });
    }

    #[test]
    fn test_summary_with_kind_filter() {
        let year = ReportFilter::new().year(Some(2024));

        let income_only = summary(&sample(), &year.kind(Some(TransactionKind::Income)));
        assert_eq!(income_only.expense, 0.0);
        assert_eq!(income_only.balance, 2000.0);

        let expense_only = summary(&sample(), &year.kind(Some(TransactionKind::Expense)));
        assert_eq!(expense_only.income, 0.0);
        assert_eq!(expense_only.balance, -550.0);
    }

    #[test]
    fn test_category_breakdown() {
        let all = category_breakdown(&sample(), &ReportFilter::new());
        assert_eq!(
            all,
            vec![
                CategoryAmount { category: "Rent".into(), amount: 400.0 },
                CategoryAmount { category: "Food".into(), amount: 300.0 },
            ]
        );

        // Kind does not change a breakdown of expenses
        let income_kind = ReportFilter::new().kind(Some(TransactionKind::Income));
        assert_eq!(category_breakdown(&sample(), &income_kind), all);

        let feb = ReportFilter::new().year(Some(2024)).month(Some(2));
        assert_eq!(category_breakdown(&sample(), &feb).len(), 1);
    }

    #[test]
    fn test_monthly_trend_zero_fills() {
        let trend = monthly_trend(&sample(), Some(2024), 2030);
        assert_eq!(trend.year, 2024);
        assert_eq!(trend.data.len(), 12);
        assert_eq!(trend.data[0].month.to_string(), "2024-01");
        assert_eq!(trend.data[0].income, 1000.0);
        assert_eq!(trend.data[0].expense, 460.0);
        assert_eq!(trend.data[1].expense, 90.0);
        assert_eq!(trend.data[2].income, 1000.0);
        assert!(trend.data[3..].iter().all(|p| p.income == 0.0 && p.expense == 0.0));
        assert_eq!(trend.data[11].month.to_string(), "2024-12");
    }

    #[test]
    fn test_monthly_trend_defaults_to_latest_year() {
        assert_eq!(monthly_trend(&sample(), None, 2030).year, 2024);
        let empty = monthly_trend(&[], None, 2030);
        assert_eq!(empty.year, 2030);
        assert!(empty.data.iter().all(|p| p.expense == 0.0));
    }

    #[test]
    fn test_available_years() {
        assert_eq!(available_years(&sample(), 2030), vec![2023, 2024]);
        assert_eq!(available_years(&[], 2030), vec![2030]);
    }
}
