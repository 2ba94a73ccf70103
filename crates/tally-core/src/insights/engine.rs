//! Insight Engine - runs aggregation, forecasting and recommendations for a user

use crate::models::Transaction;
use crate::source::TransactionSource;
use crate::Result;

use super::aggregator::Aggregates;
use super::forecaster::{explain_forecast, ExpenseForecast};
use super::recommender::{Recommender, RecommenderConfig};
use super::types::{InsightReport, Recommendation};

/// Context provided to the engine for one analysis
pub struct AnalysisContext<'a> {
    /// Where the user's transactions come from
    pub source: &'a dyn TransactionSource,
    /// User whose transactions are analyzed
    pub user_id: i64,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(source: &'a dyn TransactionSource, user_id: i64) -> Self {
        Self { source, user_id }
    }
}

/// Stateless engine; safe to share across threads and users
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    recommender: Recommender,
}

impl InsightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RecommenderConfig) -> Self {
        Self {
            recommender: Recommender::with_config(config),
        }
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Forecast and recommendations for a user's transactions
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<InsightReport> {
        let transactions = ctx.source.transactions_for_user(ctx.user_id)?;
        let report = self.analyze_transactions(&transactions);

        tracing::debug!(
            user_id = ctx.user_id,
            transactions = transactions.len(),
            recommendations = report.recommendations.len(),
            forecast = report.next_month_expense_prediction,
            "Insight analysis complete"
        );

        Ok(report)
    }

    /// Next month's expense forecast for a user
    pub fn forecast(&self, ctx: &AnalysisContext<'_>) -> Result<ExpenseForecast> {
        let transactions = ctx.source.transactions_for_user(ctx.user_id)?;
        let aggregates = Aggregates::from_transactions(&transactions);
        Ok(explain_forecast(&aggregates.monthly_expense_series()))
    }

    /// Analyze an in-memory transaction list
    pub fn analyze_transactions(&self, transactions: &[Transaction]) -> InsightReport {
        let (recommendations, forecast) = self.recommendations(transactions);
        InsightReport {
            recommendations: recommendations.into_iter().map(|r| r.message).collect(),
            next_month_expense_prediction: forecast.prediction,
        }
    }

    /// Structured recommendations together with the forecast they were built from
    pub fn recommendations(
        &self,
        transactions: &[Transaction],
    ) -> (Vec<Recommendation>, ExpenseForecast) {
        let aggregates = Aggregates::from_transactions(transactions);
        let forecast = explain_forecast(&aggregates.monthly_expense_series());
        let recs = self.recommender.recommend(&aggregates, forecast.prediction);
        (recs, forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::recommender::NO_DATA_MESSAGE;
    use crate::source::InMemorySource;
    use crate::test_utils::{expense, income, monthly_expenses, TEST_USER_ID};

    #[test]
    fn test_empty_user() {
        let source = InMemorySource::default();
        let engine = InsightEngine::new();
        let report = engine
            .analyze(&AnalysisContext::new(&source, TEST_USER_ID))
            .unwrap();

        assert_eq!(report.next_month_expense_prediction, 0.0);
        assert_eq!(report.recommendations, vec![NO_DATA_MESSAGE.to_string()]);
    }

    #[test]
    fn test_analyze_full_history() {
        let mut txs = monthly_expenses(&[100.0, 200.0]);
        txs.push(income((2024, 1, 1), 1000.0));
        txs.push(income((2024, 2, 1), 1000.0));
        let source = InMemorySource::new(txs);

        let engine = InsightEngine::new();
        let ctx = AnalysisContext::new(&source, TEST_USER_ID);
        let report = engine.analyze(&ctx).unwrap();

        assert_eq!(report.next_month_expense_prediction, 300.0);
        assert_eq!(
            report.recommendations,
            vec![
                "Your overall savings rate is 85.0%. Aim for 20%+ as a baseline.".to_string(),
                "High spend in \"Other\" category: ₹300. Consider setting a monthly cap or finding cheaper alternatives.".to_string(),
                "Last month's expenses exceeded your previous average by 20%+. Review discretionary categories.".to_string(),
                "Predicted next month expense: ₹300. Set a savings target of at least ₹400.".to_string(),
            ]
        );

        let forecast = engine.forecast(&ctx).unwrap();
        assert_eq!(forecast.prediction, 300.0);
        assert_eq!(forecast.months_used, 2);
    }

    #[test]
    fn test_only_counts_requested_user() {
        let mut stranger = expense((2024, 1, 1), 5000.0, "Cars");
        stranger.user_id = TEST_USER_ID + 7;
        let source = InMemorySource::new(vec![stranger, expense((2024, 1, 1), 42.0, "Food")]);

        let report = InsightEngine::new()
            .analyze(&AnalysisContext::new(&source, TEST_USER_ID))
            .unwrap();
        assert_eq!(report.next_month_expense_prediction, 42.0);
        assert!(report.recommendations.iter().all(|r| !r.contains("Cars")));
    }
}
