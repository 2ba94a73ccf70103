//! Recommender - turns aggregates and a forecast into savings advice
//!
//! Rules run in a fixed order and each appends zero or one message (the
//! top-category rule up to `top_categories`):
//! 1. No-data guard (stops everything else)
//! 2. Savings rate, or a prompt to add income
//! 3. Highest-spend categories
//! 4. Volatility warning when last month spiked
//! 5. Forecast with a savings target

use serde::{Deserialize, Serialize};

use super::aggregator::Aggregates;
use super::types::{Recommendation, RecommendationKind};

pub const NO_DATA_MESSAGE: &str =
    "Add at least 2 months of data to get personalized savings insights.";

/// Tunable thresholds for the recommendation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Prefix for monetary amounts
    pub currency_symbol: String,
    /// How many high-spend categories to call out
    pub top_categories: usize,
    /// Last month must exceed `factor * prior average` to warn
    pub volatility_factor: f64,
    /// Share of total income suggested as a savings target
    pub savings_target_ratio: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            top_categories: 3,
            volatility_factor: 1.2,
            savings_target_ratio: 0.2,
        }
    }
}

/// Rule-based recommendation generator
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RecommenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Run all rules, highest priority first
    pub fn recommend(&self, aggregates: &Aggregates, forecast: f64) -> Vec<Recommendation> {
        if aggregates.is_empty() {
            return vec![Recommendation::new(
                RecommendationKind::NoData,
                NO_DATA_MESSAGE,
            )];
        }

        let mut recs = vec![self.savings_rate(aggregates)];
        recs.extend(self.top_categories(aggregates));
        recs.extend(self.volatility(aggregates));
        recs.push(self.forecast_target(aggregates, forecast));
        recs
    }

    fn savings_rate(&self, aggregates: &Aggregates) -> Recommendation {
        if aggregates.total_income > 0.0 {
            let rate = ((aggregates.total_income - aggregates.total_expense)
                / aggregates.total_income)
                .max(0.0);
            Recommendation::new(
                RecommendationKind::SavingsRate,
                format!(
                    "Your overall savings rate is {:.1}%. Aim for {:.0}%+ as a baseline.",
                    rate * 100.0,
                    self.config.savings_target_ratio * 100.0
                ),
            )
        } else {
            Recommendation::new(
                RecommendationKind::MissingIncome,
                "Add income entries to compute your savings rate.",
            )
        }
    }

    fn top_categories(&self, aggregates: &Aggregates) -> Vec<Recommendation> {
        aggregates
            .top_categories(self.config.top_categories)
            .iter()
            .map(|c| {
                Recommendation::new(
                    RecommendationKind::TopCategory,
                    format!(
                        "High spend in \"{}\" category: {}{:.0}. Consider setting a monthly cap or finding cheaper alternatives.",
                        c.category, self.config.currency_symbol, c.amount
                    ),
                )
            })
            .collect()
    }

    fn volatility(&self, aggregates: &Aggregates) -> Option<Recommendation> {
        let series = aggregates.monthly_expense_series();
        let ((_, last), prior) = series.split_last()?;
        if prior.is_empty() {
            return None;
        }

        let prior_avg = prior.iter().map(|(_, v)| v).sum::<f64>() / prior.len() as f64;
        if *last > self.config.volatility_factor * prior_avg {
            Some(Recommendation::new(
                RecommendationKind::Volatility,
                format!(
                    "Last month's expenses exceeded your previous average by {:.0}%+. Review discretionary categories.",
                    (self.config.volatility_factor - 1.0) * 100.0
                ),
            ))
        } else {
            None
        }
    }

    fn forecast_target(&self, aggregates: &Aggregates, forecast: f64) -> Recommendation {
        let symbol = &self.config.currency_symbol;
        let message = if aggregates.total_income > 0.0 {
            let target = (aggregates.total_income * self.config.savings_target_ratio).max(0.0);
            format!(
                "Predicted next month expense: {}{:.0}. Set a savings target of at least {}{:.0}.",
                symbol, forecast, symbol, target
            )
        } else {
            format!(
                "Predicted next month expense: {}{:.0}. Add income to compute a savings target.",
                symbol, forecast
            )
        };
        Recommendation::new(RecommendationKind::ForecastTarget, message)
    }
}

/// Run the default rules and return plain message strings
pub fn recommend(aggregates: &Aggregates, forecast: f64) -> Vec<String> {
    Recommender::new()
        .recommend(aggregates, forecast)
        .into_iter()
        .map(|r| r.message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::forecast_next_month;
    use crate::models::Transaction;
    use crate::test_utils::{expense, income, monthly_expenses};

    fn run(txs: &[Transaction]) -> Vec<Recommendation> {
        let agg = Aggregates::from_transactions(txs);
        let forecast = forecast_next_month(&agg.monthly_expense_series());
        Recommender::new().recommend(&agg, forecast)
    }

    fn kinds(recs: &[Recommendation]) -> Vec<RecommendationKind> {
        recs.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_empty_input_single_guard_message() {
        let recs = recommend(&Aggregates::default(), 0.0);
        assert_eq!(recs, vec![NO_DATA_MESSAGE.to_string()]);
    }

    #[test]
    fn test_savings_rate_message() {
        let txs = vec![
            income((2024, 1, 1), 1000.0),
            expense((2024, 1, 10), 800.0, "Rent"),
        ];
        let recs = run(&txs);
        assert_eq!(recs[0].kind, RecommendationKind::SavingsRate);
        assert_eq!(
            recs[0].message,
            "Your overall savings rate is 20.0%. Aim for 20%+ as a baseline."
        );
    }

    #[test]
    fn test_savings_rate_floors_at_zero() {
        let txs = vec![
            income((2024, 1, 1), 500.0),
            expense((2024, 1, 10), 900.0, "Rent"),
        ];
        let recs = run(&txs);
        assert!(recs[0].message.contains("savings rate is 0.0%"));
    }

    #[test]
    fn test_missing_income_prompts() {
        let recs = run(&[expense((2024, 1, 10), 80.0, "Food")]);
        assert_eq!(recs[0].kind, RecommendationKind::MissingIncome);
        assert_eq!(
            recs[0].message,
            "Add income entries to compute your savings rate."
        );
        let last = recs.last().unwrap();
        assert_eq!(
            last.message,
            "Predicted next month expense: ₹80. Add income to compute a savings target."
        );
    }

    #[test]
    fn test_top_three_categories_descending() {
        let txs = vec![
            expense((2024, 1, 1), 500.0, "Food"),
            expense((2024, 1, 2), 1200.0, "Rent"),
            expense((2024, 1, 3), 300.0, "Travel"),
            expense((2024, 1, 4), 50.0, "Other"),
        ];
        let recs = run(&txs);
        let categories: Vec<&str> = recs
            .iter()
            .filter(|r| r.kind == RecommendationKind::TopCategory)
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(categories.len(), 3);
        assert!(categories[0].starts_with("High spend in \"Rent\" category: ₹1200."));
        assert!(categories[1].starts_with("High spend in \"Food\" category: ₹500."));
        assert!(categories[2].starts_with("High spend in \"Travel\" category: ₹300."));
    }

    #[test]
    fn test_volatility_fires_on_spike() {
        let recs = run(&monthly_expenses(&[100.0, 100.0, 100.0, 300.0]));
        assert!(kinds(&recs).contains(&RecommendationKind::Volatility));
        let warning = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::Volatility)
            .unwrap();
        assert_eq!(
            warning.message,
            "Last month's expenses exceeded your previous average by 20%+. Review discretionary categories."
        );
    }

    #[test]
    fn test_volatility_quiet_within_threshold() {
        let recs = run(&monthly_expenses(&[100.0, 100.0, 100.0, 110.0]));
        assert!(!kinds(&recs).contains(&RecommendationKind::Volatility));
    }

    #[test]
    fn test_volatility_needs_two_months() {
        let recs = run(&monthly_expenses(&[1000.0]));
        assert!(!kinds(&recs).contains(&RecommendationKind::Volatility));
    }

    #[test]
    fn test_forecast_target_uses_income() {
        let txs = vec![
            income((2024, 1, 1), 1000.0),
            expense((2024, 1, 5), 100.0, "Food"),
            expense((2024, 2, 5), 200.0, "Food"),
        ];
        let recs = run(&txs);
        assert_eq!(
            recs.last().unwrap().message,
            "Predicted next month expense: ₹300. Set a savings target of at least ₹200."
        );
    }

    #[test]
    fn test_rule_order() {
        let mut txs = monthly_expenses(&[100.0, 100.0, 400.0]);
        txs.push(income((2024, 1, 1), 2000.0));
        txs.push(expense((2024, 2, 9), 20.0, "Food"));
        let recs = run(&txs);
        assert_eq!(
            kinds(&recs),
            vec![
                RecommendationKind::SavingsRate,
                RecommendationKind::TopCategory,
                RecommendationKind::TopCategory,
                RecommendationKind::Volatility,
                RecommendationKind::ForecastTarget,
            ]
        );
    }

    #[test]
    fn test_custom_config() {
        let config = RecommenderConfig {
            currency_symbol: "$".to_string(),
            top_categories: 1,
            volatility_factor: 1.5,
            savings_target_ratio: 0.3,
        };
        let mut txs = monthly_expenses(&[100.0, 140.0]);
        txs.push(expense((2024, 2, 1), 10.0, "Books"));
        txs.push(income((2024, 1, 1), 1000.0));
        let agg = Aggregates::from_transactions(&txs);
        let recs = Recommender::with_config(config).recommend(&agg, 190.0);

        assert_eq!(
            kinds(&recs),
            vec![
                RecommendationKind::SavingsRate,
                RecommendationKind::TopCategory,
                RecommendationKind::ForecastTarget,
            ]
        );
        assert!(recs[0].message.contains("Aim for 30%+"));
        assert!(recs[1].message.contains("\"Other\" category: $240."));
        assert!(recs[2].message.ends_with("at least $300."));
    }
}
