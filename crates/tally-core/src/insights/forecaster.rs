//! Expense Forecaster
//!
//! Predicts next month's total expense from a linear trend over the monthly
//! expense series. Months are indexed by position (1, 2, 3, ...) over the
//! months that have data; calendar gaps are not filled.

use serde::Serialize;

use crate::models::MonthKey;

/// Ordinary least-squares line `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `values` against positions `1..=n`.
    ///
    /// Returns `None` for fewer than two points.
    pub fn over_positions(values: &[f64]) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }

        let n = values.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (i, y) in values.iter().enumerate() {
            let x = (i + 1) as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        // Positive for n >= 2 distinct positions
        let denominator = n * sum_xx - sum_x * sum_x;
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Some(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Forecast with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseForecast {
    /// Predicted expense for the month after the last observed one, >= 0
    pub prediction: f64,
    /// Number of months with expense data used
    pub months_used: usize,
    /// Month the series ends at
    pub last_month: Option<MonthKey>,
    /// Fitted trend; `None` with fewer than two months
    pub trend: Option<LinearFit>,
}

/// Forecast next month's expense, with the fitted trend
pub fn explain_forecast(series: &[(MonthKey, f64)]) -> ExpenseForecast {
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let last_month = series.last().map(|(m, _)| *m);
    let trend = LinearFit::over_positions(&values);

    let prediction = match (values.as_slice(), &trend) {
        ([], _) => 0.0,
        ([only], _) => *only,
        (_, Some(fit)) => fit.predict((values.len() + 1) as f64).max(0.0),
        (_, None) => 0.0,
    };

    ExpenseForecast {
        prediction,
        months_used: values.len(),
        last_month,
        trend,
    }
}

/// Forecast next month's expense from a chronological monthly series.
///
/// Empty series gives `0.0`; a single month is returned unchanged; otherwise
/// the OLS trend is extrapolated one position ahead and floored at zero.
pub fn forecast_next_month(series: &[(MonthKey, f64)]) -> f64 {
    explain_forecast(series).prediction
}
