//! Forecast and recommendation commands

use anyhow::Result;
use tally_core::db::Database;
use tally_core::insights::{AnalysisContext, InsightEngine};
use tally_core::models::User;

use super::print_json;

pub fn cmd_forecast(
    db: &Database,
    user: &User,
    engine: &InsightEngine,
    json: bool,
) -> Result<()> {
    let forecast = engine.forecast(&AnalysisContext::new(db, user.id))?;

    if json {
        return print_json(&forecast);
    }

    let symbol = &engine.recommender().config().currency_symbol;

    println!();
    println!("🔮 Expense Forecast");
    println!("   ─────────────────────────────");

    match forecast.last_month {
        None => {
            println!("   No expense history yet.");
            println!("   Predicted next month expense: {}{:.2}", symbol, forecast.prediction);
            return Ok(());
        }
        Some(last) => {
            println!("   Months of data: {} (through {})", forecast.months_used, last);
        }
    }

    if let Some(trend) = forecast.trend {
        println!(
            "   Trend: {}{:+.2} per month (intercept {}{:.2})",
            symbol, trend.slope, symbol, trend.intercept
        );
    } else {
        println!("   Trend: not enough months, repeating the only month");
    }
    println!("   Predicted next month expense: {}{:.2}", symbol, forecast.prediction);

    Ok(())
}

pub fn cmd_recommend(
    db: &Database,
    user: &User,
    engine: &InsightEngine,
    json: bool,
) -> Result<()> {
    let report = engine.analyze(&AnalysisContext::new(db, user.id))?;

    if json {
        return print_json(&report);
    }

    let symbol = &engine.recommender().config().currency_symbol;

    println!();
    println!("💡 Recommendations for {}", user.name);
    println!("   ─────────────────────────────────────────────");
    for (i, message) in report.recommendations.iter().enumerate() {
        println!("   {}. {}", i + 1, message);
    }
    println!();
    println!(
        "   Next month expense prediction: {}{:.2}",
        symbol, report.next_month_expense_prediction
    );

    Ok(())
}
