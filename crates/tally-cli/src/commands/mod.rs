//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db, resolve_user, print_json) and init
//! - `users` - User management commands (list, add)
//! - `transactions` - Transaction commands (add, list, delete, bulk delete)
//! - `reports` - Report generation commands
//! - `insights` - Forecast and recommendation commands

pub mod core;
pub mod insights;
pub mod reports;
pub mod transactions;
pub mod users;

// Re-export command functions for main.rs
pub use core::*;
pub use insights::*;
pub use reports::*;
pub use transactions::*;
pub use users::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Parse an `income`/`expense` argument
pub fn parse_kind(kind: &str) -> anyhow::Result<tally_core::TransactionKind> {
    kind.parse().map_err(|e: String| anyhow::anyhow!(e))
}
