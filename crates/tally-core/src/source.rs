//! Transaction sources
//!
//! The insight engine never talks to storage directly. It asks a
//! [`TransactionSource`] for one user's transactions, so it can run against
//! the SQLite store or a plain in-memory list.

use crate::error::Result;
use crate::models::Transaction;

/// Narrow "fetch transactions for user" capability
pub trait TransactionSource: Send + Sync {
    /// All transactions owned by `user_id`, in no particular order
    fn transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>>;
}

/// Transactions held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
}

impl InMemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn push(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionSource for InMemorySource {
    fn transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect())
    }
}
