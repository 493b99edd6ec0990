//! crates/finmate_core/src/views/transactions.rs
//!
//! The transactions page: categorized statement lines plus the per-category
//! summary.

use crate::ports::{PortResult, TransactionStore};
use crate::transactions::{categorize, summarize, CategorizedTransaction, Category, CategorySummary};
use crate::views::format::{format_amount, format_deadline};
use chrono::NaiveDate;

pub const TRANSACTIONS_HEADING: &str = "Transactions";

/// One statement line as the table shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: NaiveDate,
    pub date_label: String,
    pub description: String,
    pub amount: f64,
    /// Signed, e.g. `"-$1,800"`.
    pub amount_label: String,
    pub category: Category,
}

impl From<&CategorizedTransaction> for TransactionRow {
    fn from(categorized: &CategorizedTransaction) -> Self {
        let transaction = &categorized.transaction;
        let amount_label = if transaction.amount < 0.0 {
            format!("-${}", format_amount(-transaction.amount))
        } else {
            format!("${}", format_amount(transaction.amount))
        };
        Self {
            date: transaction.date,
            date_label: format_deadline(transaction.date),
            description: transaction.description.clone(),
            amount: transaction.amount,
            amount_label,
            category: categorized.category,
        }
    }
}

/// Owns the categorized statement for the lifetime of one mount.
#[derive(Debug, Clone, Default)]
pub struct TransactionView {
    categorized: Vec<CategorizedTransaction>,
}

impl TransactionView {
    pub async fn load(store: &dyn TransactionStore) -> PortResult<Self> {
        let transactions = store.list_transactions().await?;
        Ok(Self {
            categorized: categorize(&transactions),
        })
    }

    pub fn rows(&self) -> Vec<TransactionRow> {
        self.categorized.iter().map(TransactionRow::from).collect()
    }

    pub fn summary(&self) -> Vec<CategorySummary> {
        summarize(&self.categorized)
    }
}
