//! services/api/src/adapters/seed.rs
//!
//! The in-memory stores. They hand out the same seed goals and statement
//! lines every time a view is mounted; nothing is ever written back.

use async_trait::async_trait;
use chrono::NaiveDate;
use finmate_core::domain::Goal;
use finmate_core::ports::{GoalStore, PortError, PortResult, TransactionStore};
use finmate_core::transactions::Transaction;

/// A goal store backed by a fixed, hand-authored collection.
#[derive(Clone, Debug)]
pub struct SeedGoalStore {
    goals: Vec<Goal>,
}

impl SeedGoalStore {
    /// Creates a store holding the default sample goals.
    pub fn new() -> PortResult<Self> {
        Ok(Self::with_goals(vec![
            Goal::new(
                "1",
                "Emergency Fund",
                10000.0,
                5000.0,
                date(2024, 12, 31)?,
                "Savings",
            )?,
            Goal::new(
                "2",
                "New Car",
                25000.0,
                15000.0,
                date(2025, 6, 30)?,
                "Vehicle",
            )?,
        ]))
    }

    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }
}

/// A transaction store backed by one sample month of statement lines.
#[derive(Clone, Debug)]
pub struct SeedTransactionStore {
    transactions: Vec<Transaction>,
}

impl SeedTransactionStore {
    pub fn new() -> PortResult<Self> {
        let lines = [
            ((2024, 5, 1), "Payroll Deposit ACME Corp", 4250.00),
            ((2024, 5, 1), "Monthly Rent - Oak St", -1800.00),
            ((2024, 5, 3), "Whole Foods Market", -86.42),
            ((2024, 5, 5), "Shell Gas Station", -52.10),
            ((2024, 5, 7), "Netflix Subscription", -15.49),
            ((2024, 5, 9), "Amazon Marketplace", -63.99),
            ((2024, 5, 12), "City Water Utility", -41.30),
            ((2024, 5, 15), "Walgreens Pharmacy", -12.75),
            ((2024, 5, 18), "Blue Bottle Coffee", -6.50),
            ((2024, 5, 20), "Venmo Transfer to Alex", -40.00),
        ];

        let transactions = lines
            .into_iter()
            .map(|((y, m, d), description, amount)| -> PortResult<Transaction> {
                Ok(Transaction::new(date(y, m, d)?, description, amount))
            })
            .collect::<PortResult<Vec<_>>>()?;
        Ok(Self::with_transactions(transactions))
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionStore for SeedTransactionStore {
    async fn list_transactions(&self) -> PortResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

fn date(year: i32, month: u32, day: u32) -> PortResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PortError::Unexpected(format!("invalid seed date {year}-{month}-{day}")))
}

#[async_trait]
impl GoalStore for SeedGoalStore {
    async fn list_goals(&self) -> PortResult<Vec<Goal>> {
        Ok(self.goals.clone())
    }
}
