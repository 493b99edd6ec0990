//! crates/finmate_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The views depend on these traits only, never on a concrete data source.

use crate::domain::{Goal, GoalError};
use crate::transactions::Transaction;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid goal record: {0}")]
    InvalidGoal(#[from] GoalError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Supplies the ordered goal collection a goal view mounts with.
#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn list_goals(&self) -> PortResult<Vec<Goal>>;
}

/// Supplies the statement lines the transactions view categorizes.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn list_transactions(&self) -> PortResult<Vec<Transaction>>;
}
