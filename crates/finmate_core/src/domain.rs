//! crates/finmate_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

//=========================================================================================
// Goals
//=========================================================================================

/// Reasons a goal record can be refused at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    #[error("Target amount must be a finite number greater than zero, got {0}")]
    NonPositiveTarget(f64),
    #[error("Current amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
}

/// A savings or spending target tracked toward a deadline.
///
/// Fields are immutable once built. `target_amount` is always finite and
/// strictly positive, so progress never divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    id: String,
    title: String,
    target_amount: f64,
    current_amount: f64,
    deadline: NaiveDate,
    category: String,
}

impl Goal {
    /// Builds a goal, rejecting a target that is zero, negative or not finite.
    ///
    /// The current amount may be anywhere (including above the target or
    /// below zero) as long as it is finite.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        deadline: NaiveDate,
        category: impl Into<String>,
    ) -> Result<Self, GoalError> {
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(GoalError::NonPositiveTarget(target_amount));
        }
        if !current_amount.is_finite() {
            return Err(GoalError::NonFiniteAmount(current_amount));
        }

        Ok(Self {
            id: id.into(),
            title: title.into(),
            target_amount,
            current_amount,
            deadline,
            category: category.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

//=========================================================================================
// Conversation Turns
//=========================================================================================

/// Identifies a message within one conversation.
///
/// Allocated from a per-conversation counter, so two messages created in the
/// same instant still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Represents a single turn in the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub role: Role,
    /// Informational only. Ordering is insertion order.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn goal_accepts_over_funded_and_negative_current_amounts() {
        let over = Goal::new("1", "Trip", 1000.0, 1500.0, date(2025, 1, 1), "Travel").unwrap();
        assert_eq!(over.current_amount(), 1500.0);

        let negative = Goal::new("2", "Debt", 1000.0, -200.0, date(2025, 1, 1), "Loans").unwrap();
        assert_eq!(negative.current_amount(), -200.0);
    }

    #[test]
    fn goal_rejects_zero_negative_and_nan_targets() {
        for target in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = Goal::new("1", "Bad", target, 0.0, date(2025, 1, 1), "x").unwrap_err();
            assert!(matches!(err, GoalError::NonPositiveTarget(_)), "target {target}");
        }
    }

    #[test]
    fn goal_rejects_non_finite_current_amount() {
        let err = Goal::new("1", "Bad", 100.0, f64::NAN, date(2025, 1, 1), "x").unwrap_err();
        assert!(matches!(err, GoalError::NonFiniteAmount(_)));
    }

    #[test]
    fn message_id_displays_as_number() {
        assert_eq!(MessageId(42).to_string(), "42");
    }
}
