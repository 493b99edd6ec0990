//! crates/finmate_core/src/views/goals.rs
//!
//! The goal tracking page: one card per goal with its progress.

use crate::domain::Goal;
use crate::ports::{GoalStore, PortResult};
use crate::progress::compute_progress;
use crate::views::format::{format_amount, format_deadline};
use chrono::NaiveDate;

pub const GOALS_HEADING: &str = "Financial Goals";
pub const GOALS_SUBHEADING: &str = "Track and manage your financial goals";

/// Label of the "Add Goal" affordance. It is declared on the page but not
/// connected to any creation flow.
pub const ADD_GOAL_LABEL: &str = "Add Goal";

/// Everything a single goal card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCard {
    pub id: String,
    pub title: String,
    pub category: String,
    /// `"$current / $target"`.
    pub amount_label: String,
    /// Raw percentage, also used as the bar width. Not clamped.
    pub progress: f64,
    pub deadline: NaiveDate,
    pub deadline_label: String,
}

impl From<&Goal> for GoalCard {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id().to_string(),
            title: goal.title().to_string(),
            category: goal.category().to_string(),
            amount_label: format!(
                "${} / ${}",
                format_amount(goal.current_amount()),
                format_amount(goal.target_amount())
            ),
            progress: compute_progress(goal.current_amount(), goal.target_amount()),
            deadline: goal.deadline(),
            deadline_label: format_deadline(goal.deadline()),
        }
    }
}

/// Owns the goal collection for the lifetime of one mount.
#[derive(Debug, Clone, Default)]
pub struct GoalView {
    goals: Vec<Goal>,
}

impl GoalView {
    pub fn mount(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Mounts a fresh view from whatever the store currently supplies.
    pub async fn load(store: &dyn GoalStore) -> PortResult<Self> {
        Ok(Self::mount(store.list_goals().await?))
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Cards in the same order as the goals.
    pub fn cards(&self) -> Vec<GoalCard> {
        self.goals.iter().map(GoalCard::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PortError;
    use async_trait::async_trait;

    fn goal(id: &str, title: &str, target: f64, current: f64) -> Goal {
        let deadline = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        Goal::new(id, title, target, current, deadline, "Savings").unwrap()
    }

    struct FixedStore(Vec<Goal>);

    #[async_trait]
    impl GoalStore for FixedStore {
        async fn list_goals(&self) -> PortResult<Vec<Goal>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl GoalStore for BrokenStore {
        async fn list_goals(&self) -> PortResult<Vec<Goal>> {
            Err(PortError::Unexpected("store offline".to_string()))
        }
    }

    #[test]
    fn cards_follow_goal_order_with_progress() {
        let view = GoalView::mount(vec![
            goal("1", "Emergency Fund", 10000.0, 5000.0),
            goal("2", "New Car", 25000.0, 15000.0),
        ]);

        let progress: Vec<f64> = view.cards().iter().map(|c| c.progress).collect();
        assert_eq!(progress, vec![50.0, 60.0]);
        assert_eq!(view.cards()[1].title, "New Car");
    }

    #[test]
    fn card_shows_amounts_and_deadline() {
        let card = GoalCard::from(&goal("1", "Emergency Fund", 10000.0, 5000.0));
        assert_eq!(card.amount_label, "$5,000 / $10,000");
        assert_eq!(card.deadline, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(card.deadline_label, "12/31/2024");
        assert_eq!(card.category, "Savings");
    }

    #[test]
    fn over_funded_goal_reports_above_one_hundred() {
        let card = GoalCard::from(&goal("1", "Bonus", 10000.0, 15000.0));
        assert_eq!(card.progress, 150.0);
    }

    #[tokio::test]
    async fn load_mounts_from_store() {
        let store = FixedStore(vec![goal("7", "House", 200000.0, 50000.0)]);
        let view = GoalView::load(&store).await.unwrap();
        assert_eq!(view.goals().len(), 1);
        assert_eq!(view.cards()[0].progress, 25.0);
    }

    #[tokio::test]
    async fn load_propagates_store_errors() {
        let err = GoalView::load(&BrokenStore).await.unwrap_err();
        assert!(matches!(err, PortError::Unexpected(_)));
    }
}
