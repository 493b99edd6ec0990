//! crates/finmate_core/src/views/mod.rs
//!
//! View models for the goal, transaction and chat pages. Each one owns its data for as
//! long as it is mounted; mounting again starts from scratch.

pub mod chat;
pub mod format;
pub mod goals;
pub mod transactions;

pub use chat::{Alignment, ChatBubble, ChatView};
pub use format::{format_amount, format_deadline};
pub use goals::{GoalCard, GoalView, ADD_GOAL_LABEL, GOALS_HEADING, GOALS_SUBHEADING};
pub use transactions::{TransactionRow, TransactionView, TRANSACTIONS_HEADING};
