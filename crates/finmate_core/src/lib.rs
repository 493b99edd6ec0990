pub mod app_state;
pub mod conversation;
pub mod domain;
pub mod ports;
pub mod progress;
pub mod transactions;
pub mod views;

pub use app_state::LoadingIndicator;
pub use conversation::{
    Conversation, ConversationState, PendingReply, CANNED_REPLY, DEFAULT_REPLY_DELAY_MS,
};
pub use domain::{Goal, GoalError, Message, MessageId, Role};
pub use ports::{GoalStore, PortError, PortResult, TransactionStore};
pub use progress::compute_progress;
pub use transactions::{
    classify, summarize, CategorizedTransaction, Category, CategorySummary, Transaction,
};
pub use views::{
    Alignment, ChatBubble, ChatView, GoalCard, GoalView, TransactionRow, TransactionView,
};
