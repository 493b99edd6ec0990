//! services/api/src/web/protocol.rs
//!
//! Defines the JSON shapes exchanged between the browser client and the API server.

use chrono::NaiveDate;
use finmate_core::conversation::ConversationState;
use finmate_core::domain::Role;
use finmate_core::transactions::{Category, CategorySummary};
use finmate_core::views::{Alignment, ChatBubble, GoalCard, TransactionRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//=========================================================================================
// Payloads Sent FROM the Client (Browser) TO the Server
//=========================================================================================

/// Replaces the chat input buffer.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetInputRequest {
    pub text: String,
}

/// Sets the shared loading flag.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetLoadingRequest {
    pub is_loading: bool,
}

//=========================================================================================
// Payloads Sent FROM the Server TO the Client (Browser)
//=========================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppStateResponse {
    pub is_loading: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

/// A labelled link to another route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// The page chrome shared by every route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutChrome {
    pub brand: NavLink,
    pub nav: Vec<NavLink>,
}

/// Every page response: chrome, the loading flag, and the page itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub layout: LayoutChrome,
    pub is_loading: bool,
    pub page: PageContent,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Home {
        title: String,
        tagline: String,
        actions: Vec<NavLink>,
    },
    /// A page that has no content yet.
    Placeholder { title: String },
    Goals(GoalsPage),
    Transactions(TransactionsPage),
    Chat(ChatPage),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalsPage {
    pub heading: String,
    pub subheading: String,
    /// Declared but not wired to any creation flow.
    pub add_goal_label: String,
    pub cards: Vec<GoalCardDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatPage {
    pub bubbles: Vec<ChatBubbleDto>,
    pub input: String,
    pub status: ChatStatus,
    pub pending_replies: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalCardDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount_label: String,
    pub progress: f64,
    pub deadline: NaiveDate,
    pub deadline_label: String,
}

impl From<GoalCard> for GoalCardDto {
    fn from(card: GoalCard) -> Self {
        Self {
            id: card.id,
            title: card.title,
            category: card.category,
            amount_label: card.amount_label,
            progress: card.progress,
            deadline: card.deadline,
            deadline_label: card.deadline_label,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    pub heading: String,
    pub transactions: Vec<TransactionDto>,
    /// One entry per category, empty ones included.
    pub summary: Vec<CategorySummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryDto {
    Food,
    Entertainment,
    Transportation,
    Shopping,
    Utilities,
    Housing,
    Healthcare,
    Income,
    Other,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Food => CategoryDto::Food,
            Category::Entertainment => CategoryDto::Entertainment,
            Category::Transportation => CategoryDto::Transportation,
            Category::Shopping => CategoryDto::Shopping,
            Category::Utilities => CategoryDto::Utilities,
            Category::Housing => CategoryDto::Housing,
            Category::Healthcare => CategoryDto::Healthcare,
            Category::Income => CategoryDto::Income,
            Category::Other => CategoryDto::Other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub date: NaiveDate,
    pub date_label: String,
    pub description: String,
    pub amount: f64,
    pub amount_label: String,
    pub category: CategoryDto,
}

impl From<TransactionRow> for TransactionDto {
    fn from(row: TransactionRow) -> Self {
        Self {
            date: row.date,
            date_label: row.date_label,
            description: row.description,
            amount: row.amount,
            amount_label: row.amount_label,
            category: row.category.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub category: CategoryDto,
    pub total_amount: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
}

impl From<CategorySummary> for CategorySummaryDto {
    fn from(summary: CategorySummary) -> Self {
        Self {
            category: summary.category.into(),
            total_amount: summary.total_amount,
            transaction_count: summary.transaction_count,
            average_amount: summary.average_amount,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoleDto {
    User,
    Assistant,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDto::User,
            Role::Assistant => RoleDto::Assistant,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentDto {
    Start,
    End,
}

impl From<Alignment> for AlignmentDto {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => AlignmentDto::Start,
            Alignment::End => AlignmentDto::End,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatBubbleDto {
    pub id: u64,
    pub content: String,
    pub role: RoleDto,
    pub alignment: AlignmentDto,
}

impl From<ChatBubble> for ChatBubbleDto {
    fn from(bubble: ChatBubble) -> Self {
        Self {
            id: bubble.id.0,
            content: bubble.content,
            role: bubble.role.into(),
            alignment: bubble.alignment.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    Idle,
    AwaitingReply,
}

impl From<ConversationState> for ChatStatus {
    fn from(state: ConversationState) -> Self {
        match state {
            ConversationState::Idle => ChatStatus::Idle,
            ConversationState::AwaitingReply { .. } => ChatStatus::AwaitingReply,
        }
    }
}
