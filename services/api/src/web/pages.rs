//! services/api/src/web/pages.rs
//!
//! Layout chrome and the page view models served by each route.

use crate::web::protocol::{
    CategorySummaryDto, ChatBubbleDto, ChatPage, GoalCardDto, GoalsPage, LayoutChrome, NavLink,
    PageContent, PageEnvelope, TransactionDto, TransactionsPage,
};
use crate::web::state::AppState;
use finmate_core::views::{
    ChatView, GoalView, TransactionView, ADD_GOAL_LABEL, GOALS_HEADING, GOALS_SUBHEADING,
    TRANSACTIONS_HEADING,
};

pub const BRAND: &str = "FinmateAI";

const HOME_TAGLINE: &str = "Your AI-powered financial companion. Get insights, track expenses, and make smarter financial decisions.";

/// Header branding plus the main navigation.
pub fn layout() -> LayoutChrome {
    LayoutChrome {
        brand: NavLink::new(BRAND, "/"),
        nav: vec![
            NavLink::new("Dashboard", "/dashboard"),
            NavLink::new("Transactions", "/transactions"),
        ],
    }
}

/// Wraps a page in the layout and reports the shared loading flag.
pub fn envelope(app_state: &AppState, page: PageContent) -> PageEnvelope {
    PageEnvelope {
        layout: layout(),
        is_loading: app_state.loading.is_loading(),
        page,
    }
}

pub fn home_page() -> PageContent {
    PageContent::Home {
        title: format!("Welcome to {BRAND}"),
        tagline: HOME_TAGLINE.to_string(),
        actions: vec![
            NavLink::new("Get Started", "/dashboard"),
            NavLink::new("Sign in", "/login"),
        ],
    }
}

pub fn placeholder_page(title: &str) -> PageContent {
    PageContent::Placeholder {
        title: title.to_string(),
    }
}

pub fn goals_page(view: &GoalView) -> PageContent {
    PageContent::Goals(GoalsPage {
        heading: GOALS_HEADING.to_string(),
        subheading: GOALS_SUBHEADING.to_string(),
        add_goal_label: ADD_GOAL_LABEL.to_string(),
        cards: view.cards().into_iter().map(GoalCardDto::from).collect(),
    })
}

pub fn transactions_page(view: &TransactionView) -> PageContent {
    PageContent::Transactions(TransactionsPage {
        heading: TRANSACTIONS_HEADING.to_string(),
        transactions: view.rows().into_iter().map(TransactionDto::from).collect(),
        summary: view
            .summary()
            .into_iter()
            .map(CategorySummaryDto::from)
            .collect(),
    })
}

pub fn chat_page(view: &ChatView) -> PageContent {
    let conversation = view.conversation();
    PageContent::Chat(ChatPage {
        bubbles: view.bubbles().into_iter().map(ChatBubbleDto::from).collect(),
        input: view.input().to_string(),
        status: conversation.state().into(),
        pending_replies: conversation.pending_replies().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{SeedGoalStore, SeedTransactionStore};
    use crate::web::protocol::{CategoryDto, ChatStatus};
    use chrono::Utc;

    #[test]
    fn layout_links_home_dashboard_and_transactions() {
        let chrome = layout();
        assert_eq!(chrome.brand.href, "/");
        let hrefs: Vec<&str> = chrome.nav.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/dashboard", "/transactions"]);
    }

    #[tokio::test]
    async fn goals_page_builds_cards_from_the_view() {
        let view = GoalView::load(&SeedGoalStore::new().unwrap()).await.unwrap();

        let PageContent::Goals(page) = goals_page(&view) else {
            panic!("expected goals page");
        };
        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.cards[0].deadline.to_string(), "2024-12-31");
        assert_eq!(page.cards[0].deadline_label, "12/31/2024");
    }

    #[tokio::test]
    async fn transactions_page_lists_rows_and_full_summary() {
        let store = SeedTransactionStore::new().unwrap();
        let view = TransactionView::load(&store).await.unwrap();

        let PageContent::Transactions(page) = transactions_page(&view) else {
            panic!("expected transactions page");
        };
        assert_eq!(page.heading, "Transactions");
        assert!(!page.transactions.is_empty());
        assert_eq!(page.summary.len(), 9);
        assert_eq!(page.summary[0].category, CategoryDto::Food);
        assert_eq!(page.summary[8].category, CategoryDto::Other);
    }

    #[test]
    fn chat_page_reports_pending_replies() {
        let mut view = ChatView::default();
        view.set_input("Hi");
        view.submit(Utc::now());

        let PageContent::Chat(page) = chat_page(&view) else {
            panic!("expected chat page");
        };
        assert_eq!(page.status, ChatStatus::AwaitingReply);
        assert_eq!(page.pending_replies, 1);
        assert_eq!(page.bubbles[0].content, "Hi");
    }
}
