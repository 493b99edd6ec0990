//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for every route and the master definition for
//! the OpenAPI specification.

use crate::web::{
    pages,
    protocol::{
        AlignmentDto, AppStateResponse, CategoryDto, CategorySummaryDto, ChatBubbleDto,
        ChatPage, ChatStatus, ErrorResponse, GoalCardDto, GoalsPage, LayoutChrome, NavLink,
        PageContent, PageEnvelope, RoleDto, SetInputRequest, SetLoadingRequest, TransactionDto,
        TransactionsPage,
    },
    reply_task::spawn_reply,
    state::AppState,
};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use finmate_core::views::{GoalView, TransactionView};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        home_handler,
        login_handler,
        dashboard_handler,
        transactions_handler,
        goals_handler,
        chat_handler,
        set_chat_input_handler,
        submit_chat_handler,
        reset_chat_handler,
        get_state_handler,
        set_loading_handler,
    ),
    components(
        schemas(
            PageEnvelope, PageContent, LayoutChrome, NavLink, GoalsPage, GoalCardDto,
            TransactionsPage, TransactionDto, CategorySummaryDto, CategoryDto,
            ChatPage, ChatBubbleDto, ChatStatus, RoleDto, AlignmentDto, SetInputRequest,
            SetLoadingRequest,
            AppStateResponse, ErrorResponse
        )
    ),
    tags(
        (name = "FinmateAI API", description = "Page view models for the FinmateAI financial assistant.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Page Handlers
//=========================================================================================

/// The landing page.
#[utoipa::path(get, path = "/", responses((status = 200, body = PageEnvelope)))]
pub async fn home_handler(State(app_state): State<Arc<AppState>>) -> Json<PageEnvelope> {
    Json(pages::envelope(&app_state, pages::home_page()))
}

#[utoipa::path(get, path = "/login", responses((status = 200, body = PageEnvelope)))]
pub async fn login_handler(State(app_state): State<Arc<AppState>>) -> Json<PageEnvelope> {
    Json(pages::envelope(&app_state, pages::placeholder_page("Login Page")))
}

#[utoipa::path(get, path = "/dashboard", responses((status = 200, body = PageEnvelope)))]
pub async fn dashboard_handler(State(app_state): State<Arc<AppState>>) -> Json<PageEnvelope> {
    Json(pages::envelope(&app_state, pages::placeholder_page("Dashboard Page")))
}

/// Categorizes the statement and summarizes it per category.
#[utoipa::path(
    get,
    path = "/transactions",
    responses(
        (status = 200, description = "Categorized transactions and summary", body = PageEnvelope),
        (status = 500, description = "The transaction store failed")
    )
)]
pub async fn transactions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<PageEnvelope>, (StatusCode, String)> {
    let view = TransactionView::load(app_state.transaction_store.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to load transactions: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load transactions".to_string(),
            )
        })?;

    Ok(Json(pages::envelope(
        &app_state,
        pages::transactions_page(&view),
    )))
}

/// Mounts a fresh goal view and returns one card per goal.
#[utoipa::path(
    get,
    path = "/goals",
    responses(
        (status = 200, description = "Goal cards with progress", body = PageEnvelope),
        (status = 500, description = "The goal store failed")
    )
)]
pub async fn goals_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<PageEnvelope>, (StatusCode, String)> {
    let view = GoalView::load(app_state.goal_store.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to load goals: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load goals".to_string(),
            )
        })?;

    Ok(Json(pages::envelope(&app_state, pages::goals_page(&view))))
}

//=========================================================================================
// Chat Handlers
//=========================================================================================

/// The chat transcript, the input buffer and whether replies are in flight.
#[utoipa::path(get, path = "/chat", responses((status = 200, body = PageEnvelope)))]
pub async fn chat_handler(State(app_state): State<Arc<AppState>>) -> Json<PageEnvelope> {
    let page = pages::chat_page(&app_state.chat.lock().await.view);
    Json(pages::envelope(&app_state, page))
}

/// Replaces the chat input buffer.
#[utoipa::path(
    put,
    path = "/chat/input",
    request_body = SetInputRequest,
    responses((status = 200, body = PageEnvelope))
)]
pub async fn set_chat_input_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SetInputRequest>,
) -> Json<PageEnvelope> {
    let page = {
        let mut session = app_state.chat.lock().await;
        session.view.set_input(request.text);
        pages::chat_page(&session.view)
    };
    Json(pages::envelope(&app_state, page))
}

/// Submits the input buffer.
///
/// A blank buffer is ignored and the page comes back unchanged with 200.
/// An accepted turn returns 202; the assistant reply follows after the
/// configured delay.
#[utoipa::path(
    post,
    path = "/chat/submit",
    responses(
        (status = 200, description = "Blank input ignored", body = PageEnvelope),
        (status = 202, description = "User turn appended, reply scheduled", body = PageEnvelope)
    )
)]
pub async fn submit_chat_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, page) = {
        let mut session = app_state.chat.lock().await;
        let epoch = session.epoch;
        let status = match session.view.submit(Utc::now()) {
            Some(reply) => {
                info!(
                    "Accepted chat submission {}; reply due at {}.",
                    reply.submission, reply.due_at
                );
                spawn_reply(&app_state, epoch, reply);
                StatusCode::ACCEPTED
            }
            None => {
                debug!("Ignoring blank chat submission.");
                StatusCode::OK
            }
        };
        (status, pages::chat_page(&session.view))
    };

    (status, Json(pages::envelope(&app_state, page)))
}

/// Remounts the chat view, discarding the whole conversation.
#[utoipa::path(delete, path = "/chat", responses((status = 204, description = "Conversation discarded")))]
pub async fn reset_chat_handler(State(app_state): State<Arc<AppState>>) -> StatusCode {
    app_state.chat.lock().await.remount();
    info!("Chat view remounted.");
    StatusCode::NO_CONTENT
}

//=========================================================================================
// App State Handlers
//=========================================================================================

#[utoipa::path(get, path = "/state", responses((status = 200, body = AppStateResponse)))]
pub async fn get_state_handler(State(app_state): State<Arc<AppState>>) -> Json<AppStateResponse> {
    Json(AppStateResponse {
        is_loading: app_state.loading.is_loading(),
    })
}

/// The only writer of the shared loading flag.
#[utoipa::path(
    put,
    path = "/state/loading",
    request_body = SetLoadingRequest,
    responses((status = 200, body = AppStateResponse))
)]
pub async fn set_loading_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SetLoadingRequest>,
) -> Json<AppStateResponse> {
    app_state.loading.set_loading(request.is_loading);
    debug!("Loading flag set to {}.", request.is_loading);
    Json(AppStateResponse {
        is_loading: request.is_loading,
    })
}

//=========================================================================================
// Fallback
//=========================================================================================

pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No page at {}", uri.path()),
        }),
    )
}
