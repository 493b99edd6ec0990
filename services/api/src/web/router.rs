//! services/api/src/web/router.rs
//!
//! Assembles the full HTTP router: page routes, chat and state actions,
//! CORS, request tracing and the Swagger UI.

use crate::web::{
    rest::{
        chat_handler, dashboard_handler, get_state_handler, goals_handler, home_handler,
        login_handler, not_found_handler, reset_chat_handler, set_chat_input_handler,
        set_loading_handler, submit_chat_handler, transactions_handler, ApiDoc,
    },
    state::AppState,
};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn app_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let page_routes = Router::new()
        .route("/", get(home_handler))
        .route("/login", get(login_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/transactions", get(transactions_handler))
        .route("/goals", get(goals_handler))
        .route("/chat", get(chat_handler).delete(reset_chat_handler));

    let action_routes = Router::new()
        .route("/chat/input", put(set_chat_input_handler))
        .route("/chat/submit", post(submit_chat_handler))
        .route("/state", get(get_state_handler))
        .route("/state/loading", put(set_loading_handler));

    let api_router = Router::new()
        .merge(page_routes)
        .merge(action_routes)
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
