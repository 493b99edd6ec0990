use api_lib::{
    adapters::{SeedGoalStore, SeedTransactionStore},
    config::Config,
    web::{app_router, AppState},
};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const CANNED: &str = "This is a placeholder response from the AI assistant.";

fn test_app() -> (Router, Arc<AppState>) {
    let config = Arc::new(Config {
        reply_delay: Duration::from_millis(1000),
        ..Config::default()
    });
    let goals = Arc::new(SeedGoalStore::new().unwrap());
    let transactions = Arc::new(SeedTransactionStore::new().unwrap());
    let state = Arc::new(AppState::new(config, goals, transactions).unwrap());
    (app_router(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn type_and_submit(app: &Router, text: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, "/chat/input", Some(json!({ "text": text }))).await;
    send(app, Method::POST, "/chat/submit", None).await
}

fn transcript(envelope: &Value) -> Vec<(String, String)> {
    envelope["page"]["bubbles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| {
            (
                b["role"].as_str().unwrap().to_string(),
                b["content"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn every_page_route_carries_the_layout() {
    let (app, _) = test_app();

    for uri in ["/", "/login", "/dashboard", "/transactions", "/goals", "/chat"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["layout"]["brand"]["label"], "FinmateAI");
        assert_eq!(body["layout"]["nav"][1]["href"], "/transactions");
        assert_eq!(body["isLoading"], false);
    }
}

#[tokio::test]
async fn home_page_links_to_dashboard_and_login() {
    let (app, _) = test_app();
    let (_, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(body["page"]["kind"], "home");
    assert_eq!(body["page"]["title"], "Welcome to FinmateAI");
    assert_eq!(body["page"]["actions"][0]["href"], "/dashboard");
    assert_eq!(body["page"]["actions"][1]["href"], "/login");
}

#[tokio::test]
async fn goals_page_reports_seed_progress() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/goals", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["kind"], "goals");
    assert_eq!(body["page"]["addGoalLabel"], "Add Goal");

    let cards = body["page"]["cards"].as_array().unwrap();
    let progress: Vec<f64> = cards.iter().map(|c| c["progress"].as_f64().unwrap()).collect();
    assert_eq!(progress, vec![50.0, 60.0]);
    assert_eq!(cards[0]["amountLabel"], "$5,000 / $10,000");
    assert_eq!(cards[1]["amountLabel"], "$15,000 / $25,000");
    assert_eq!(cards[1]["deadlineLabel"], "6/30/2025");
    assert_eq!(cards[1]["deadline"], "2025-06-30");
}

#[tokio::test]
async fn transactions_page_categorizes_the_seed_statement() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/transactions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["kind"], "transactions");

    let rows = body["page"]["transactions"].as_array().unwrap();
    assert_eq!(rows[3]["description"], "Shell Gas Station");
    assert_eq!(rows[3]["category"], "TRANSPORTATION");
    assert_eq!(rows[9]["category"], "OTHER");
    assert_eq!(rows[1]["amountLabel"], "-$1,800");

    let summary = body["page"]["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 9);
    assert_eq!(summary[0]["category"], "FOOD");
    assert_eq!(summary[0]["transactionCount"], 2);
    assert_eq!(summary[0]["totalAmount"], -92.92);
    assert_eq!(summary[0]["averageAmount"], -46.46);
}

#[tokio::test]
async fn blank_submission_changes_nothing() {
    let (app, _) = test_app();
    let (status, body) = type_and_submit(&app, "   ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["input"], "   ");
    assert_eq!(body["page"]["status"], "idle");
    assert!(transcript(&body).is_empty());
}

#[tokio::test(start_paused = true)]
async fn overlapping_submissions_get_one_reply_each_in_order() {
    let (app, _) = test_app();

    let (status, body) = type_and_submit(&app, "Hi").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["page"]["input"], "");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let (_, body) = type_and_submit(&app, "There").await;
    assert_eq!(body["page"]["status"], "awaiting_reply");
    assert_eq!(body["page"]["pendingReplies"], 2);

    tokio::time::sleep(Duration::from_millis(701)).await;
    let (_, body) = send(&app, Method::GET, "/chat", None).await;
    assert_eq!(transcript(&body).len(), 3);

    tokio::time::sleep(Duration::from_millis(300)).await;
    let (_, body) = send(&app, Method::GET, "/chat", None).await;
    assert_eq!(
        transcript(&body),
        vec![
            ("user".to_string(), "Hi".to_string()),
            ("user".to_string(), "There".to_string()),
            ("assistant".to_string(), CANNED.to_string()),
            ("assistant".to_string(), CANNED.to_string()),
        ]
    );
    assert_eq!(body["page"]["status"], "idle");
    assert_eq!(body["page"]["bubbles"][0]["alignment"], "end");
    assert_eq!(body["page"]["bubbles"][2]["alignment"], "start");
}

#[tokio::test(start_paused = true)]
async fn remount_discards_conversation_and_late_replies() {
    let (app, _) = test_app();
    type_and_submit(&app, "Hi").await;

    let (status, _) = send(&app, Method::DELETE, "/chat", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let (_, body) = send(&app, Method::GET, "/chat", None).await;
    assert!(transcript(&body).is_empty());
    assert_eq!(body["page"]["status"], "idle");
}

#[tokio::test(start_paused = true)]
async fn pending_replies_finish_once_the_tracker_drains() {
    let (app, state) = test_app();
    type_and_submit(&app, "Hello").await;

    state.reply_tasks.close();
    state.reply_tasks.wait().await;

    let (_, body) = send(&app, Method::GET, "/chat", None).await;
    assert_eq!(transcript(&body).len(), 2);
}

#[tokio::test]
async fn loading_flag_is_shared_across_views() {
    let (app, _) = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/state/loading",
        Some(json!({ "isLoading": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLoading"], true);

    let (_, body) = send(&app, Method::GET, "/state", None).await;
    assert_eq!(body["isLoading"], true);

    let (_, body) = send(&app, Method::GET, "/goals", None).await;
    assert_eq!(body["isLoading"], true);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/budgets", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No page at /budgets");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/chat/submit"].is_object());
}
