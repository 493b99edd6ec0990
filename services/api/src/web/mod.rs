pub mod pages;
pub mod protocol;
pub mod reply_task;
pub mod rest;
pub mod router;
pub mod state;

// Re-export the router builder for the binary and the integration tests.
pub use router::app_router;
pub use state::{AppState, ChatSession};
