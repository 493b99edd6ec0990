//! crates/finmate_core/src/app_state.rs
//!
//! Cross-view application state.

use std::sync::atomic::{AtomicBool, Ordering};

/// The shared loading flag.
///
/// Handed to views explicitly (behind an `Arc`) instead of living in a global.
/// Nothing in the app currently holds it `true` on its own; it is the hook for
/// async work that wants to signal progress across pages.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    is_loading: AtomicBool,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    pub fn set_loading(&self, loading: bool) {
        self.is_loading.store(loading, Ordering::Release);
    }
}
