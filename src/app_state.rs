//! Implements a struct that holds the state of the dashboard server.

use std::sync::Arc;

use crate::api::TransactionApi;

/// The state of the dashboard server.
///
/// Generic over the backend client so that tests can substitute a stub for
/// the real HTTP client.
#[derive(Debug)]
pub struct AppState<A> {
    /// The client for the backend transactions service.
    pub api: Arc<A>,
}

impl<A: TransactionApi> AppState<A> {
    /// Create a new [AppState] wrapping the given backend client.
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }
}

// Derived Clone would require `A: Clone`, but only the Arc is cloned.
impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
