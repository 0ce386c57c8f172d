//! Finboard is a web app that displays a personal-finance dashboard.
//!
//! The dashboard shows an income/outcome/total balance summary and a table of
//! transactions. The data comes from a separate backend service which serves
//! `GET /transactions`; this crate only fetches, formats and renders it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod navigation;
mod not_found;
mod routing;
mod transaction;

pub use api::{HttpTransactionApi, TransactionApi};
pub use app_state::AppState;
pub use routing::build_router;
pub use transaction::{Balance, Category, Transaction, TransactionType, TransactionsResponse};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// There is exactly one error class at this layer: the dashboard load can
/// fail, either because the backend could not be reached or because it
/// returned a body that does not match the expected shape. Load failures are
/// never shown to the user; the dashboard renders its empty state instead.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend transactions service could not be reached, or it returned
    /// an error status.
    #[error("could not reach the transactions service: {0}")]
    Request(String),

    /// The backend responded but the body did not match the expected
    /// `{ transactions, balance }` shape.
    #[error("the transactions service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::MalformedResponse(error.to_string())
        } else {
            Error::Request(error.to_string())
        }
    }
}
