//! The HTTP client seam between the dashboard and the backend service.
//!
//! The dashboard only ever performs one request, `GET /transactions`, so the
//! seam is a single-method trait. The production implementation talks to the
//! backend over HTTP; tests substitute stubs with canned responses.

use crate::{Error, endpoints, transaction::TransactionsResponse};

/// The backend collaborator the dashboard fetches its data from.
pub trait TransactionApi: Send + Sync + 'static {
    /// Fetch the transaction list and aggregate balance from the backend.
    ///
    /// # Errors
    /// Returns [Error::Request] if the backend cannot be reached or responds
    /// with an error status, and [Error::MalformedResponse] if the body does
    /// not match the expected shape.
    fn fetch_transactions(
        &self,
    ) -> impl Future<Output = Result<TransactionsResponse, Error>> + Send;
}

/// A [TransactionApi] backed by a real HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransactionApi {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:3333`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl TransactionApi for HttpTransactionApi {
    async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
        let url = format!("{}{}", self.base_url, endpoints::TRANSACTIONS_API);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        Ok(response.json().await?)
    }
}
