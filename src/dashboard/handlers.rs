//! The HTTP handler that serves the dashboard page.

use std::sync::Arc;

use axum::extract::{FromRef, State};
use maud::Markup;

use crate::{api::TransactionApi, app_state::AppState};

use super::component::Dashboard;

/// The state needed for displaying the dashboard page.
#[derive(Debug)]
pub struct DashboardState<A> {
    /// The client for the backend transactions service.
    pub api: Arc<A>,
}

impl<A: TransactionApi> FromRef<AppState<A>> for DashboardState<A> {
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            api: Arc::clone(&state.api),
        }
    }
}

/// Display the dashboard page.
///
/// Mounts a fresh dashboard component, waits for its single data load to
/// finish and renders the result. A failed load is not an error response:
/// the page is served with empty summary cards and an empty table.
pub async fn get_dashboard_page<A: TransactionApi>(
    State(state): State<DashboardState<A>>,
) -> Markup {
    let dashboard = Dashboard::new(state.api);

    if let Some(load) = dashboard.mount() {
        if let Err(error) = load.await {
            tracing::error!("dashboard load task panicked: {error}");
        }
    }

    dashboard.render()
}

#[cfg(test)]
mod handlers_tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use super::{DashboardState, get_dashboard_page};
    use crate::{
        Error,
        api::TransactionApi,
        transaction::{Balance, Category, Transaction, TransactionType, TransactionsResponse},
    };

    struct StubApi;

    impl TransactionApi for StubApi {
        async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
            Ok(TransactionsResponse {
                transactions: vec![Transaction {
                    id: "1".to_owned(),
                    title: "Salary".to_owned(),
                    value: 5000.0,
                    transaction_type: TransactionType::Income,
                    category: Category {
                        title: "Job".to_owned(),
                    },
                    created_at: date!(2024 - 03 - 05),
                }],
                balance: Balance {
                    income: 5000.0,
                    outcome: 0.0,
                    total: 5000.0,
                },
            })
        }
    }

    struct FailingApi;

    impl TransactionApi for FailingApi {
        async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
            Err(Error::Request("connection refused".to_owned()))
        }
    }

    #[tokio::test]
    async fn serves_loaded_dashboard() {
        let state = DashboardState {
            api: Arc::new(StubApi),
        };

        let markup = get_dashboard_page(State(state)).await;
        let html = Html::parse_document(&markup.into_string());

        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );

        let income_selector = Selector::parse("[data-testid='balance-income']").unwrap();
        let income: String = html.select(&income_selector).next().unwrap().text().collect();
        assert_eq!(income, "R$5,000.00");
    }

    #[tokio::test]
    async fn serves_empty_dashboard_when_load_fails() {
        let state = DashboardState {
            api: Arc::new(FailingApi),
        };

        // No error should surface to the rendering layer.
        let markup = get_dashboard_page(State(state)).await;
        let html = Html::parse_document(&markup.into_string());

        let income_selector = Selector::parse("[data-testid='balance-income']").unwrap();
        let income: String = html.select(&income_selector).next().unwrap().text().collect();
        assert_eq!(income, "");

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), 0);
    }
}
