//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    api::TransactionApi, app_state::AppState, dashboard::get_dashboard_page, endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router<A: TransactionApi>(state: AppState<A>) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<A>))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
