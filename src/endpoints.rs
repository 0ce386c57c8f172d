//! The endpoint URIs served by this app and the backend resource paths it consumes.

/// The root route, which displays the dashboard.
pub const DASHBOARD_VIEW: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The backend resource that serves the transaction list and balance.
///
/// This path is relative to the backend base URL configured at start up.
pub const TRANSACTIONS_API: &str = "/transactions";
