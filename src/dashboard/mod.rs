//! Dashboard module
//!
//! Provides the landing page showing the income/outcome/total balance
//! summary and the transaction table. The data is fetched once from the
//! backend when the view is mounted and formatted for display.

mod component;
mod handlers;
mod transform;
mod view;

pub use handlers::get_dashboard_page;
