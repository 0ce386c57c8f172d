//! The page header shown above the dashboard.
//!
//! The header is pure chrome: it has no dependency on the dashboard's data
//! and renders the same regardless of view state.

use maud::{Markup, html};

use crate::endpoints;

/// Renders the site header with the logo and app name.
pub fn header() -> Markup {
    html!(
        header class="bg-indigo-900 dark:bg-indigo-950"
        {
            div
                class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
            {
                a
                    href=(endpoints::DASHBOARD_VIEW)
                    class="flex items-center space-x-3 rtl:space-x-reverse"
                {
                    img
                        src="/static/logo.svg"
                        alt="Finboard Logo"
                        class="h-8"
                    ;

                    span
                        class="self-center text-2xl font-semibold whitespace-nowrap text-white"
                    {
                        "Finboard"
                    }
                }
            }
        }
    )
}
