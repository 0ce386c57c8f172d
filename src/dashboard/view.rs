//! HTML rendering for the dashboard page.
//!
//! All functions here are pure: markup is a function of the view state and
//! nothing else. The three balance amounts carry stable `data-testid`
//! attributes so they can be addressed independently in automated checks.

use maud::{Markup, html};

use crate::{
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base},
    navigation::header,
    transaction::TransactionType,
};

use super::{component::ViewState, transform::DisplayTransaction};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-md";

const TOTAL_CARD_STYLE: &str = "bg-orange-500 text-white border border-orange-400 \
    rounded-lg p-6 shadow-md";

fn price_cell_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "text-green-600 dark:text-green-400",
        TransactionType::Outcome => "text-red-600 dark:text-red-400",
    }
}

/// Renders the full dashboard page for the given view state.
pub(super) fn dashboard_view(state: &ViewState) -> Markup {
    let content = html!(
        (header())

        main class=(PAGE_CONTAINER_STYLE)
        {
            (balance_cards(state))
            (transactions_table(state.transactions()))
        }
    );

    base("Dashboard", &content)
}

/// Renders the three summary cards in fixed order: income, outcome, total.
///
/// Before the load completes (and after a failed load) the amounts are
/// simply absent; the cards themselves always render.
fn balance_cards(state: &ViewState) -> Markup {
    let balance = state.balance();

    html!(
        section class="w-full max-w-screen-xl mx-auto -mt-8 mb-8" {
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                (balance_card(
                    "Entradas",
                    "/static/income.svg",
                    "balance-income",
                    balance.map(|balance| balance.income.as_str()),
                    CARD_STYLE,
                ))
                (balance_card(
                    "Saídas",
                    "/static/outcome.svg",
                    "balance-outcome",
                    balance.map(|balance| balance.outcome.as_str()),
                    CARD_STYLE,
                ))
                (balance_card(
                    "Total",
                    "/static/total.svg",
                    "balance-total",
                    balance.map(|balance| balance.total.as_str()),
                    TOTAL_CARD_STYLE,
                ))
            }
        }
    )
}

fn balance_card(
    label: &str,
    icon: &str,
    test_id: &str,
    amount: Option<&str>,
    card_style: &str,
) -> Markup {
    html!(
        div class=(card_style) {
            header class="flex justify-between items-center" {
                p class="text-base" { (label) }
                img src=(icon) alt=(label) class="h-8 w-8";
            }
            h1 data-testid=(test_id) class="mt-4 text-3xl font-semibold leading-tight" {
                @if let Some(amount) = amount {
                    (amount)
                }
            }
        }
    )
}

/// Renders the transaction table, one row per transaction in backend order.
///
/// The price cell is prefixed with a literal ` - ` marker only for outcome
/// transactions; the marker is driven by the type field, never by the sign
/// of the amount.
fn transactions_table(transactions: &[DisplayTransaction]) -> Markup {
    html!(
        section class="w-full max-w-screen-xl mx-auto overflow-x-auto rounded-lg shadow" {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Preço" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                    }
                }

                tbody {
                    @for row in transactions {
                        tr class=(TABLE_ROW_STYLE) {
                            td class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} {
                                (row.transaction.title)
                            }
                            td class={(TABLE_CELL_STYLE) " " (row.transaction.transaction_type.as_str()) " " (price_cell_class(row.transaction.transaction_type))} {
                                @if row.transaction.transaction_type == TransactionType::Outcome {
                                    " - "
                                }
                                (row.formatted_value)
                            }
                            td class=(TABLE_CELL_STYLE) { (row.transaction.category.title) }
                            td class=(TABLE_CELL_STYLE) { (row.formatted_date) }
                        }
                    }
                }
            }
        }
    )
}
