//! The pure mapping from server-shaped records to display-ready records.
//!
//! This is the only place where the derived display fields are computed.
//! The mapping has no side effects, so it can be tested independently of
//! the rendering and of the HTTP client.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    html::format_currency,
    transaction::{Balance, Transaction},
};

/// Dates are displayed day-first with zero padding, e.g. `05/03/2024`,
/// following the pt-BR convention.
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");

/// A transaction plus the fields derived for display.
///
/// The derived fields are always recomputed from the raw fields here and are
/// never mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    /// The raw transaction as served by the backend.
    pub transaction: Transaction,
    /// `transaction.value` formatted as a currency string.
    pub formatted_value: String,
    /// `transaction.created_at` formatted as `DD/MM/YYYY`.
    pub formatted_date: String,
}

impl From<Transaction> for DisplayTransaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            formatted_value: format_currency(transaction.value),
            formatted_date: format_date(transaction.created_at),
            transaction,
        }
    }
}

/// The balance with each amount formatted for display.
///
/// Only the formatted strings are kept; the raw numbers are not retained in
/// view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBalance {
    /// The formatted sum of income transactions.
    pub income: String,
    /// The formatted sum of outcome transactions.
    pub outcome: String,
    /// The formatted overall balance.
    pub total: String,
}

impl From<Balance> for FormattedBalance {
    fn from(balance: Balance) -> Self {
        // Each amount is formatted independently; the total is trusted as
        // computed by the backend and never re-derived from the other two.
        Self {
            income: format_currency(balance.income),
            outcome: format_currency(balance.outcome),
            total: format_currency(balance.total),
        }
    }
}

/// Maps raw transactions into display records, preserving the backend's order.
pub fn to_display_transactions(transactions: Vec<Transaction>) -> Vec<DisplayTransaction> {
    transactions.into_iter().map(Into::into).collect()
}

fn format_date(date: Date) -> String {
    // The description only uses day/month/year, which every valid date has.
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod transform_tests {
    use time::macros::date;

    use super::{DisplayTransaction, FormattedBalance, to_display_transactions};
    use crate::{
        html::format_currency,
        transaction::{Balance, Category, Transaction, TransactionType},
    };

    fn create_test_transaction(id: &str, value: f64, created_at: time::Date) -> Transaction {
        Transaction {
            id: id.to_owned(),
            title: "Salary".to_owned(),
            value,
            transaction_type: TransactionType::Income,
            category: Category {
                title: "Job".to_owned(),
            },
            created_at,
        }
    }

    #[test]
    fn formatted_value_delegates_to_currency_formatter() {
        let transaction = create_test_transaction("1", 5000.0, date!(2024 - 03 - 05));

        let display = DisplayTransaction::from(transaction.clone());

        assert_eq!(display.formatted_value, format_currency(transaction.value));
    }

    #[test]
    fn formats_date_day_first_with_zero_padding() {
        let transaction = create_test_transaction("1", 5000.0, date!(2024 - 03 - 05));

        let display = DisplayTransaction::from(transaction);

        assert_eq!(display.formatted_date, "05/03/2024");
    }

    #[test]
    fn keeps_raw_fields_unchanged() {
        let transaction = create_test_transaction("1", 150.25, date!(2023 - 12 - 31));

        let display = DisplayTransaction::from(transaction.clone());

        assert_eq!(display.transaction, transaction);
        assert_eq!(display.formatted_date, "31/12/2023");
    }

    #[test]
    fn preserves_backend_order() {
        let transactions = vec![
            create_test_transaction("c", 3.0, date!(2024 - 01 - 03)),
            create_test_transaction("a", 1.0, date!(2024 - 01 - 01)),
            create_test_transaction("b", 2.0, date!(2024 - 01 - 02)),
        ];

        let display = to_display_transactions(transactions);

        let ids: Vec<&str> = display
            .iter()
            .map(|row| row.transaction.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn formats_each_balance_amount_independently() {
        // A balance where total != income - outcome: the backend's numbers
        // are trusted as given, so no cross-check should alter them.
        let balance = Balance {
            income: 5000.0,
            outcome: 150.0,
            total: 1234.5,
        };

        let formatted = FormattedBalance::from(balance);

        assert_eq!(formatted.income, format_currency(5000.0));
        assert_eq!(formatted.outcome, format_currency(150.0));
        assert_eq!(formatted.total, format_currency(1234.5));
    }
}
