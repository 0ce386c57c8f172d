//! The server-shaped transaction data model.
//!
//! These types mirror the JSON served by the backend's `GET /transactions`
//! endpoint. They are deserialized as-is; display formatting is added later
//! by the dashboard's transform step.

use serde::Deserialize;
use time::Date;

/// Whether a transaction added money to or removed money from the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a purchase.
    Outcome,
}

impl TransactionType {
    /// The wire/CSS name for the transaction type.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction belongs to, e.g. "Food".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A financial transaction as served by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The backend's identifier for the transaction.
    pub id: String,
    /// A short description of the transaction, e.g. "Salary".
    pub title: String,
    /// The transaction amount. Always non-negative; the direction of the
    /// money flow is given by `transaction_type`, not the sign.
    pub value: f64,
    /// Whether this is income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// The date the transaction was created, e.g. `2024-03-05`.
    pub created_at: Date,
}

/// The account balance aggregated by the backend.
///
/// All three amounts are trusted as given; in particular `total` is never
/// recomputed or cross-checked against `income - outcome` on this side.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    /// The sum of all income transactions.
    pub income: f64,
    /// The sum of all outcome transactions.
    pub outcome: f64,
    /// The overall balance as computed by the backend.
    pub total: f64,
}

/// The body of the backend's `GET /transactions` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    /// The transactions in the order the backend returned them.
    pub transactions: Vec<Transaction>,
    /// The aggregate balance.
    pub balance: Balance,
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use super::{TransactionType, TransactionsResponse};

    #[test]
    fn deserializes_backend_response() {
        let body = r#"{
            "transactions": [{
                "id": "1",
                "title": "Salary",
                "value": 5000,
                "type": "income",
                "category": { "title": "Job" },
                "created_at": "2024-03-05"
            }],
            "balance": { "income": 5000, "outcome": 0, "total": 5000 }
        }"#;

        let response: TransactionsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.transactions.len(), 1);
        let transaction = &response.transactions[0];
        assert_eq!(transaction.id, "1");
        assert_eq!(transaction.title, "Salary");
        assert_eq!(transaction.value, 5000.0);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.category.title, "Job");
        assert_eq!(transaction.created_at, date!(2024 - 03 - 05));

        assert_eq!(response.balance.income, 5000.0);
        assert_eq!(response.balance.outcome, 0.0);
        assert_eq!(response.balance.total, 5000.0);
    }

    #[test]
    fn deserializes_outcome_type() {
        let body = r#"{
            "id": "2",
            "title": "Groceries",
            "value": 150.5,
            "type": "outcome",
            "category": { "title": "Food" },
            "created_at": "2024-03-06"
        }"#;

        let transaction: super::Transaction = serde_json::from_str(body).unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Outcome);
        assert_eq!(transaction.value, 150.5);
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let body = r#"{
            "id": "3",
            "title": "Mystery",
            "value": 1,
            "type": "transfer",
            "category": { "title": "Other" },
            "created_at": "2024-03-06"
        }"#;

        let result: Result<super::Transaction, _> = serde_json::from_str(body);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_balance() {
        let body = r#"{ "transactions": [] }"#;

        let result: Result<TransactionsResponse, _> = serde_json::from_str(body);

        assert!(result.is_err());
    }
}
