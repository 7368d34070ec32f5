//! # Expense DTOs
//!
//! Expense records as owned by the backend, plus the payload shape for
//! create/update calls. The `/expenses` endpoints speak camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A name/URL pair referencing a file held by the external object store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// An expense record. Owned and persisted entirely by the backend; the
/// client holds a transient copy fetched per screen visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for an expense. Identity and timestamps are
/// assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_uses_camel_case_on_the_wire() {
        let json = r#"{
            "id": "e-1",
            "userId": "u-1",
            "expenseDate": "2026-07-14",
            "amount": 42.5,
            "category": "groceries",
            "createdAt": "2026-07-14T10:00:00Z",
            "updatedAt": "2026-07-14T10:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.user_id, "u-1");
        assert_eq!(expense.expense_date, NaiveDate::from_ymd_opt(2026, 7, 14).unwrap());
        assert!(expense.merchant.is_none());

        let out = serde_json::to_value(&expense).unwrap();
        assert!(out.get("expenseDate").is_some());
        // None fields are omitted entirely
        assert!(out.get("tags").is_none());
    }
}
