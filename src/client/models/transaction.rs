//! Transaction models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringPeriod {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringPeriod {
    pub const ALL: [RecurringPeriod; 5] = [
        RecurringPeriod::None,
        RecurringPeriod::Daily,
        RecurringPeriod::Weekly,
        RecurringPeriod::Monthly,
        RecurringPeriod::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringPeriod::None => "none",
            RecurringPeriod::Daily => "daily",
            RecurringPeriod::Weekly => "weekly",
            RecurringPeriod::Monthly => "monthly",
            RecurringPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RecurringPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurringPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown period '{}' (expected one of: none, daily, weekly, monthly, yearly)",
                    s
                )
            })
    }
}

/// A transaction as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    /// Amount in currency units; always positive, direction comes from `is_expense`
    pub amount: Decimal,

    #[serde(default)]
    pub is_expense: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(
        serialize_with = "serialize_calendar_date",
        deserialize_with = "deserialize_calendar_date"
    )]
    pub date: NaiveDate,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default)]
    pub recurring_period: RecurringPeriod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Transaction {
    /// Amount with sign applied: negative for expenses
    pub fn signed_amount(&self) -> Decimal {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }

    pub fn has_receipt(&self) -> bool {
        self.receipt_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Validated input for a new transaction
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub is_expense: bool,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub is_recurring: bool,
    pub recurring_period: RecurringPeriod,
    pub receipt_url: Option<String>,
    pub location: Option<String>,
}

/// Body of `POST transactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Decimal amount as a string
    pub amount: String,
    pub is_expense: bool,
    pub description: String,
    pub category: String,
    /// Midnight UTC of the transaction date, `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub date: String,
    pub is_recurring: bool,
    pub recurring_period: RecurringPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<&NewTransaction> for CreateTransactionRequest {
    fn from(tx: &NewTransaction) -> Self {
        Self {
            amount: tx.amount.normalize().to_string(),
            is_expense: tx.is_expense,
            description: tx.description.clone(),
            category: tx.category.clone(),
            date: tx.date.format("%Y-%m-%dT00:00:00.000Z").to_string(),
            is_recurring: tx.is_recurring,
            recurring_period: if tx.is_recurring {
                tx.recurring_period
            } else {
                RecurringPeriod::None
            },
            receipt_url: tx.receipt_url.clone(),
            location: tx.location.clone(),
        }
    }
}

/// Response of `POST transactions/upload`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceiptResponse {
    #[serde(default, rename = "secure_url")]
    pub secure_url: Option<String>,
}

fn serialize_calendar_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.format("%Y-%m-%d").to_string())
}

/// Accept a bare date or a full ISO timestamp; only the calendar day is kept
fn deserialize_calendar_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(d)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
        serde::de::Error::custom(format!("invalid transaction date '{}': {}", raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_tx() -> NewTransaction {
        NewTransaction {
            amount: Decimal::from_str("199.50").unwrap(),
            is_expense: true,
            description: "Streaming".to_string(),
            category: "Suscripciones".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            is_recurring: false,
            recurring_period: RecurringPeriod::Monthly,
            receipt_url: None,
            location: Some("CDMX".to_string()),
        }
    }

    #[test]
    fn test_recurring_period_parse() {
        assert_eq!(
            "Monthly".parse::<RecurringPeriod>().unwrap(),
            RecurringPeriod::Monthly
        );
        assert_eq!(
            " yearly ".parse::<RecurringPeriod>().unwrap(),
            RecurringPeriod::Yearly
        );
        assert!("fortnightly".parse::<RecurringPeriod>().is_err());
    }

    #[test]
    fn test_recurring_period_wire_format() {
        assert_eq!(
            serde_json::to_string(&RecurringPeriod::Weekly).unwrap(),
            "\"weekly\""
        );
    }

    #[test]
    fn test_transaction_from_server_json() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "t1",
                "amount": 1250.5,
                "isExpense": false,
                "description": "Salary",
                "category": "Sueldo",
                "date": "2025-01-15T06:00:00.000Z",
                "isRecurring": true,
                "recurringPeriod": "monthly",
                "receiptUrl": null,
                "location": null
            }"#,
        )
        .unwrap();

        assert_eq!(tx.amount, Decimal::from_str("1250.5").unwrap());
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(tx.recurring_period, RecurringPeriod::Monthly);
        assert!(!tx.has_receipt());
        assert_eq!(tx.signed_amount(), Decimal::from_str("1250.5").unwrap());
    }

    #[test]
    fn test_transaction_amount_as_string_and_bare_date() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":"t2","amount":"80.00","isExpense":true,"description":"Taxi","category":"Transporte","date":"2025-02-01","receiptUrl":"https://cdn/r.jpg"}"#,
        )
        .unwrap();

        assert_eq!(tx.signed_amount(), Decimal::from_str("-80.00").unwrap());
        assert_eq!(tx.recurring_period, RecurringPeriod::None);
        assert!(tx.has_receipt());
    }

    #[test]
    fn test_transaction_rejects_bad_date() {
        let result: Result<Transaction, _> = serde_json::from_str(
            r#"{"id":"t3","amount":1,"date":"15/01/2025"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_from_new_transaction() {
        let req = CreateTransactionRequest::from(&new_tx());

        assert_eq!(req.amount, "199.5");
        assert_eq!(req.date, "2025-03-09T00:00:00.000Z");
        // Not recurring, so the period is dropped
        assert_eq!(req.recurring_period, RecurringPeriod::None);

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["isExpense"], true);
        assert_eq!(body["recurringPeriod"], "none");
        assert_eq!(body["location"], "CDMX");
        assert!(body.get("receiptUrl").is_none());
    }

    #[test]
    fn test_create_request_keeps_period_when_recurring() {
        let mut tx = new_tx();
        tx.is_recurring = true;

        let req = CreateTransactionRequest::from(&tx);
        assert_eq!(req.recurring_period, RecurringPeriod::Monthly);
    }
}
