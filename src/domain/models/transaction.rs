/// Domain models for transactions and per-category aggregates.
///
/// Transactions are immutable once fetched. Amounts are signed decimals
/// (negative = debit) and never floats.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running balance snapshot attached to a transaction (pass-through)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    pub amount: Decimal,

    #[serde(default)]
    pub currency: Option<String>,
}

/// Provider-side metadata attached to a transaction (pass-through)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMeta {
    #[serde(default)]
    pub bank_transaction_id: Option<String>,

    #[serde(default)]
    pub provider_transaction_category: Option<String>,
}

/// A single bank transaction as returned by the data API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque transaction identifier
    pub transaction_id: String,

    /// UTC instant the transaction was booked
    pub timestamp: DateTime<Utc>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Signed amount; negative values are debits
    pub amount: Decimal,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,

    /// DEBIT or CREDIT
    #[serde(default)]
    pub transaction_type: Option<String>,

    /// Provider classification used for aggregation; may be absent
    #[serde(default)]
    pub transaction_category: Option<String>,

    /// Hierarchical classification labels
    #[serde(default)]
    pub transaction_classification: Vec<String>,

    /// Merchant name, when the provider resolves one
    #[serde(default)]
    pub merchant_name: Option<String>,

    /// Balance after this transaction
    #[serde(default)]
    pub running_balance: Option<RunningBalance>,

    /// Provider-side metadata
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

impl Transaction {
    /// Category key used for aggregation: absent and empty categories fold
    /// into the same unclassified group.
    pub fn category_key(&self) -> Option<&str> {
        match self.transaction_category.as_deref() {
            Some("") | None => None,
            other => other,
        }
    }
}

/// Sum of in-window transaction amounts for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label; `None` is the unclassified group
    #[serde(rename = "transaction_category")]
    pub category: Option<String>,

    /// Decimal sum of matching transaction amounts
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_deserializes_full_wire_shape() {
        let json = r#"{
            "transaction_id": "txn-001",
            "timestamp": "2024-03-01T10:30:00Z",
            "description": "COFFEE SHOP",
            "amount": -3.50,
            "currency": "GBP",
            "transaction_type": "DEBIT",
            "transaction_category": "PURCHASE",
            "transaction_classification": ["Food & Dining", "Coffee shops"],
            "merchant_name": "Coffee Shop",
            "running_balance": {"amount": 120.75, "currency": "GBP"},
            "meta": {
                "bank_transaction_id": "9882ks-00js",
                "provider_transaction_category": "DEB"
            }
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.transaction_id, "txn-001");
        assert_eq!(txn.amount, Decimal::from_str("-3.50").unwrap());
        assert_eq!(txn.transaction_classification.len(), 2);
        assert_eq!(
            txn.running_balance.unwrap().amount,
            Decimal::from_str("120.75").unwrap()
        );
        assert_eq!(
            txn.meta.unwrap().bank_transaction_id.as_deref(),
            Some("9882ks-00js")
        );
    }

    #[test]
    fn test_category_key_folds_empty_and_missing() {
        let mut txn: Transaction = serde_json::from_str(
            r#"{"transaction_id": "t", "timestamp": "2024-03-01T00:00:00Z", "amount": 1}"#,
        )
        .unwrap();
        assert_eq!(txn.category_key(), None);

        txn.transaction_category = Some(String::new());
        assert_eq!(txn.category_key(), None);

        txn.transaction_category = Some("BILLS".to_string());
        assert_eq!(txn.category_key(), Some("BILLS"));
    }

    #[test]
    fn test_category_total_serializes_wire_field_name() {
        let total = CategoryTotal {
            category: Some("FOOD".to_string()),
            total: Decimal::from_str("-15").unwrap(),
        };
        let json = serde_json::to_value(&total).unwrap();
        assert_eq!(json["transaction_category"], "FOOD");
        assert_eq!(json["total"], serde_json::json!("-15"));
    }
}
