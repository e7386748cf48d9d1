//! Untrusted order submission types as received from the storefront.
//!
//! Field names are camelCase on the wire — the frontend speaks the contract
//! of the original Mirror-It backend. Missing numeric item fields are kept
//! as `Option` here; the leniency defaults (price 0, quantity 1) are applied
//! during processing, not during deserialization.

use serde::{Deserialize, Serialize};

/// Raw customer block of a submission. All fields optional at the wire
/// level; validation decides which are actually required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub landmark: Option<String>,
}

/// A single submitted line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price. Missing → contributes 0 to the subtotal.
    #[serde(default)]
    pub price: Option<f64>,
    /// Quantity. Missing → treated as 1.
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// A raw order submission as posted to `/api/place-order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
    #[serde(default)]
    pub items: Vec<ItemSubmission>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "customer": {"firstName": "Jane", "phone": "0700000000"},
            "items": [{"name": "Mirror", "price": 1000, "quantity": 1}],
            "paymentMethod": "M-Pesa"
        }"#;
        let submission: OrderSubmission = serde_json::from_str(json).unwrap();
        let customer = submission.customer.unwrap();
        assert_eq!(customer.first_name.as_deref(), Some("Jane"));
        assert_eq!(customer.last_name, None);
        assert_eq!(submission.items.len(), 1);
        assert_eq!(submission.payment_method.as_deref(), Some("M-Pesa"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let submission: OrderSubmission = serde_json::from_str("{}").unwrap();
        assert!(submission.customer.is_none());
        assert!(submission.items.is_empty());
        assert!(submission.payment_method.is_none());
    }

    #[test]
    fn item_numeric_fields_are_optional() {
        let item: ItemSubmission = serde_json::from_str(r#"{"name": "Mirror"}"#).unwrap();
        assert_eq!(item.price, None);
        assert_eq!(item.quantity, None);
    }
}
