//! The scanned receipt as submitted by a client.
//!
//! Every field is kept as text. Interpreting a field (a decimal total, a
//! calendar date) is the job of the rule that consumes it, so that one bad
//! field costs that rule its points instead of rejecting the whole receipt.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A scanned receipt.
///
/// Missing JSON fields decode to empty values; only structurally malformed
/// JSON is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,
    /// Purchase date, expected as `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, expected as 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Total amount paid, as a decimal string.
    pub total: String,
    /// Purchased items, in receipt order.
    pub items: Vec<Item>,
}

/// A single line item on a receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short product description. May carry surrounding whitespace.
    pub short_description: String,
    /// Item price, as a decimal string.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

impl Receipt {
    /// Start building a receipt for the given retailer.
    pub fn builder(retailer: impl Into<String>) -> ReceiptBuilder {
        ReceiptBuilder::new(retailer)
    }

    /// Decode a receipt from a JSON body.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Builder for [`Receipt`], mostly useful in tests and fixtures.
#[derive(Clone, Debug)]
pub struct ReceiptBuilder {
    receipt: Receipt,
}

impl ReceiptBuilder {
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            receipt: Receipt {
                retailer: retailer.into(),
                ..Receipt::default()
            },
        }
    }

    /// Set the purchase date (`YYYY-MM-DD`).
    pub fn purchase_date(mut self, date: impl Into<String>) -> Self {
        self.receipt.purchase_date = date.into();
        self
    }

    /// Set the purchase time (`HH:MM`).
    pub fn purchase_time(mut self, time: impl Into<String>) -> Self {
        self.receipt.purchase_time = time.into();
        self
    }

    /// Set the total amount.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.receipt.total = total.into();
        self
    }

    /// Append an item.
    pub fn item(mut self, short_description: impl Into<String>, price: impl Into<String>) -> Self {
        self.receipt.items.push(Item::new(short_description, price));
        self
    }

    pub fn build(self) -> Receipt {
        self.receipt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case() {
        let json = br#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "35.35",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]
        }"#;

        let receipt = Receipt::from_json_slice(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.total, "35.35");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt = Receipt::from_json_slice(br#"{"retailer": "Walgreens"}"#).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert!(receipt.total.is_empty());
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Receipt::from_json_slice(b"{\"retailer\": ").is_err());
        assert!(Receipt::from_json_slice(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn test_builder() {
        let receipt = Receipt::builder("Target")
            .purchase_date("2022-01-01")
            .purchase_time("13:01")
            .total("1.25")
            .item("Pepsi - 12-oz", "1.25")
            .build();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Pepsi - 12-oz");
    }
}
