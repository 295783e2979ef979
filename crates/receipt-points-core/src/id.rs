//! Receipt identifiers and where they come from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a scored receipt.
///
/// The store treats it as an arbitrary unique string. Production ids are
/// random UUIDs, but sample and test records use short numeric ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReceiptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ReceiptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh receipt identifiers.
///
/// Called once per scored receipt, before the score is stored.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_unique() {
        let gen = UuidGenerator;
        let a = gen.next_id();
        let b = gen.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_receipt_id_display() {
        let id = ReceiptId::new("abc-123");
        assert_eq!(format!("{}", id), "abc-123");
        assert_eq!(format!("{:?}", id), "ReceiptId(abc-123)");
    }

    #[test]
    fn test_receipt_id_serializes_as_string() {
        let id = ReceiptId::from("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }
}
