//! The rule engine: a fixed pipeline of scoring rules.

use std::fmt;

use crate::breakdown::Score;
use crate::receipt::Receipt;
use crate::rules::{
    ItemsRule, PurchaseDateRule, PurchaseTimeRule, RetailerRule, ScoringRule, TotalRule,
};

/// Applies scoring rules to a receipt, in order, and sums the result.
///
/// The engine holds no mutable state. One instance can score any number of
/// receipts concurrently.
pub struct RuleEngine {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl RuleEngine {
    /// The standard pipeline: retailer, total, items, date, time.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Box::new(RetailerRule),
                Box::new(TotalRule),
                Box::new(ItemsRule),
                Box::new(PurchaseDateRule),
                Box::new(PurchaseTimeRule),
            ],
        }
    }

    /// An engine with a custom rule list, applied in the given order.
    pub fn with_rules(rules: Vec<Box<dyn ScoringRule>>) -> Self {
        Self { rules }
    }

    /// Score a receipt. Never fails.
    pub fn score(&self, receipt: &Receipt) -> Score {
        let mut entries = Vec::new();
        for rule in &self.rules {
            rule.apply(receipt, &mut entries);
        }

        let score = Score::from_entries(entries);
        let invalid = score
            .breakdown()
            .iter()
            .filter(|e| e.reason.is_invalid_input())
            .count();
        tracing::debug!(
            retailer = %receipt.retailer,
            points = score.points(),
            entries = score.breakdown().len(),
            invalid,
            "scored receipt"
        );
        score
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.kind()))
            .finish()
    }
}
