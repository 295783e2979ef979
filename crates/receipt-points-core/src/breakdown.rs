//! Structured scoring results.
//!
//! Rules emit [`BreakdownEntry`] records rather than text. The total is the
//! sum of entry points, so a [`Score`] can never disagree with its own
//! breakdown.

use std::fmt;

/// The rule group an entry belongs to, in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    Retailer,
    Total,
    Items,
    PurchaseDate,
    PurchaseTime,
}

impl RuleKind {
    pub const fn name(&self) -> &'static str {
        match self {
            RuleKind::Retailer => "retailer",
            RuleKind::Total => "total",
            RuleKind::Items => "items",
            RuleKind::PurchaseDate => "purchase_date",
            RuleKind::PurchaseTime => "purchase_time",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a rule awarded (or withheld) points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// One point per ASCII letter or digit in the retailer name.
    RetailerAlphanumeric { count: usize },
    /// The total could not be parsed; no total sub-check ran.
    InvalidTotal,
    /// The total has no cents.
    RoundDollarTotal,
    /// The total is a multiple of 0.25.
    QuarterMultipleTotal,
    /// Five points per pair of items.
    ItemPairs { items: usize, pairs: usize },
    /// Trimmed description length is a multiple of three.
    DescriptionLength { description: String, length: usize },
    /// Description qualified but the price could not be parsed.
    InvalidItemPrice { description: String },
    /// The purchase date is not a real `YYYY-MM-DD` date.
    InvalidPurchaseDate,
    /// The purchase day of month is odd.
    OddPurchaseDay,
    /// The purchase time is not a real 24-hour `HH:MM` time.
    InvalidPurchaseTime,
    /// Purchased strictly between 14:00 and 16:00.
    AfternoonPurchase,
}

impl Reason {
    /// Whether this entry reports an unparseable field.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Reason::InvalidTotal
                | Reason::InvalidItemPrice { .. }
                | Reason::InvalidPurchaseDate
                | Reason::InvalidPurchaseTime
        )
    }
}

/// One line of a score breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub rule: RuleKind,
    pub points: u64,
    pub reason: Reason,
}

impl BreakdownEntry {
    pub fn new(rule: RuleKind, points: u64, reason: Reason) -> Self {
        Self {
            rule,
            points,
            reason,
        }
    }

    /// An entry that awards nothing.
    pub fn zero(rule: RuleKind, reason: Reason) -> Self {
        Self::new(rule, 0, reason)
    }
}

/// The result of scoring a receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    points: u64,
    breakdown: Vec<BreakdownEntry>,
}

impl Score {
    /// Build a score from entries; the total is derived.
    pub fn from_entries(breakdown: Vec<BreakdownEntry>) -> Self {
        let points = sum_points(breakdown.iter());
        Self { points, breakdown }
    }

    /// Total points across all rules.
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Entries in rule order.
    pub fn breakdown(&self) -> &[BreakdownEntry] {
        &self.breakdown
    }

    /// Points contributed by one rule group.
    pub fn points_for(&self, rule: RuleKind) -> u64 {
        sum_points(self.breakdown.iter().filter(|e| e.rule == rule))
    }

    /// Render the breakdown as human-readable lines.
    pub fn lines(&self) -> Vec<String> {
        crate::format::render_breakdown(&self.breakdown)
    }
}

fn sum_points<'a>(entries: impl Iterator<Item = &'a BreakdownEntry>) -> u64 {
    entries.fold(0u64, |acc, e| acc.saturating_add(e.points))
}
