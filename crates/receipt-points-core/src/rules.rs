//! The scoring rules.
//!
//! Each rule looks at one part of a receipt and appends zero or more
//! [`BreakdownEntry`] records. Rules are independent: none reads another's
//! output, and a field one rule cannot parse never affects the others.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::breakdown::{BreakdownEntry, Reason, RuleKind};
use crate::receipt::Receipt;

/// Points for a round-dollar total.
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points per pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Price multiplier for qualifying item descriptions.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
/// Points for an odd purchase day.
pub const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase strictly between 14:00 and 16:00.
pub const AFTERNOON_POINTS: u64 = 10;

/// Exclusive bounds of the afternoon window, as `(hour, minute)`.
const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Exact field layouts; `9` stands for any ASCII digit.
const DATE_SHAPE: &str = "9999-99-99";
const TIME_SHAPE: &str = "99:99";

/// A single scoring rule.
pub trait ScoringRule: Send + Sync {
    /// The rule group this rule reports under.
    fn kind(&self) -> RuleKind;

    /// Score the receipt, appending entries to `out`.
    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>);
}

/// One point per ASCII letter or digit in the retailer name.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetailerRule;

impl ScoringRule for RetailerRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Retailer
    }

    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>) {
        let count = receipt
            .retailer
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .count();

        out.push(BreakdownEntry::new(
            self.kind(),
            count as u64,
            Reason::RetailerAlphanumeric { count },
        ));
    }
}

/// Round-dollar and quarter-multiple bonuses on the total.
///
/// The two checks are evaluated separately, so an integral total earns both.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalRule;

impl ScoringRule for TotalRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Total
    }

    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>) {
        let Some(total) = parse_amount(&receipt.total) else {
            out.push(BreakdownEntry::zero(self.kind(), Reason::InvalidTotal));
            return;
        };

        if total % 1.0 == 0.0 {
            out.push(BreakdownEntry::new(
                self.kind(),
                ROUND_DOLLAR_POINTS,
                Reason::RoundDollarTotal,
            ));
        }

        if is_quarter_multiple(total) {
            out.push(BreakdownEntry::new(
                self.kind(),
                QUARTER_MULTIPLE_POINTS,
                Reason::QuarterMultipleTotal,
            ));
        }
    }
}

/// Item pairing plus the per-item description bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemsRule;

impl ScoringRule for ItemsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Items
    }

    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>) {
        let items = receipt.items.len();
        let pairs = items / 2;
        out.push(BreakdownEntry::new(
            self.kind(),
            pairs as u64 * ITEM_PAIR_POINTS,
            Reason::ItemPairs { items, pairs },
        ));

        for item in &receipt.items {
            let description = item.short_description.trim();
            // Byte length; an empty description counts as a multiple of 3.
            let length = description.len();
            if length % 3 != 0 {
                continue;
            }

            match parse_amount(&item.price) {
                Some(price) => out.push(BreakdownEntry::new(
                    self.kind(),
                    description_bonus(price),
                    Reason::DescriptionLength {
                        description: description.to_string(),
                        length,
                    },
                )),
                None => out.push(BreakdownEntry::zero(
                    self.kind(),
                    Reason::InvalidItemPrice {
                        description: description.to_string(),
                    },
                )),
            }
        }
    }
}

/// Six points for an odd day of month.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseDateRule;

impl ScoringRule for PurchaseDateRule {
    fn kind(&self) -> RuleKind {
        RuleKind::PurchaseDate
    }

    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>) {
        match parse_date(&receipt.purchase_date) {
            Some(date) if date.day() % 2 == 1 => {
                out.push(BreakdownEntry::new(
                    self.kind(),
                    ODD_DAY_POINTS,
                    Reason::OddPurchaseDay,
                ));
            }
            Some(_) => {}
            None => out.push(BreakdownEntry::zero(self.kind(), Reason::InvalidPurchaseDate)),
        }
    }
}

/// Ten points for a purchase strictly inside the afternoon window.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseTimeRule;

impl ScoringRule for PurchaseTimeRule {
    fn kind(&self) -> RuleKind {
        RuleKind::PurchaseTime
    }

    fn apply(&self, receipt: &Receipt, out: &mut Vec<BreakdownEntry>) {
        match parse_time(&receipt.purchase_time) {
            Some(time) => {
                let at = (time.hour(), time.minute());
                if at > AFTERNOON_START && at < AFTERNOON_END {
                    out.push(BreakdownEntry::new(
                        self.kind(),
                        AFTERNOON_POINTS,
                        Reason::AfternoonPurchase,
                    ));
                }
            }
            None => out.push(BreakdownEntry::zero(self.kind(), Reason::InvalidPurchaseTime)),
        }
    }
}

/// `YYYY-MM-DD`, zero-padded, nothing around it.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_shape(s, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// 24-hour `HH:MM`, zero-padded, nothing around it.
fn parse_time(s: &str) -> Option<NaiveTime> {
    if !has_shape(s, TIME_SHAPE) {
        return None;
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
}

/// Whole dollars always qualify. Otherwise cents are truncated, not rounded.
fn is_quarter_multiple(total: f64) -> bool {
    total % 1.0 == 0.0 || (total * 100.0).trunc() % 25.0 == 0.0
}

fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(b, expected)| match expected {
            b'9' => b.is_ascii_digit(),
            _ => b == expected,
        })
}

/// Parse a decimal amount. Non-finite values are rejected.
fn parse_amount(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `ceil(price * 0.2)`, floored at zero for negative prices.
fn description_bonus(price: f64) -> u64 {
    // Float-to-int `as` saturates: negatives become 0.
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64
}
