//! Human-readable rendering of breakdown entries.

use crate::breakdown::{BreakdownEntry, Reason};

/// Render one entry as a breakdown line.
pub fn render_entry(entry: &BreakdownEntry) -> String {
    let points = entry.points;
    match &entry.reason {
        Reason::RetailerAlphanumeric { count } => {
            format!("{points} points - retailer name has {count} alphanumeric characters")
        }
        Reason::InvalidTotal => "Invalid total, 0 points awarded".to_string(),
        Reason::RoundDollarTotal => {
            format!("{points} points - total is a round dollar amount with no cents")
        }
        Reason::QuarterMultipleTotal => format!("{points} points - total is a multiple of 0.25"),
        Reason::ItemPairs { items, pairs } => {
            format!("{points} points - {items} items ({pairs} pairs @ 5 points each)")
        }
        Reason::DescriptionLength {
            description,
            length,
        } => format!("{points} points - \"{description}\" is {length} characters (a multiple of 3)"),
        Reason::InvalidItemPrice { description } => {
            format!("Invalid price for \"{description}\", 0 points awarded")
        }
        Reason::InvalidPurchaseDate => "Invalid purchase date, 0 points awarded".to_string(),
        Reason::OddPurchaseDay => format!("{points} points - purchase day is odd"),
        Reason::InvalidPurchaseTime => "Invalid purchase time, 0 points awarded".to_string(),
        Reason::AfternoonPurchase => {
            format!("{points} points - purchase time is between 2:00pm and 4:00pm")
        }
    }
}

/// Render all entries, preserving order.
pub fn render_breakdown(entries: &[BreakdownEntry]) -> Vec<String> {
    entries.iter().map(render_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::RuleKind;

    #[test]
    fn test_render_retailer() {
        let entry = BreakdownEntry::new(
            RuleKind::Retailer,
            14,
            Reason::RetailerAlphanumeric { count: 14 },
        );
        assert_eq!(
            render_entry(&entry),
            "14 points - retailer name has 14 alphanumeric characters"
        );
    }

    #[test]
    fn test_render_items() {
        let pairs = BreakdownEntry::new(RuleKind::Items, 10, Reason::ItemPairs { items: 5, pairs: 2 });
        assert_eq!(render_entry(&pairs), "10 points - 5 items (2 pairs @ 5 points each)");

        let desc = BreakdownEntry::new(
            RuleKind::Items,
            3,
            Reason::DescriptionLength {
                description: "Emils Cheese Pizza".into(),
                length: 18,
            },
        );
        assert_eq!(
            render_entry(&desc),
            "3 points - \"Emils Cheese Pizza\" is 18 characters (a multiple of 3)"
        );

        let bad = BreakdownEntry::zero(
            RuleKind::Items,
            Reason::InvalidItemPrice {
                description: "Gum".into(),
            },
        );
        assert_eq!(render_entry(&bad), "Invalid price for \"Gum\", 0 points awarded");
    }

    #[test]
    fn test_render_invalid_fields() {
        let lines = render_breakdown(&[
            BreakdownEntry::zero(RuleKind::Total, Reason::InvalidTotal),
            BreakdownEntry::zero(RuleKind::PurchaseDate, Reason::InvalidPurchaseDate),
            BreakdownEntry::zero(RuleKind::PurchaseTime, Reason::InvalidPurchaseTime),
        ]);
        assert_eq!(
            lines,
            vec![
                "Invalid total, 0 points awarded",
                "Invalid purchase date, 0 points awarded",
                "Invalid purchase time, 0 points awarded",
            ]
        );
    }
}
