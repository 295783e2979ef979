//! Proptest generators for property-based testing.

use proptest::prelude::*;

use receipt_points_core::{Item, Receipt};

/// Generate a retailer name, including punctuation and non-ASCII letters.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 &'\\-.éü]{0,32}".prop_map(String::from)
}

/// Generate a well-formed amount with two decimals.
pub fn amount() -> impl Strategy<Value = String> {
    (0u32..10_000, 0u32..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// Generate an amount, occasionally malformed.
pub fn maybe_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => amount(),
        1 => Just(String::new()),
        1 => "[a-z$,]{1,6}".prop_map(String::from),
    ]
}

/// Generate a valid `YYYY-MM-DD` date.
pub fn purchase_date() -> impl Strategy<Value = String> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a valid `HH:MM` time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Generate a line item.
pub fn item() -> impl Strategy<Value = Item> {
    ("[ ]{0,3}[A-Za-z0-9 -]{0,24}[ ]{0,3}", maybe_amount())
        .prop_map(|(description, price)| Item::new(description, price))
}

/// Generate a list of items.
pub fn items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item(), 0..=max_len)
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            prop_oneof![9 => purchase_date(), 1 => "[0-9/-]{0,10}".prop_map(String::from)],
            prop_oneof![9 => purchase_time(), 1 => "[0-9:apm]{0,5}".prop_map(String::from)],
            maybe_amount(),
            items(12),
        )
            .prop_map(|(retailer, purchase_date, purchase_time, total, items)| ReceiptParams {
                retailer,
                purchase_date,
                purchase_time,
                total,
                items,
            })
            .boxed()
    }
}

/// Build a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    Receipt {
        retailer: params.retailer.clone(),
        purchase_date: params.purchase_date.clone(),
        purchase_time: params.purchase_time.clone(),
        total: params.total.clone(),
        items: params.items.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::{Reason, RuleEngine, RuleKind};

    fn engine() -> RuleEngine {
        RuleEngine::standard()
    }

    proptest! {
        #[test]
        fn test_scoring_deterministic(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let engine = engine();

            prop_assert_eq!(engine.score(&receipt), engine.score(&receipt));
        }

        #[test]
        fn test_points_equal_breakdown_sum(params: ReceiptParams) {
            let score = engine().score(&receipt_from_params(&params));
            let sum: u64 = score.breakdown().iter().map(|e| e.points).sum();

            prop_assert_eq!(score.points(), sum);
        }

        #[test]
        fn test_breakdown_in_rule_order(params: ReceiptParams) {
            let score = engine().score(&receipt_from_params(&params));
            let kinds: Vec<RuleKind> = score.breakdown().iter().map(|e| e.rule).collect();

            prop_assert!(kinds.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn test_retailer_points_are_alphanumeric_count(name in "\\PC{0,40}") {
            let receipt = Receipt::builder(name.clone()).build();
            let expected = name.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64;

            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Retailer), expected);
        }

        #[test]
        fn test_integral_total_earns_75(dollars in 0u32..1_000_000) {
            let receipt = Receipt::builder("").total(format!("{dollars}.00")).build();
            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Total), 75);

            let receipt = Receipt::builder("").total(dollars.to_string()).build();
            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Total), 75);
        }

        #[test]
        fn test_huge_integral_total_earns_75(exponent in 15i32..=300) {
            let receipt = Receipt::builder("").total(format!("1e{exponent}")).build();
            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Total), 75);
        }

        #[test]
        fn test_fractional_quarter_total_earns_25(dollars in 0u32..1_000_000, quarter in 1u32..=3) {
            let total = format!("{dollars}.{:02}", quarter * 25);
            let receipt = Receipt::builder("").total(total).build();

            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Total), 25);
        }

        #[test]
        fn test_other_cents_earn_nothing(
            dollars in 0u32..100_000,
            cents in (1u32..100).prop_filter("not near a quarter", |c| c % 25 > 1),
        ) {
            let total = format!("{dollars}.{cents:02}");
            let receipt = Receipt::builder("").total(total).build();

            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::Total), 0);
        }

        #[test]
        fn test_pairing_is_five_per_pair(n in 0usize..40) {
            let receipt = Receipt {
                items: vec![Item::new("ab", "1.00"); n],
                ..Receipt::default()
            };
            let score = engine().score(&receipt);
            let pairing = score
                .breakdown()
                .iter()
                .find(|e| matches!(e.reason, Reason::ItemPairs { .. }))
                .map(|e| e.points);

            prop_assert_eq!(pairing, Some((n / 2) as u64 * 5));
        }

        #[test]
        fn test_odd_day_earns_six(date in purchase_date()) {
            let day: u32 = date[8..].parse().unwrap();
            let receipt = Receipt::builder("").purchase_date(date).build();
            let expected = if day % 2 == 1 { 6 } else { 0 };

            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::PurchaseDate), expected);
        }

        #[test]
        fn test_afternoon_window(time in purchase_time()) {
            let minutes: u32 = time[..2].parse::<u32>().unwrap() * 60 + time[3..].parse::<u32>().unwrap();
            let receipt = Receipt::builder("").purchase_time(time).build();
            let expected = if minutes > 14 * 60 && minutes < 16 * 60 { 10 } else { 0 };

            prop_assert_eq!(engine().score(&receipt).points_for(RuleKind::PurchaseTime), expected);
        }
    }
}
