//! Golden scoring vectors.
//!
//! Each vector pins a receipt to its exact point total and rendered
//! breakdown. A change to any rule or to the line wording shows up here.

use receipt_points_core::{Receipt, RuleEngine};

use crate::fixtures::{corner_market_receipt, target_receipt};

/// A golden scoring vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The receipt to score.
    pub receipt: Receipt,
    /// Expected total points.
    pub expected_points: u64,
    /// Expected breakdown lines, in order.
    pub expected_lines: Vec<&'static str>,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Target reference receipt",
            receipt: target_receipt(),
            expected_points: 28,
            expected_lines: vec![
                "6 points - retailer name has 6 alphanumeric characters",
                "10 points - 5 items (2 pairs @ 5 points each)",
                "3 points - \"Emils Cheese Pizza\" is 18 characters (a multiple of 3)",
                "3 points - \"Klarbrunn 12-PK 12 FL OZ\" is 24 characters (a multiple of 3)",
                "6 points - purchase day is odd",
            ],
        },
        GoldenVector {
            name: "Corner market round total in the afternoon",
            receipt: corner_market_receipt(),
            expected_points: 109,
            expected_lines: vec![
                "14 points - retailer name has 14 alphanumeric characters",
                "50 points - total is a round dollar amount with no cents",
                "25 points - total is a multiple of 0.25",
                "10 points - 4 items (2 pairs @ 5 points each)",
                "10 points - purchase time is between 2:00pm and 4:00pm",
            ],
        },
        GoldenVector {
            name: "Empty receipt",
            receipt: Receipt::default(),
            expected_points: 0,
            expected_lines: vec![
                "0 points - retailer name has 0 alphanumeric characters",
                "Invalid total, 0 points awarded",
                "0 points - 0 items (0 pairs @ 5 points each)",
                "Invalid purchase date, 0 points awarded",
                "Invalid purchase time, 0 points awarded",
            ],
        },
        GoldenVector {
            name: "Odd cents total, blank description, bad price",
            receipt: Receipt::builder("Walgreens")
                .purchase_date("2022-01-02")
                .purchase_time("08:13")
                .total("2.65")
                .item("Pepsi - 12-oz", "1.25")
                .item("Dasani", "1.40")
                .item("   ", "n/a")
                .build(),
            // 9 retailer + 5 pair + ceil(1.40 * 0.2) = 1
            expected_points: 15,
            expected_lines: vec![
                "9 points - retailer name has 9 alphanumeric characters",
                "5 points - 3 items (1 pairs @ 5 points each)",
                "1 points - \"Dasani\" is 6 characters (a multiple of 3)",
                "Invalid price for \"\", 0 points awarded",
            ],
        },
        GoldenVector {
            name: "Quarter multiple total at 15:59",
            receipt: Receipt::builder("7-Eleven")
                .purchase_date("2023-12-31")
                .purchase_time("15:59")
                .total("10.75")
                .item("Big Gulp", "1.99")
                .item("Hot Dog", "2.49")
                .build(),
            // 7 retailer + 25 quarter + 5 pair + 6 odd day + 10 afternoon
            expected_points: 53,
            expected_lines: vec![
                "7 points - retailer name has 7 alphanumeric characters",
                "25 points - total is a multiple of 0.25",
                "5 points - 2 items (1 pairs @ 5 points each)",
                "6 points - purchase day is odd",
                "10 points - purchase time is between 2:00pm and 4:00pm",
            ],
        },
    ]
}

/// Score every vector and return the names of those that disagree.
pub fn verify_all_vectors() -> Vec<&'static str> {
    let engine = RuleEngine::standard();
    all_vectors()
        .into_iter()
        .filter(|v| {
            let score = engine.score(&v.receipt);
            score.points() != v.expected_points || score.lines() != v.expected_lines
        })
        .map(|v| v.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        assert!(verify_all_vectors().is_empty(), "{:?}", verify_all_vectors());
    }

    #[test]
    fn test_vector_lines_sum_to_points() {
        let engine = RuleEngine::standard();
        for vector in all_vectors() {
            let score = engine.score(&vector.receipt);
            let sum: u64 = score.breakdown().iter().map(|e| e.points).sum();
            assert_eq!(sum, vector.expected_points, "{}", vector.name);
        }
    }
}
