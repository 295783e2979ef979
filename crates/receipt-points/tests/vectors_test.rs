//! Golden vectors through the full service.

mod common;

use common::*;
use receipt_points::core::ReceiptId;
use receipt_points_testkit::all_vectors;

#[tokio::test]
async fn test_golden_vectors_through_service() {
    let service = test_service();

    for vector in all_vectors() {
        let processed = service.process(&vector.receipt).await.unwrap();

        assert_eq!(processed.score.points(), vector.expected_points, "{}", vector.name);
        assert_eq!(processed.score.lines(), vector.expected_lines, "{}", vector.name);
        assert_eq!(
            service.points(&processed.id).await.unwrap(),
            Some(vector.expected_points),
            "{}",
            vector.name
        );
    }

    assert_eq!(service.receipt_count().await.unwrap(), all_vectors().len());
}

#[tokio::test]
async fn test_unknown_id_has_no_points() {
    let service = test_service();
    assert_eq!(service.points(&ReceiptId::new("nope")).await.unwrap(), None);
}
