//! End-to-end tests for the comparison, pricing and extraction flows.
//!
//! The completion service is replaced by `MockChatClient`, so these run
//! without network access.

use std::sync::Arc;

use carmatch::connector::adapter::{SAMPLE_COMPARISON, SAMPLE_PRICE_ESTIMATE};
use carmatch::domain::parsing::{ESTIMATE_PLACEHOLDER, RECOMMENDATION_FALLBACK};
use carmatch::{
    ChatRole, CompareRequest, CompareVehiclesUseCase, EstimatePriceUseCase,
    ExtractDetailsUseCase, MileageUnit, MockChatClient, PriceEstimateRequest, VehicleDescriptor,
};

fn civic() -> VehicleDescriptor {
    VehicleDescriptor::new("2017 Honda Civic, one owner, full service history")
        .with_make("Honda")
        .with_model("Civic")
        .with_year("2017")
        .with_mileage("48000", MileageUnit::Miles)
}

#[tokio::test]
async fn test_estimate_parses_labeled_reply() {
    let client = Arc::new(MockChatClient::pricing());
    let use_case = EstimatePriceUseCase::new(client.clone());

    let result = use_case
        .execute(PriceEstimateRequest { car_details: civic() })
        .await
        .expect("estimate should succeed");

    assert_eq!(result.estimated_price, "$15,500");
    assert_eq!(result.price_range.min, 14200.0);
    assert_eq!(result.price_range.max, 16800.0);
    assert_eq!(result.price_range.currency_detected.as_deref(), Some("$"));
    assert!(result.factors.contains_key("Mileage"));
    assert!(result.factors.contains_key("Condition"));
    assert_eq!(result.market_analysis, SAMPLE_PRICE_ESTIMATE);

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].role, ChatRole::System);
    assert!(calls[0][1].content.contains("Mileage: 48000 miles"));
}

#[tokio::test]
async fn test_estimate_survives_completion_failure() {
    let use_case = EstimatePriceUseCase::new(Arc::new(MockChatClient::failing("quota exceeded")));

    let result = use_case
        .execute(PriceEstimateRequest { car_details: civic() })
        .await
        .expect("upstream failure must not be an error");

    assert_eq!(result.price_range.min, 0.0);
    assert_eq!(result.price_range.max, 0.0);
    let note = result.factors.get("error").expect("error note in factors");
    assert!(note.contains("quota exceeded"));
}

#[tokio::test]
async fn test_estimate_with_unpriced_reply_degrades() {
    let reply = "Hard to say without seeing the car in person.";
    let use_case = EstimatePriceUseCase::new(Arc::new(MockChatClient::with_reply(reply)));

    let result = use_case
        .execute(PriceEstimateRequest { car_details: civic() })
        .await
        .unwrap();

    assert_eq!(result.estimated_price, ESTIMATE_PLACEHOLDER);
    assert!(!result.price_range.is_available());
    assert_eq!(result.price_range.min_display.as_deref(), Some("Not available"));
    assert!(result.factors.contains_key("Analysis"));
}

#[tokio::test]
async fn test_estimate_rejects_blank_description() {
    let client = Arc::new(MockChatClient::pricing());
    let use_case = EstimatePriceUseCase::new(client.clone());

    let err = use_case
        .execute(PriceEstimateRequest {
            car_details: VehicleDescriptor::new("   "),
        })
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(client.calls().is_empty(), "model must not be called");
}

#[tokio::test]
async fn test_compare_extracts_recommendation() {
    let use_case = CompareVehiclesUseCase::new(Arc::new(MockChatClient::comparison()));

    let result = use_case
        .execute(CompareRequest {
            car1: civic(),
            car2: VehicleDescriptor::new("2016 Mazda 3 hatchback").with_make("Mazda"),
        })
        .await
        .unwrap();

    assert_eq!(result.comparison, SAMPLE_COMPARISON);
    assert!(result.recommendation.starts_with("- Commuting: Car 2"));
    assert_eq!(result.summary.len(), 4);
}

#[tokio::test]
async fn test_compare_without_marker_uses_fallback() {
    let reply = "Car 1 is quicker. Car 2 is cheaper to run.";
    let use_case = CompareVehiclesUseCase::new(Arc::new(MockChatClient::with_reply(reply)));

    let result = use_case
        .execute(CompareRequest {
            car1: civic(),
            car2: civic(),
        })
        .await
        .unwrap();

    assert_eq!(result.recommendation, RECOMMENDATION_FALLBACK);
}

#[tokio::test]
async fn test_compare_failure_keeps_response_shape() {
    let use_case = CompareVehiclesUseCase::new(Arc::new(MockChatClient::failing("timeout")));

    let result = use_case
        .execute(CompareRequest {
            car1: civic(),
            car2: civic(),
        })
        .await
        .unwrap();

    assert!(result.comparison.starts_with("Error occurred during comparison"));
    assert!(result.summary.is_empty());
}

#[tokio::test]
async fn test_extract_details_parses_fields() {
    let reply = "Make: Subaru\nModel: Outback\nYear: 2015\nTransmission: Not specified";
    let use_case = ExtractDetailsUseCase::new(Arc::new(MockChatClient::with_reply(reply)));

    let details = use_case.execute("Subaru Outback 2015 AWD").await.unwrap();

    assert_eq!(details.details.get("make").map(String::as_str), Some("Subaru"));
    assert_eq!(details.details.get("year").map(String::as_str), Some("2015"));
    assert!(!details.details.contains_key("transmission"));
}

#[tokio::test]
async fn test_extract_details_failure_echoes_input() {
    let use_case = ExtractDetailsUseCase::new(Arc::new(MockChatClient::failing("down")));

    let details = use_case.execute("Subaru Outback 2015 AWD").await.unwrap();

    assert_eq!(
        details.details.get("raw_description").map(String::as_str),
        Some("Subaru Outback 2015 AWD")
    );
}
