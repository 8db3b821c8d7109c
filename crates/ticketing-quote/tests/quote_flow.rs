//! End-to-end quote tests: catalog JSON + config TOML → priced quotes.

use chrono::{TimeZone, Utc};
use ticketing_core::{CoreError, DiscountKind};
use ticketing_quote::{PricingConfig, PromoCatalog, QuoteError, QuoteRequest, QuoteService};

const CATALOG: &str = r#"[
    {
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "code": "EARLYBIRD",
        "rule": {"percentOff": "15"},
        "startsAt": "2024-05-01T00:00:00Z",
        "endsAt": "2024-06-15T00:00:00Z"
    },
    {
        "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        "code": "FREE-TRIAL",
        "rule": {"percentOff": 0, "amountOffCents": 500}
    },
    {
        "id": "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
        "code": "TENOFF",
        "rule": {"amountOffCents": 1000},
        "eventId": "evt-afrobeats",
        "minOrderCents": 2000
    },
    {
        "id": "6ba7b812-9dad-11d1-80b4-00c04fd430c8",
        "code": "RETIRED",
        "rule": {"amountOffCents": 1000},
        "maxUses": 0
    },
    {
        "id": "6ba7b814-9dad-11d1-80b4-00c04fd430c8",
        "code": "THIRD",
        "rule": {"percentOff": "33"}
    }
]"#;

fn service() -> QuoteService {
    let config = PricingConfig::from_toml(
        r#"
        [pricing]
        currency = "NGN"
        "#,
    )
    .unwrap();
    QuoteService::new(config, PromoCatalog::from_json(CATALOG).unwrap())
}

fn request(event_id: &str, subtotal_cents: i64, code: &str) -> QuoteRequest {
    QuoteRequest {
        event_id: event_id.to_string(),
        subtotal_cents,
        promo_code: Some(code.to_string()),
    }
}

#[test]
fn test_percentage_code_in_window() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let response = service()
        .quote_at(&request("evt-afrobeats", 10_000, "earlybird"), now)
        .unwrap();

    assert_eq!(response.currency, "NGN");
    assert_eq!(response.quote.discount_cents, 1_500);
    assert_eq!(response.quote.total_cents, 8_500);
}

#[test]
fn test_percentage_code_after_window() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let err = service()
        .quote_at(&request("evt-afrobeats", 10_000, "EARLYBIRD"), now)
        .unwrap_err();
    assert!(matches!(err, QuoteError::Pricing(CoreError::PromotionExpired { .. })));
}

#[test]
fn test_zero_percent_beats_fixed_amount() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let response = service()
        .quote_at(&request("evt-afrobeats", 10_000, "FREE-TRIAL"), now)
        .unwrap();

    let applied = response.quote.applied.unwrap();
    assert_eq!(applied.kind, DiscountKind::Percentage);
    assert_eq!(response.quote.discount_cents, 0);
    assert_eq!(response.quote.total_cents, 10_000);
}

#[test]
fn test_event_scoped_fixed_amount() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let svc = service();

    let response = svc
        .quote_at(&request("evt-afrobeats", 2_000, "TENOFF"), now)
        .unwrap();
    assert_eq!(response.quote.discount_cents, 1_000);
    assert_eq!(response.quote.applied.unwrap().kind, DiscountKind::FixedAmount);

    let err = svc
        .quote_at(&request("evt-comedy", 2_000, "TENOFF"), now)
        .unwrap_err();
    assert!(matches!(err, QuoteError::Pricing(CoreError::NotApplicableToEvent { .. })));

    let err = svc
        .quote_at(&request("evt-afrobeats", 1_999, "TENOFF"), now)
        .unwrap_err();
    assert!(matches!(err, QuoteError::Pricing(CoreError::MinimumOrderNotMet { .. })));
}

#[test]
fn test_zero_max_uses_blocks_redemption() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let err = service()
        .quote_at(&request("evt-afrobeats", 10_000, "RETIRED"), now)
        .unwrap_err();
    assert!(matches!(
        err,
        QuoteError::Pricing(CoreError::UsageLimitReached { max_uses: 0, .. })
    ));
}

#[test]
fn test_truncates_fractional_cents() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let response = service()
        .quote_at(&request("evt-afrobeats", 10, "THIRD"), now)
        .unwrap();
    assert_eq!(response.quote.discount_cents, 3);
    assert_eq!(response.quote.total_cents, 7);
}

#[test]
fn test_request_json_without_code() {
    let request: QuoteRequest =
        serde_json::from_str(r#"{"eventId": "evt-afrobeats", "subtotalCents": 4500}"#).unwrap();
    let response = service().quote(&request).unwrap();
    assert_eq!(response.quote.total_cents, 4_500);
    assert!(response.quote.promo_code.is_none());
}
