//! # Validation Module
//!
//! Caller-boundary validation for promotions and orders.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Organizer dashboard / API request                            │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── percent_off in [0, 100]                                           │
//! │  ├── amount_off_cents >= 0                                             │
//! │  └── order subtotal >= 0                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Discount calculator                                          │
//! │  └── Assumes validated input, only caps discount at the order amount   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Out-of-range percentages are rejected here, never silently corrected by
//! the calculator.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use ticketing_core::validation::{validate_percent_off, validate_promo_code};
//!
//! assert!(validate_percent_off(Decimal::ZERO).is_ok());
//! assert!(validate_percent_off(Decimal::from(101)).is_err());
//! assert!(validate_promo_code("EARLYBIRD-24").is_ok());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::PromotionRule;
use crate::{MAX_PERCENT_OFF, MAX_PROMO_CODE_LEN, MIN_PROMO_CODE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Promotion Rule Validators
// =============================================================================

/// Validates a percentage discount.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
/// - Zero is allowed (a real 0% promotion)
/// - Any decimal precision is allowed
pub fn validate_percent_off(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::from(MAX_PERCENT_OFF) {
        return Err(ValidationError::OutOfRange {
            field: "percentOff".to_string(),
            min: 0,
            max: MAX_PERCENT_OFF,
        });
    }

    Ok(())
}

/// Validates a fixed discount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_amount_off_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "amountOffCents".to_string(),
        });
    }

    Ok(())
}

/// Validates an order subtotal in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free tickets still go through checkout)
pub fn validate_order_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "subtotalCents".to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a rule that is present.
///
/// A rule with neither field set is valid: it grants no discount.
pub fn validate_promotion_rule(rule: &PromotionRule) -> ValidationResult<()> {
    if let Some(percent) = rule.percent_off {
        validate_percent_off(percent)?;
    }
    if let Some(cents) = rule.amount_off_cents {
        validate_amount_off_cents(cents)?;
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a promo code as typed by an organizer or buyer.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Between 3 and 32 characters
/// - Only letters, numbers, hyphens, underscores
pub fn validate_promo_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() < MIN_PROMO_CODE_LEN {
        return Err(ValidationError::TooShort {
            field: "code".to_string(),
            min: MIN_PROMO_CODE_LEN,
        });
    }

    if code.len() > MAX_PROMO_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_PROMO_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Canonical form used for lookups: trimmed, ASCII uppercase.
///
/// ## Example
/// ```rust
/// use ticketing_core::validation::normalize_promo_code;
///
/// assert_eq!(normalize_promo_code("  earlyBird "), "EARLYBIRD");
/// ```
pub fn normalize_promo_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Validates a UUID string format.
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
