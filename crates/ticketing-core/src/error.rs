//! # Error Types
//!
//! Domain-specific error types for ticketing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ticketing-core errors (this file)                                     │
//! │  ├── CoreError        - Promo lookup and eligibility failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ticketing-quote errors (separate crate)                               │
//! │  └── QuoteError       - Config, I/O, and request decoding failures     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → QuoteError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount calculator itself never returns an error. Everything here is
//! raised at the boundary, before the calculator runs.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Promo-code business rule violations.
///
/// Each variant maps to a message the checkout page can show next to the
/// promo-code input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No promotion exists for the entered code.
    #[error("Promo code not found: {0}")]
    PromoNotFound(String),

    /// The promotion was switched off by the organizer.
    #[error("Promo code {code} is not active")]
    PromotionInactive { code: String },

    /// The validity window has not opened yet.
    #[error("Promo code {code} is not valid until {starts_at}")]
    PromotionNotStarted { code: String, starts_at: String },

    /// The validity window has closed.
    #[error("Promo code {code} expired at {ends_at}")]
    PromotionExpired { code: String, ends_at: String },

    /// Redemptions have reached the configured limit.
    ///
    /// ## When This Occurs
    /// ```text
    /// max_uses = Some(100), times_used = 100  → UsageLimitReached
    /// max_uses = Some(0),   times_used = 0    → UsageLimitReached
    /// max_uses = None                          → unlimited
    /// ```
    #[error("Promo code {code} has reached its usage limit ({max_uses})")]
    UsageLimitReached { code: String, max_uses: u32 },

    /// The promotion is scoped to a different event.
    #[error("Promo code {code} does not apply to event {event_id}")]
    NotApplicableToEvent { code: String, event_id: String },

    /// Subtotal is below the promotion's minimum order amount.
    #[error("Promo code {code} requires a minimum order of {min_cents} cents, got {subtotal_cents}")]
    MinimumOrderNotMet {
        code: String,
        min_cents: i64,
        subtotal_cents: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID, bad promo code characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
