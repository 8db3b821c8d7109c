//! # ticketing-core: Pure Pricing Logic for Ticket Checkout
//!
//! This crate holds the promo-code pricing rules of the ticketing platform
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ticketing Platform Checkout                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Storefront / Mobile app / Organizer dashboard          │   │
//! │  │    Event page ──► Ticket cart ──► Promo code ──► Payment        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ticketing-quote (QuoteService)                  │   │
//! │  │        config, logging, promo catalog lookup                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ ticketing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌──────────────────┐ │   │
//! │  │   │  money   │ │ discount │ │eligibility│ │    validation    │ │   │
//! │  │   │  Money   │ │ percent  │ │  window   │ │  percent range   │ │   │
//! │  │   │          │ │ XOR amt  │ │  usage    │ │  code format     │ │   │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PromotionRule, PromoCode, PriceQuote, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - The discount calculator
//! - [`eligibility`] - Promo code window/usage/scope checks
//! - [`checkout`] - Order pricing that ties the above together
//! - [`validation`] - Caller-boundary validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, the clock is a parameter
//! 2. **Integer Money**: all monetary values are minor units (i64)
//! 3. **Exact Percentages**: percent-off is a `Decimal`, never a float
//! 4. **Presence, Not Truthiness**: `Some(0)` is a value, `None` is absence
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use ticketing_core::discount::compute_discount;
//!
//! // A 0% promotion still takes the percentage branch and yields zero
//! assert_eq!(compute_discount(Some(Decimal::ZERO), Some(500), 10_000), 0);
//!
//! // 33% of 10 cents is 3.3 cents, truncated to 3
//! assert_eq!(compute_discount(Some(Decimal::from(33)), None, 10), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod discount;
pub mod eligibility;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::price_order;
pub use discount::{calculate_discount, compute_discount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for percent-off values accepted at the boundary.
pub const MAX_PERCENT_OFF: i64 = 100;

/// Shortest promo code an organizer can create.
pub const MIN_PROMO_CODE_LEN: usize = 3;

/// Longest promo code an organizer can create.
///
/// ## Business Reason
/// Codes are typed on phones at the door; long codes get mistyped.
pub const MAX_PROMO_CODE_LEN: usize = 32;
