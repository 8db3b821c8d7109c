//! # Discount Calculator
//!
//! Turns a [`PromotionRule`] and an order amount into a discount in minor
//! currency units.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  percent_off is Some(p)?  ── yes ──►  trunc(order × p / 100)           │
//! │         │                             (taken for p == 0 too)            │
//! │         no                                                              │
//! │         ▼                                                               │
//! │  amount_off is Some(a)?   ── yes ──►  a                                │
//! │         │                                                               │
//! │         no ──────────────────────►  0                                  │
//! │                                                                         │
//! │  then: discount = min(discount, order)                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Not `if percent_off`?
//! A 0% promotion is a real promotion. Branching on "is the value non-zero"
//! sends it down the amount-off or no-discount path instead. Every branch here
//! matches on `Option` presence only.
//!
//! ## Exact Arithmetic
//! The percentage is split into its integer mantissa and decimal scale and
//! the multiply-then-divide runs in `i128`, so `order × p / 100` is exact up
//! to the final truncating division. Fractional cents are dropped, never
//! rounded up.
//!
//! ## Example
//! ```rust
//! use rust_decimal::Decimal;
//! use ticketing_core::discount::compute_discount;
//!
//! assert_eq!(compute_discount(Some(Decimal::from(15)), None, 10_000), 1_500);
//! assert_eq!(compute_discount(Some(Decimal::ZERO), Some(500), 10_000), 0);
//! assert_eq!(compute_discount(None, Some(1_000), 10_000), 1_000);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use crate::money::Money;
use crate::types::{AppliedDiscount, DiscountMode, PromotionRule};

/// Computes the discount for an order, in minor currency units.
///
/// Inputs are assumed validated (see [`crate::validation`]). The result is
/// always `<= order_amount_cents`.
pub fn compute_discount(
    percent_off: Option<Decimal>,
    amount_off_cents: Option<i64>,
    order_amount_cents: i64,
) -> i64 {
    let rule = PromotionRule {
        percent_off,
        amount_off_cents,
    };
    calculate_discount(&rule, Money::from_cents(order_amount_cents))
        .amount
        .cents()
}

/// Computes the discount and reports which branch produced it.
pub fn calculate_discount(rule: &PromotionRule, order: Money) -> AppliedDiscount {
    let mode = rule.mode();

    let raw = match mode {
        DiscountMode::Percentage(percent) => {
            let amount = percentage_of(order, percent);
            trace!(
                branch = "percentage",
                percent = %percent,
                order_cents = order.cents(),
                discount_cents = amount.cents(),
                "Computed percentage discount"
            );
            amount
        }
        DiscountMode::FixedAmount(amount) => {
            trace!(
                branch = "fixed_amount",
                order_cents = order.cents(),
                discount_cents = amount.cents(),
                "Using fixed amount discount"
            );
            amount
        }
        DiscountMode::None => {
            trace!(branch = "none", order_cents = order.cents(), "No discount configured");
            Money::zero()
        }
    };

    let amount = raw.min(order);
    let clamped = amount != raw;
    if clamped {
        trace!(
            raw_cents = raw.cents(),
            order_cents = order.cents(),
            "Discount capped at order amount"
        );
    }

    AppliedDiscount {
        kind: mode.kind(),
        amount,
        clamped,
    }
}

/// `trunc(order × percent / 100)` without floating point.
///
/// `percent = mantissa / 10^scale`, so the result is
/// `order × mantissa / (100 × 10^scale)` in integers. The divisor tops out at
/// `10^30`, well inside `i128`.
fn percentage_of(order: Money, percent: Decimal) -> Money {
    let percent = percent.normalize();
    let divisor = 100i128 * 10i128.pow(percent.scale());

    match i128::from(order.cents()).checked_mul(percent.mantissa()) {
        Some(numerator) => Money::from_cents(saturate_i64(numerator / divisor)),
        None => decimal_percentage_of(order, percent),
    }
}

/// Fallback for products beyond `i128`, which needs a percentage with more
/// than ~17 significant digits on a near-`i64::MAX` order.
fn decimal_percentage_of(order: Money, percent: Decimal) -> Money {
    Decimal::from(order.cents())
        .checked_mul(percent)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|discount| discount.trunc().to_i64())
        .map(Money::from_cents)
        // Saturate, the caller caps at the order amount.
        .unwrap_or(order)
}

fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Unit Tests
// =============================================================================
