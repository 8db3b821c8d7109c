//! # Checkout Pricing
//!
//! Prices a ticket order with an optional promo code.
//!
//! ## User Workflow
//! ```text
//! Buyer enters "EARLYBIRD" at checkout, subtotal $100.00
//!      │
//!      ▼
//! validate subtotal + rule          (caller boundary)
//!      │
//!      ▼
//! check_eligibility(order, now)     (window, usage, event, minimum)
//!      │
//!      ▼
//! calculate_discount(rule, order)   (percent XOR amount, capped)
//!      │
//!      ▼
//! PriceQuote { subtotal: 10000, discount: 1500, total: 8500 }
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::discount::calculate_discount;
use crate::error::CoreResult;
use crate::types::{OrderContext, PriceQuote, PromoCode};
use crate::validation::{normalize_promo_code, validate_order_amount_cents, validate_promotion_rule};

/// Prices an order.
///
/// Without a promo code the quote carries a zero discount and no
/// `applied` entry.
pub fn price_order(
    order: &OrderContext,
    promo: Option<&PromoCode>,
    now: DateTime<Utc>,
) -> CoreResult<PriceQuote> {
    validate_order_amount_cents(order.subtotal_cents)?;
    let subtotal = order.subtotal();

    let Some(promo) = promo else {
        return Ok(PriceQuote {
            subtotal_cents: subtotal.cents(),
            discount_cents: 0,
            total_cents: subtotal.cents(),
            promo_code: None,
            applied: None,
        });
    };

    validate_promotion_rule(&promo.rule)?;
    promo.check_eligibility(order, now)?;

    let applied = calculate_discount(&promo.rule, subtotal);
    let total = subtotal.saturating_sub(applied.amount);

    debug!(
        code = %promo.code,
        kind = %applied.kind,
        subtotal = %subtotal,
        discount = %applied.amount,
        total = %total,
        "Priced order with promo code"
    );

    Ok(PriceQuote {
        subtotal_cents: subtotal.cents(),
        discount_cents: applied.amount.cents(),
        total_cents: total.cents(),
        promo_code: Some(normalize_promo_code(&promo.code)),
        applied: Some(applied),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
