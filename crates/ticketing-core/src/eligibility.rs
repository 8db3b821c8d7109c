//! # Promo Code Eligibility
//!
//! Decides whether a promo code may be applied to an order. Runs before the
//! discount calculator; the calculator never sees an ineligible code.
//!
//! ## Check Order
//! ```text
//! is_active? ──► starts_at <= now? ──► now < ends_at? ──► uses left?
//!                                                              │
//!                         min order met? ◄── event matches? ◄──┘
//! ```
//!
//! The first failing check is reported. Optional limits follow the same
//! presence rule as discounts: `max_uses = Some(0)` blocks every redemption,
//! `min_order_cents = Some(0)` admits every order.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{OrderContext, PromoCode};

impl PromoCode {
    /// Checks the code against an order at time `now`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use ticketing_core::{OrderContext, PromoCode, PromotionRule};
    ///
    /// let promo = PromoCode {
    ///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
    ///     code: "VIP".to_string(),
    ///     rule: PromotionRule::amount(500),
    ///     is_active: true,
    ///     starts_at: None,
    ///     ends_at: None,
    ///     max_uses: Some(0),
    ///     times_used: 0,
    ///     min_order_cents: None,
    ///     event_id: None,
    /// };
    /// let order = OrderContext { event_id: "evt-1".to_string(), subtotal_cents: 5000 };
    ///
    /// // A zero usage limit is a limit, not "unlimited"
    /// assert!(promo.check_eligibility(&order, Utc::now()).is_err());
    /// ```
    pub fn check_eligibility(&self, order: &OrderContext, now: DateTime<Utc>) -> CoreResult<()> {
        let result = self.first_failed_check(order, now);
        if let Err(ref err) = result {
            debug!(code = %self.code, event_id = %order.event_id, reason = %err, "Promo code ineligible");
        }
        result
    }

    fn first_failed_check(&self, order: &OrderContext, now: DateTime<Utc>) -> CoreResult<()> {
        if !self.is_active {
            return Err(CoreError::PromotionInactive {
                code: self.code.clone(),
            });
        }

        if let Some(starts_at) = self.starts_at {
            if now < starts_at {
                return Err(CoreError::PromotionNotStarted {
                    code: self.code.clone(),
                    starts_at: starts_at.to_rfc3339(),
                });
            }
        }

        if let Some(ends_at) = self.ends_at {
            if now >= ends_at {
                return Err(CoreError::PromotionExpired {
                    code: self.code.clone(),
                    ends_at: ends_at.to_rfc3339(),
                });
            }
        }

        if let Some(max_uses) = self.max_uses {
            if self.times_used >= max_uses {
                return Err(CoreError::UsageLimitReached {
                    code: self.code.clone(),
                    max_uses,
                });
            }
        }

        if let Some(event_id) = &self.event_id {
            if event_id != &order.event_id {
                return Err(CoreError::NotApplicableToEvent {
                    code: self.code.clone(),
                    event_id: order.event_id.clone(),
                });
            }
        }

        if let Some(min_cents) = self.min_order_cents {
            if order.subtotal_cents < min_cents {
                return Err(CoreError::MinimumOrderNotMet {
                    code: self.code.clone(),
                    min_cents,
                    subtotal_cents: order.subtotal_cents,
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
