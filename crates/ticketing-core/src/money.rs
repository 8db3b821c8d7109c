//! # Money
//!
//! Minor-unit amounts for subtotals, discounts, and totals.
//!
//! ## Amount Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  subtotal_cents ──► Money ──► calculator ──► min(raw, order) ──► Money │
//! │                                   ▲                                     │
//! │                                   │                                     │
//! │                     percent (Decimal) or amount (Money)                 │
//! │                                                                         │
//! │  total = subtotal.saturating_sub(discount)   never below zero          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are whole kobo/cents. There is no float constructor; percentages
//! stay decimals until the calculator's truncating divide.
//!
//! ```rust
//! use ticketing_core::money::Money;
//!
//! let order = Money::from_cents(2500);
//! let discount = Money::from_cents(4000).min(order);
//! assert_eq!(order.saturating_sub(discount), Money::zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// An amount in the currency's smallest unit.
///
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The smaller amount. The calculator caps every discount with this.
    #[inline]
    pub const fn min(self, other: Money) -> Money {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// `self - other`, floored at zero.
    ///
    /// ```rust
    /// use ticketing_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(1000);
    /// assert_eq!(subtotal.saturating_sub(Money::from_cents(250)).cents(), 750);
    /// assert_eq!(subtotal.saturating_sub(Money::from_cents(1500)), Money::zero());
    /// ```
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Money {
        let diff = self.0.saturating_sub(other.0);
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

/// `$10.99` style, for log lines only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
