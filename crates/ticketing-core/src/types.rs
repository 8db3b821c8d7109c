//! # Domain Types
//!
//! Core domain types for promo-code pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PromoCode     │   │  OrderContext   │   │   PriceQuote    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  event_id       │   │  subtotal_cents │       │
//! │  │  code           │   │  subtotal_cents │   │  discount_cents │       │
//! │  │  rule ──────┐   │   └─────────────────┘   │  total_cents    │       │
//! │  │  window     │   │                         │  applied ───┐   │       │
//! │  │  usage      │   │                         └─────────────┼───┘       │
//! │  └─────────────┼───┘                                       │           │
//! │                ▼                                           ▼           │
//! │  ┌─────────────────┐                         ┌─────────────────┐       │
//! │  │  PromotionRule  │ ──► DiscountMode ──►    │ AppliedDiscount │       │
//! │  │  percent_off?   │     Percentage(p)       │  kind           │       │
//! │  │  amount_off?    │     FixedAmount(m)      │  amount         │       │
//! │  └─────────────────┘     None                │  clamped        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Presence, Not Truthiness
//! Optional numeric fields are `Option`s. `Some(0)` is a real value and is
//! never collapsed into `None`. On the wire, a JSON `null` and a missing key
//! both decode to `None`; a JSON `0` decodes to `Some(0)`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Promotion Rule
// =============================================================================

/// The discount a promotion grants: percentage-off or amount-off.
///
/// If both are present, `percent_off` takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRule {
    /// Percentage of the subtotal, `0..=100`, exact decimal.
    ///
    /// Accepts `"12.5"` or `12.5`; numbers are parsed from their JSON text.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[ts(type = "number | string | null")]
    pub percent_off: Option<Decimal>,

    /// Fixed discount in minor currency units.
    #[serde(default)]
    #[ts(type = "number | null")]
    pub amount_off_cents: Option<i64>,
}

impl PromotionRule {
    /// A percentage-off rule.
    pub fn percent(percent_off: Decimal) -> Self {
        PromotionRule {
            percent_off: Some(percent_off),
            amount_off_cents: None,
        }
    }

    /// An amount-off rule.
    pub fn amount(amount_off_cents: i64) -> Self {
        PromotionRule {
            percent_off: None,
            amount_off_cents: Some(amount_off_cents),
        }
    }

    /// Resolves which discount mode is active.
    ///
    /// ## Resolution Order
    /// ```text
    /// percent_off = Some(p)         → Percentage(p)   (even when p == 0)
    /// percent_off = None,
    ///   amount_off_cents = Some(a)  → FixedAmount(a)
    /// both None                     → None
    /// ```
    pub fn mode(&self) -> DiscountMode {
        match (self.percent_off, self.amount_off_cents) {
            (Some(percent), _) => DiscountMode::Percentage(percent),
            (None, Some(cents)) => DiscountMode::FixedAmount(Money::from_cents(cents)),
            (None, None) => DiscountMode::None,
        }
    }
}

// =============================================================================
// Discount Mode
// =============================================================================

/// The active discount branch for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountMode {
    /// Percentage of the order amount.
    Percentage(Decimal),
    /// Fixed amount off.
    FixedAmount(Money),
    /// No discount configured.
    None,
}

impl DiscountMode {
    /// The kind tag for this mode.
    pub fn kind(&self) -> DiscountKind {
        match self {
            DiscountMode::Percentage(_) => DiscountKind::Percentage,
            DiscountMode::FixedAmount(_) => DiscountKind::FixedAmount,
            DiscountMode::None => DiscountKind::None,
        }
    }
}

/// Which branch of the calculator produced a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    FixedAmount,
    None,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::FixedAmount => write!(f, "fixed_amount"),
            DiscountKind::None => write!(f, "none"),
        }
    }
}

// =============================================================================
// Applied Discount
// =============================================================================

/// Output of the discount calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    /// Branch that computed the amount.
    pub kind: DiscountKind,
    /// Discount in minor units, `0 <= amount <= order amount`.
    pub amount: Money,
    /// True when the raw discount exceeded the order amount and was capped.
    pub clamped: bool,
}

impl AppliedDiscount {
    /// Zero discount from the no-discount branch.
    pub const fn none() -> Self {
        AppliedDiscount {
            kind: DiscountKind::None,
            amount: Money::zero(),
            clamped: false,
        }
    }
}

// =============================================================================
// Promo Code
// =============================================================================

/// A redeemable promo code as configured by an event organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Code the buyer types at checkout. Matched case-insensitively.
    pub code: String,

    /// Discount granted.
    pub rule: PromotionRule,

    /// Organizer kill switch.
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Start of the validity window (inclusive).
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub starts_at: Option<DateTime<Utc>>,

    /// End of the validity window (exclusive).
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub ends_at: Option<DateTime<Utc>>,

    /// Redemption limit. `Some(0)` means the code cannot be redeemed.
    #[serde(default)]
    pub max_uses: Option<u32>,

    /// Redemptions so far.
    #[serde(default)]
    pub times_used: u32,

    /// Minimum subtotal in minor units. `Some(0)` means any order qualifies.
    #[serde(default)]
    #[ts(type = "number | null")]
    pub min_order_cents: Option<i64>,

    /// Restricts the code to one event.
    #[serde(default)]
    pub event_id: Option<String>,
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Order Context
// =============================================================================

/// The order a promo code is being applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderContext {
    /// Event the tickets belong to.
    pub event_id: String,
    /// Ticket subtotal in minor units.
    #[ts(type = "number")]
    pub subtotal_cents: i64,
}

impl OrderContext {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Price Quote
// =============================================================================

/// The priced order returned to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    #[ts(type = "number")]
    pub subtotal_cents: i64,
    #[ts(type = "number")]
    pub discount_cents: i64,
    /// `subtotal_cents - discount_cents`, never negative.
    #[ts(type = "number")]
    pub total_cents: i64,
    /// Normalized code that was applied, if any.
    pub promo_code: Option<String>,
    pub applied: Option<AppliedDiscount>,
}

// =============================================================================
// Unit Tests
// =============================================================================
