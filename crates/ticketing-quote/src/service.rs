//! # Quote Service
//!
//! Resolves a promo code against the catalog and prices the order.
//!
//! ## Request Flow
//! ```text
//! QuoteRequest { eventId, subtotalCents, promoCode? }
//!      │
//!      ├── no code ───────────────────────────► price_order(order, None)
//!      │
//!      ├── code in catalog ───────────────────► price_order(order, Some(promo))
//!      │
//!      └── code unknown
//!             ├── reject_unknown_codes = true ► PromoNotFound
//!             └── otherwise ──────────────────► price_order(order, None) + warn
//! ```
//!
//! The service is immutable after construction and can be shared across
//! threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ticketing_core::{price_order, CoreError, OrderContext, PriceQuote};

use crate::catalog::PromoCatalog;
use crate::config::PricingConfig;
use crate::error::QuoteResult;

/// A checkout pricing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub event_id: String,
    pub subtotal_cents: i64,
    /// Empty or whitespace-only codes are treated as absent.
    #[serde(default)]
    pub promo_code: Option<String>,
}

/// A priced order plus the currency its amounts are in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub currency: String,
    #[serde(flatten)]
    pub quote: PriceQuote,
}

/// Prices checkout requests against a promo catalog.
#[derive(Debug, Clone)]
pub struct QuoteService {
    config: PricingConfig,
    catalog: PromoCatalog,
}

impl QuoteService {
    pub fn new(config: PricingConfig, catalog: PromoCatalog) -> Self {
        QuoteService { config, catalog }
    }

    /// Prices a request at the current time.
    pub fn quote(&self, request: &QuoteRequest) -> QuoteResult<QuoteResponse> {
        self.quote_at(request, Utc::now())
    }

    /// Prices a request at `now`.
    pub fn quote_at(&self, request: &QuoteRequest, now: DateTime<Utc>) -> QuoteResult<QuoteResponse> {
        let order = OrderContext {
            event_id: request.event_id.clone(),
            subtotal_cents: request.subtotal_cents,
        };

        let code = request
            .promo_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        let promo = match code {
            None => None,
            Some(code) => match self.catalog.get(code) {
                Some(promo) => Some(promo),
                None if self.config.pricing.reject_unknown_codes => {
                    return Err(CoreError::PromoNotFound(code.to_string()).into());
                }
                None => {
                    warn!(code = %code, event_id = %order.event_id, "Unknown promo code, pricing without discount");
                    None
                }
            },
        };

        let quote = price_order(&order, promo, now)?;

        info!(
            event_id = %order.event_id,
            promo_code = ?quote.promo_code,
            subtotal_cents = quote.subtotal_cents,
            discount_cents = quote.discount_cents,
            total_cents = quote.total_cents,
            "Quote computed"
        );

        Ok(QuoteResponse {
            currency: self.config.pricing.currency.clone(),
            quote,
        })
    }
}
