//! # ticketing-quote: Checkout Quote Service
//!
//! Wraps `ticketing-core` with the pieces that touch the outside world:
//! configuration files and environment, the promo catalog, and logging.
//!
//! ## Modules
//!
//! - [`config`] - `PricingConfig` (TOML + `TICKETING_*` env overrides)
//! - [`catalog`] - `PromoCatalog`, case-insensitive promo lookup
//! - [`service`] - `QuoteService`, request → priced quote
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - `QuoteError`

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use catalog::PromoCatalog;
pub use config::PricingConfig;
pub use error::{QuoteError, QuoteResult};
pub use service::{QuoteRequest, QuoteResponse, QuoteService};
