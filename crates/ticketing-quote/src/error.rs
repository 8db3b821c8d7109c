//! # Quote Error Types
//!
//! Error types for the quote service and CLI.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Input       │  │       Pricing           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Pricing(CoreError)     │ │
//! │  │  ConfigParse    │  │  Json           │  │  DuplicatePromoCode     │ │
//! │  │                 │  │  Usage          │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use ticketing_core::CoreError;

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors raised while configuring the service or pricing a request.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for `PricingConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Reading a config, catalog, or request file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad command-line arguments.
    #[error("Usage: {0}")]
    Usage(String),

    /// A request or catalog is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries normalize to the same code.
    #[error("Duplicate promo code in catalog: {0}")]
    DuplicatePromoCode(String),

    /// Pricing rule violation from the core.
    #[error(transparent)]
    Pricing(#[from] CoreError),
}

impl From<ticketing_core::ValidationError> for QuoteError {
    fn from(err: ticketing_core::ValidationError) -> Self {
        QuoteError::Pricing(CoreError::Validation(err))
    }
}
