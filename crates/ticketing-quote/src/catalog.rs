//! # Promo Catalog
//!
//! In-memory index of promo codes keyed by normalized code.
//!
//! The catalog file is a JSON array of `PromoCode` objects, the same shape
//! the organizer dashboard exports:
//!
//! ```json
//! [
//!   { "id": "550e8400-e29b-41d4-a716-446655440000",
//!     "code": "EARLYBIRD",
//!     "rule": { "percentOff": "15" },
//!     "maxUses": 100, "timesUsed": 12 }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use ticketing_core::validation::{normalize_promo_code, validate_promo_code, validate_promotion_rule, validate_uuid};
use ticketing_core::PromoCode;

use crate::error::{QuoteError, QuoteResult};

/// Promo codes by normalized code.
#[derive(Debug, Clone, Default)]
pub struct PromoCatalog {
    codes: HashMap<String, PromoCode>,
}

impl PromoCatalog {
    /// Builds a catalog, validating every entry.
    pub fn new(promos: Vec<PromoCode>) -> QuoteResult<Self> {
        let mut codes = HashMap::with_capacity(promos.len());

        for promo in promos {
            validate_uuid(&promo.id)?;
            validate_promo_code(&promo.code)?;
            validate_promotion_rule(&promo.rule)?;

            let key = normalize_promo_code(&promo.code);
            if codes.contains_key(&key) {
                return Err(QuoteError::DuplicatePromoCode(key));
            }
            codes.insert(key, promo);
        }

        debug!(count = codes.len(), "Built promo catalog");
        Ok(PromoCatalog { codes })
    }

    /// Parses a JSON array of promo codes.
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        let promos: Vec<PromoCode> = serde_json::from_str(json)?;
        Self::new(promos)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> QuoteResult<Self> {
        info!(?path, "Loading promo catalog");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, code: &str) -> Option<&PromoCode> {
        self.codes.get(&normalize_promo_code(code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketing_core::{CoreError, ValidationError};

    const CATALOG: &str = r#"[
        {
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "code": "EarlyBird",
            "rule": {"percentOff": "15"}
        },
        {
            "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "code": "FREE-TRIAL",
            "rule": {"percentOff": 0, "amountOffCents": null}
        }
    ]"#;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = PromoCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("earlybird").is_some());
        assert!(catalog.get(" EARLYBIRD ").is_some());
        assert!(catalog.get("free-trial").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let json = r#"[
            {"id": "550e8400-e29b-41d4-a716-446655440000", "code": "VIP", "rule": {}},
            {"id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8", "code": "vip", "rule": {}}
        ]"#;
        let err = PromoCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, QuoteError::DuplicatePromoCode(code) if code == "VIP"));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let json = r#"[{"id": "not-a-uuid", "code": "VIP", "rule": {}}]"#;
        assert!(matches!(
            PromoCatalog::from_json(json).unwrap_err(),
            QuoteError::Pricing(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));

        let json = r#"[{"id": "550e8400-e29b-41d4-a716-446655440000", "code": "VIP", "rule": {"percentOff": 120}}]"#;
        assert!(matches!(
            PromoCatalog::from_json(json).unwrap_err(),
            QuoteError::Pricing(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PromoCatalog::from_json("{").unwrap_err(),
            QuoteError::Json(_)
        ));
    }
}
