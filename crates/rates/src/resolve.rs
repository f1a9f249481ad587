//! Logical-field resolution over raw quote documents.
//!
//! Upstream feeds spell the same figure a dozen ways (`irr` vs `IRR`,
//! `geram18` vs `gram18`, prices under `p` vs `price`). Instead of scattering
//! string-matching through the conversion code, each figure the updater cares
//! about is a [`LogicalField`] with an explicit, prioritized candidate-key
//! list, resolved in one place.

use crate::models::raw::{parse_price, RawQuoteDocument};

/// A named figure together with the document keys it may hide under.
#[derive(Debug, Clone, Copy)]
pub struct LogicalField {
    /// Name used in logs and error messages.
    pub name: &'static str,
    /// Candidate keys, highest priority first.
    pub keys: &'static [&'static str],
}

/// Rials per one US dollar (reference-rate documents).
pub const USD_RIAL: LogicalField = LogicalField {
    name: "USD/IRR",
    keys: &["irr", "IRR"],
};

/// Rial-denominated local dollar quote (local-market documents).
pub const USD_LOCAL: LogicalField = LogicalField {
    name: "USD (local market)",
    keys: &["price_dollar_rl", "dollar_rl", "usd", "USD"],
};

/// Euro cross rate: EUR per one USD.
pub const EUR: LogicalField = LogicalField {
    name: "EUR",
    keys: &["eur", "EUR"],
};

/// UAE dirham cross rate: AED per one USD.
pub const AED: LogicalField = LogicalField {
    name: "AED",
    keys: &["aed", "AED"],
};

/// Chinese yuan cross rate: CNY per one USD.
pub const CNY: LogicalField = LogicalField {
    name: "CNY",
    keys: &["cny", "CNY"],
};

/// Gold cross rate: troy ounces per one USD.
pub const XAU: LogicalField = LogicalField {
    name: "XAU",
    keys: &["xau", "XAU"],
};

/// Rial-denominated 18-karat gram price (local-market documents).
pub const GOLD_GRAM_18K: LogicalField = LogicalField {
    name: "gold gram 18k",
    keys: &["geram18", "gram18", "18ayar"],
};

/// Optional cross-rate currencies emitted alongside USD.
pub const CROSS_CURRENCIES: &[(&str, LogicalField)] = &[("EUR", EUR), ("AED", AED), ("CNY", CNY)];

/// Resolve a logical field against a raw document.
///
/// Keys are tried in priority order; the first entry that parses as a finite
/// float wins. Absence is `None`, never an error — the caller decides whether
/// the missing figure is fatal.
pub fn resolve(doc: &RawQuoteDocument, field: &LogicalField) -> Option<f64> {
    field
        .keys
        .iter()
        .find_map(|key| doc.entry(key).and_then(parse_price))
}

/// Like [`resolve`], but additionally rejects non-positive figures.
pub fn resolve_positive(doc: &RawQuoteDocument, field: &LogicalField) -> Option<f64> {
    resolve(doc, field).filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> RawQuoteDocument {
        RawQuoteDocument::from_value(value, "http://example.test").unwrap()
    }

    #[test]
    fn test_resolve_case_variants() {
        let lower = doc(json!({"usd": {"irr": 420000.0}}));
        assert_eq!(resolve(&lower, &USD_RIAL), Some(420000.0));

        let upper = doc(json!({"usd": {"IRR": 420000.0}}));
        assert_eq!(resolve(&upper, &USD_RIAL), Some(420000.0));
    }

    #[test]
    fn test_resolve_key_priority() {
        // "geram18" outranks "gram18" when both are present.
        let both = doc(json!({"current": {"geram18": "100", "gram18": "200"}}));
        assert_eq!(resolve(&both, &GOLD_GRAM_18K), Some(100.0));

        let fallback = doc(json!({"current": {"gram18": "200"}}));
        assert_eq!(resolve(&fallback, &GOLD_GRAM_18K), Some(200.0));
    }

    #[test]
    fn test_resolve_formatted_local_market_entry() {
        let d = doc(json!({"current": {"price_dollar_rl": {"p": "840,000"}}}));
        assert_eq!(resolve(&d, &USD_LOCAL), Some(840_000.0));
    }

    #[test]
    fn test_resolve_missing_is_none() {
        let d = doc(json!({"usd": {"eur": 0.92}}));
        assert_eq!(resolve(&d, &USD_RIAL), None);
        assert_eq!(resolve(&d, &GOLD_GRAM_18K), None);
    }

    #[test]
    fn test_resolve_skips_unparseable_key_and_tries_next() {
        // First candidate key exists but holds garbage; second parses.
        let d = doc(json!({"current": {"geram18": {"title": "gold"}, "gram18": "150"}}));
        assert_eq!(resolve(&d, &GOLD_GRAM_18K), Some(150.0));
    }

    #[test]
    fn test_resolve_positive_rejects_zero_and_negative() {
        let zero = doc(json!({"usd": {"eur": 0.0}}));
        assert_eq!(resolve_positive(&zero, &EUR), None);

        let negative = doc(json!({"usd": {"eur": -0.5}}));
        assert_eq!(resolve_positive(&negative, &EUR), None);

        let positive = doc(json!({"usd": {"eur": 0.92}}));
        assert_eq!(resolve_positive(&positive, &EUR), Some(0.92));
    }
}
