//! Raw upstream rate documents.
//!
//! The two feeds the updater understands disagree on almost everything:
//! the reference-rate feed nests bare-number cross rates under a top-level
//! `"usd"` key, while local-market feeds nest quote objects under `"current"`
//! (or put them at the document root) and format prices as strings with
//! thousands separators. [`RawQuoteDocument`] reduces both to a flat map of
//! entries so resolution can stay shape-agnostic.

use serde_json::{Map, Value};

use crate::errors::RatesError;

/// Price field names tried, in order, when an entry is a nested object.
const PRICE_FIELDS: &[&str] = &["p", "pn", "price"];

/// Where the quote entries were found inside the upstream JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// Cross rates keyed under a top-level `"usd"` object.
    ReferenceRates,
    /// Market quotes keyed under `"current"`, or at the document root.
    LocalMarket,
}

/// A parsed provider document, reduced to its quote-entry map.
#[derive(Debug, Clone)]
pub struct RawQuoteDocument {
    shape: DocumentShape,
    entries: Map<String, Value>,
}

impl RawQuoteDocument {
    /// Classify a parsed JSON value into one of the known document shapes.
    ///
    /// A flat object is only accepted when at least one of its entries looks
    /// like a price; otherwise an unrelated JSON object (an upstream error
    /// page, say) would pass shape validation and defeat endpoint fallback.
    pub fn from_value(value: Value, url: &str) -> Result<Self, RatesError> {
        let Value::Object(root) = value else {
            return Err(RatesError::Shape {
                url: url.to_string(),
            });
        };

        if let Some(Value::Object(rates)) = root.get("usd").or_else(|| root.get("USD")) {
            return Ok(Self {
                shape: DocumentShape::ReferenceRates,
                entries: rates.clone(),
            });
        }

        if let Some(Value::Object(current)) = root.get("current") {
            return Ok(Self {
                shape: DocumentShape::LocalMarket,
                entries: current.clone(),
            });
        }

        if root.values().any(|entry| parse_price(entry).is_some()) {
            return Ok(Self {
                shape: DocumentShape::LocalMarket,
                entries: root,
            });
        }

        Err(RatesError::Shape {
            url: url.to_string(),
        })
    }

    /// The shape this document was recognized as.
    pub fn shape(&self) -> DocumentShape {
        self.shape
    }

    /// Raw entry for an exact key, if present.
    pub fn entry(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

/// Parse one raw entry into a finite float.
///
/// Accepts bare numbers, numeric strings with thousands separators or
/// whitespace, and nested objects exposing the price under one of
/// [`PRICE_FIELDS`].
pub(crate) fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_numeric_str(s),
        Value::Object(fields) => PRICE_FIELDS
            .iter()
            .filter_map(|name| fields.get(*name))
            .find_map(|field| parse_price(field)),
        _ => None,
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
