//! The persisted snapshot contract.
//!
//! `rates.json` is the entire interface with the browser extension, so the
//! field names and nesting here are frozen. Optional fields are dropped from
//! the serialized form entirely rather than written as `null`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::errors::RatesError;

/// One entry in the `rates` map: a plain toman amount, or the gold structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    Currency(f64),
    Gold(GoldPrice),
}

/// Gold figures at the fixed purities the extension displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoldPrice {
    pub usd_per_ounce: f64,
    pub local_per_ounce: f64,
    pub local_per_gram_24k: f64,
    pub local_per_gram_18k: f64,
}

/// The snapshot written to `rates.json` every run.
///
/// Exactly one of the two forms is produced: a success document carrying
/// `source` and `rates`, or a failure document carrying `error`. Both
/// overwrite the same file so consumers can detect staleness
/// deterministically.
#[derive(Debug, Clone, Serialize)]
pub struct RatesSnapshot {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<BTreeMap<String, RateValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RatesSnapshot {
    /// Successful snapshot for the endpoint that won the fallback race.
    pub fn success(source: impl Into<String>, rates: BTreeMap<String, RateValue>) -> Self {
        Self {
            success: true,
            source: Some(source.into()),
            rates: Some(rates),
            error: None,
        }
    }

    /// Failure snapshot carrying the fatal error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            source: None,
            rates: None,
            error: Some(error.into()),
        }
    }

    /// Serialize as indented UTF-8 JSON.
    ///
    /// Output is deterministic: struct fields serialize in declaration order
    /// and the rates map is sorted by currency code.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| String::from("{\n  \"success\": false\n}"))
    }

    /// Overwrite the snapshot file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), RatesError> {
        fs::write(path, self.to_json()).map_err(|source| RatesError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rates() -> BTreeMap<String, RateValue> {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), RateValue::Currency(42000.0));
        rates.insert("EUR".to_string(), RateValue::Currency(45652.17));
        rates.insert(
            "XAU".to_string(),
            RateValue::Gold(GoldPrice {
                usd_per_ounce: 2000.0,
                local_per_ounce: 84_000_000.0,
                local_per_gram_24k: 2_700_662.71,
                local_per_gram_18k: 2_025_497.03,
            }),
        );
        rates
    }

    #[test]
    fn test_success_snapshot_shape() {
        let snapshot = RatesSnapshot::success("http://example.test/usd.json", sample_rates());
        let json = snapshot.to_json();

        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"source\": \"http://example.test/usd.json\""));
        assert!(json.contains("\"local_per_gram_18k\""));
        // No error key on the success path, not even as null.
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_failure_snapshot_shape() {
        let snapshot = RatesSnapshot::failure("all endpoints failed");
        let json = snapshot.to_json();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"error\": \"all endpoints failed\""));
        assert!(!json.contains("\"rates\""));
        assert!(!json.contains("\"source\""));
    }

    #[test]
    fn test_rates_map_is_sorted_by_code() {
        let snapshot = RatesSnapshot::success("src", sample_rates());
        let json = snapshot.to_json();

        let eur = json.find("\"EUR\"").unwrap();
        let usd = json.find("\"USD\"").unwrap();
        let xau = json.find("\"XAU\"").unwrap();
        assert!(eur < usd && usd < xau);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let snapshot = RatesSnapshot::success("src", sample_rates());
        assert_eq!(snapshot.to_json(), snapshot.to_json());
    }

    #[test]
    fn test_write_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.json");

        RatesSnapshot::success("src", sample_rates())
            .write_to(&path)
            .unwrap();
        RatesSnapshot::failure("boom").write_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"success\": false"));
        assert!(!contents.contains("\"rates\""));
    }
}
