//! Anchor derivation and cross-rate conversion.

use crate::constants::RIALS_PER_TOMAN;

/// The per-run conversion anchor: toman per one US dollar.
///
/// Derived once from the mandatory USD figure and used as the scaling basis
/// for every other conversion in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionContext {
    toman_per_usd: f64,
}

impl ConversionContext {
    /// Build the anchor from a rial-denominated USD figure.
    ///
    /// Returns `None` for non-positive or non-finite input; the caller
    /// promotes that to the fatal missing-reference error.
    pub fn from_rial_quote(rials_per_usd: f64) -> Option<Self> {
        if !rials_per_usd.is_finite() || rials_per_usd <= 0.0 {
            return None;
        }
        Some(Self {
            toman_per_usd: rials_per_usd / RIALS_PER_TOMAN,
        })
    }

    /// Toman per one US dollar.
    pub fn toman_per_usd(&self) -> f64 {
        self.toman_per_usd
    }

    /// Toman per one unit of a cross-rated currency.
    ///
    /// `cross_rate` is "code units per 1 USD", so the local figure is the
    /// anchor divided by the rate — never the inverse, which would silently
    /// produce reciprocal-magnitude values. Non-positive rates yield `None`
    /// so a bad upstream figure can never divide-by-zero its way into the
    /// snapshot.
    pub fn local_per_unit(&self, cross_rate: f64) -> Option<f64> {
        if !cross_rate.is_finite() || cross_rate <= 0.0 {
            return None;
        }
        Some(self.toman_per_usd / cross_rate)
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_from_rial_quote() {
        let ctx = ConversionContext::from_rial_quote(420_000.0).unwrap();
        assert_eq!(ctx.toman_per_usd(), 42_000.0);
    }

    #[test]
    fn test_anchor_rejects_bad_input() {
        assert!(ConversionContext::from_rial_quote(0.0).is_none());
        assert!(ConversionContext::from_rial_quote(-420_000.0).is_none());
        assert!(ConversionContext::from_rial_quote(f64::NAN).is_none());
        assert!(ConversionContext::from_rial_quote(f64::INFINITY).is_none());
    }

    #[test]
    fn test_reciprocal_conversion() {
        // Anchor 42000 toman/USD, 0.92 EUR per USD -> 45652.17 toman/EUR.
        let ctx = ConversionContext::from_rial_quote(420_000.0).unwrap();
        let local = ctx.local_per_unit(0.92).unwrap();
        assert_eq!(round_to(local, 2), 45_652.17);
    }

    #[test]
    fn test_conversion_rejects_non_positive_cross_rate() {
        let ctx = ConversionContext::from_rial_quote(420_000.0).unwrap();
        assert!(ctx.local_per_unit(0.0).is_none());
        assert!(ctx.local_per_unit(-1.0).is_none());
        assert!(ctx.local_per_unit(f64::NAN).is_none());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1481.1179428571, 6), 1481.117943);
        assert_eq!(round_to(5793.103448, 2), 5793.1);
        assert_eq!(round_to(42000.0, 2), 42000.0);
    }
}
