//! Assembling the snapshot from one raw document.
//!
//! This is where the error policy from the design splits: the USD anchor is
//! mandatory and its absence fails the whole run, while every other figure is
//! optional and an unresolvable one is omitted from the snapshot with a
//! warning. Omission is deliberate — a `0.0` placeholder would read as a real
//! rate downstream.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::constants::MONEY_DECIMALS;
use crate::convert::{round_to, ConversionContext};
use crate::errors::RatesError;
use crate::gold::GoldStrategy;
use crate::models::raw::RawQuoteDocument;
use crate::models::snapshot::{RateValue, RatesSnapshot};
use crate::resolve::{self, CROSS_CURRENCIES, USD_LOCAL, USD_RIAL};

/// Derive the toman-per-USD anchor from a raw document.
///
/// Reference-rate documents carry the rial cross rate under `irr`;
/// local-market documents quote the dollar directly in rials. Either way the
/// figure must resolve and be positive, or the run is over.
pub fn derive_anchor(doc: &RawQuoteDocument) -> Result<ConversionContext, RatesError> {
    let rials = resolve::resolve(doc, &USD_RIAL)
        .or_else(|| resolve::resolve(doc, &USD_LOCAL))
        .ok_or_else(|| RatesError::MissingReference("no USD figure in document".to_string()))?;

    ConversionContext::from_rial_quote(rials)
        .ok_or_else(|| RatesError::MissingReference(format!("non-positive USD figure: {rials}")))
}

/// Build the success snapshot for one fetched document.
///
/// `source` is the URL of the endpoint the document came from and is recorded
/// in the snapshot as-is.
pub fn build_snapshot(doc: &RawQuoteDocument, source: &str) -> Result<RatesSnapshot, RatesError> {
    let ctx = derive_anchor(doc)?;
    info!("Anchor: {} toman per USD", ctx.toman_per_usd());

    let mut rates = BTreeMap::new();
    rates.insert(
        "USD".to_string(),
        RateValue::Currency(round_to(ctx.toman_per_usd(), MONEY_DECIMALS)),
    );

    for (code, field) in CROSS_CURRENCIES {
        let local = resolve::resolve_positive(doc, field)
            .and_then(|cross_rate| ctx.local_per_unit(cross_rate));
        match local {
            Some(amount) => {
                rates.insert(
                    (*code).to_string(),
                    RateValue::Currency(round_to(amount, MONEY_DECIMALS)),
                );
            }
            None => warn!("Could not compute {}: figure absent or non-positive, omitting", code),
        }
    }

    match GoldStrategy::select(doc) {
        Some(strategy) => {
            let gold = strategy.compute(&ctx);
            info!(
                "XAU computed: {} USD/oz, {} toman/g (18k)",
                gold.usd_per_ounce, gold.local_per_gram_18k
            );
            rates.insert("XAU".to_string(), RateValue::Gold(gold));
        }
        None => warn!("Could not compute XAU: no usable gold figure, omitting"),
    }

    Ok(RatesSnapshot::success(source, rates))
}
