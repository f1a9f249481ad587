//! Gold price computation.
//!
//! Two upstream shapes have to produce the same output structure. The
//! reference-rate feed quotes gold as a cross rate (troy ounces per USD);
//! local-market feeds quote the 18-karat gram price directly in rials. Each
//! shape is a [`GoldStrategy`] variant, selected by which figure the raw
//! document actually resolves, and both converge on [`GoldPrice`].

use crate::constants::{
    GRAMS_PER_TROY_OUNCE, MONEY_DECIMALS, PURITY_18K, RATIO_DECIMALS, RIALS_PER_TOMAN,
};
use crate::convert::{round_to, ConversionContext};
use crate::models::raw::RawQuoteDocument;
use crate::models::snapshot::GoldPrice;
use crate::resolve::{self, GOLD_GRAM_18K, XAU};

/// How the gold figures will be derived from the raw document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoldStrategy {
    /// `xau` cross rate: troy ounces per one US dollar.
    ReferenceRate { ounces_per_usd: f64 },
    /// 18-karat gram price already quoted in toman.
    LocalMarket { toman_per_gram_18k: f64 },
}

impl GoldStrategy {
    /// Pick a strategy from whatever the document resolves.
    ///
    /// The reference-rate shape wins when both figures are present, since it
    /// comes straight from the reference feed rather than a scraped retail
    /// quote. `None` means the snapshot carries no gold entry at all.
    pub fn select(doc: &RawQuoteDocument) -> Option<Self> {
        if let Some(ounces_per_usd) = resolve::resolve_positive(doc, &XAU) {
            return Some(Self::ReferenceRate { ounces_per_usd });
        }
        let rials = resolve::resolve_positive(doc, &GOLD_GRAM_18K)?;
        Some(Self::LocalMarket {
            toman_per_gram_18k: rials / RIALS_PER_TOMAN,
        })
    }

    /// Compute the full gold structure against the run's anchor.
    pub fn compute(&self, ctx: &ConversionContext) -> GoldPrice {
        match *self {
            Self::ReferenceRate { ounces_per_usd } => {
                let usd_per_ounce = 1.0 / ounces_per_usd;
                let local_per_ounce = usd_per_ounce * ctx.toman_per_usd();
                let gram_24k = local_per_ounce / GRAMS_PER_TROY_OUNCE;
                let gram_18k = gram_24k * PURITY_18K;
                GoldPrice {
                    usd_per_ounce: round_to(usd_per_ounce, RATIO_DECIMALS),
                    local_per_ounce: round_to(local_per_ounce, MONEY_DECIMALS),
                    local_per_gram_24k: round_to(gram_24k, MONEY_DECIMALS),
                    local_per_gram_18k: round_to(gram_18k, MONEY_DECIMALS),
                }
            }
            Self::LocalMarket { toman_per_gram_18k } => {
                let gram_24k = toman_per_gram_18k / PURITY_18K;
                let local_per_ounce = gram_24k * GRAMS_PER_TROY_OUNCE;
                let usd_per_ounce = local_per_ounce / ctx.toman_per_usd();
                GoldPrice {
                    usd_per_ounce: round_to(usd_per_ounce, RATIO_DECIMALS),
                    local_per_ounce: round_to(local_per_ounce, MONEY_DECIMALS),
                    local_per_gram_24k: round_to(gram_24k, MONEY_DECIMALS),
                    local_per_gram_18k: round_to(toman_per_gram_18k, MONEY_DECIMALS),
                }
            }
        }
    }
}
