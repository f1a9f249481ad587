//! PricePilot rates library
//!
//! Fetches USD-based exchange rates and gold quotes from public upstream
//! feeds, converts them to Iranian toman, and assembles the `rates.json`
//! snapshot consumed by the PricePilot browser extension.
//!
//! Flow: a [`RatesFetcher`] walks the candidate endpoints in order until one
//! yields a recognized [`RawQuoteDocument`]; [`normalize::build_snapshot`]
//! resolves the figures through prioritized key lists, derives the
//! toman-per-USD anchor, computes the cross-rate and gold conversions, and
//! produces a [`RatesSnapshot`] ready to overwrite the output file. Every run
//! recomputes everything; nothing is merged with prior state.

pub mod config;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod fetch;
pub mod gold;
pub mod models;
pub mod normalize;
pub mod resolve;

pub use config::UpdaterConfig;
pub use convert::ConversionContext;
pub use errors::RatesError;
pub use fetch::RatesFetcher;
pub use gold::GoldStrategy;
pub use models::{DocumentShape, GoldPrice, RateValue, RatesSnapshot, RawQuoteDocument};
