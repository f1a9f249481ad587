//! Data models: raw upstream documents and the persisted snapshot.

pub mod raw;
pub mod snapshot;

pub use raw::{DocumentShape, RawQuoteDocument};
pub use snapshot::{GoldPrice, RateValue, RatesSnapshot};
