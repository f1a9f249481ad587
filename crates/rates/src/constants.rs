//! Fixed unit, transport, and contract constants.
//!
//! Every figure the conversion formulas depend on lives here rather than as
//! literals inside the arithmetic.

use std::time::Duration;

/// Grams in one troy ounce of precious metal.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1034768;

/// Purity fraction of 18-karat gold relative to 24-karat.
pub const PURITY_18K: f64 = 18.0 / 24.0;

/// Iranian rials per toman.
pub const RIALS_PER_TOMAN: f64 = 10.0;

/// Per-endpoint HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// User agent sent with every upstream request.
pub const USER_AGENT: &str = "PricePilotRatesBot/1.0";

/// Candidate upstream endpoints, tried in order until one yields a document.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/usd.json",
    "https://latest.currency-api.pages.dev/v1/currencies/usd.json",
];

/// Snapshot destination read by the browser extension.
pub const RATES_FILE: &str = "rates.json";

/// Decimal places for local-currency amounts.
pub const MONEY_DECIMALS: u32 = 2;

/// Decimal places for the USD-per-ounce gold figure.
pub const RATIO_DECIMALS: u32 = 6;
