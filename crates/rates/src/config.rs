//! Run configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_ENDPOINTS, RATES_FILE, REQUEST_TIMEOUT, USER_AGENT};

/// Everything one updater run needs to know.
///
/// There are no CLI flags and no environment variables (apart from `RUST_LOG`
/// consumed by the logger): the defaults are the production values, and tests
/// override individual fields with struct update syntax.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Candidate upstream endpoints, tried in order.
    pub endpoints: Vec<String>,
    /// Where the snapshot is written.
    pub output_path: PathBuf,
    /// Per-endpoint request timeout.
    pub timeout: Duration,
    /// User agent sent upstream.
    pub user_agent: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| (*s).to_string()).collect(),
            output_path: PathBuf::from(RATES_FILE),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
