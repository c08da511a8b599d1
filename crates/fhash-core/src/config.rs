//! JSON configuration and the algorithm precedence chain.
//!
//! Only the `default_algo` key is read. Every load failure (missing file,
//! malformed JSON, missing or unrecognized key) falls back to the built-in
//! default, so configuration problems never fail an invocation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::digest::HashAlgo;

/// Configuration loaded from the `--config` path (default `config.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashConfig {
    /// Algorithm used when no `--algo` flag is given.
    #[serde(default)]
    pub default_algo: HashAlgo,
}

/// Load configuration from disk. Missing or malformed files substitute the
/// defaults; the cause is logged at warn, never surfaced as a failure.
pub fn load(path: &Path) -> HashConfig {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!("config {} unreadable ({}), using defaults", path.display(), err);
            return HashConfig::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config {} malformed ({}), using defaults", path.display(), err);
            HashConfig::default()
        }
    }
}

/// Effective algorithm for one invocation: flag > config > built-in default.
/// The built-in default is already folded into `cfg` by [`load`].
pub fn resolve_algo(flag: Option<HashAlgo>, cfg: &HashConfig) -> HashAlgo {
    flag.unwrap_or(cfg.default_algo)
}
