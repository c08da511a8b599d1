//! Hash command: compute a file digest and report it.

use anyhow::Result;
use fhash_core::digest::{self, HashAlgo};
use std::path::Path;

/// Compute the digest of `path` and print it. Success and failure both leave
/// an audit line in the log; failure also propagates so the process exits
/// non-zero.
pub fn run_hash(path: &Path, algo: HashAlgo) -> Result<()> {
    tracing::info!("generating {} hash for {}", algo, path.display());
    match digest::hash_path(path, algo) {
        Ok(hex_digest) => {
            tracing::info!("hash: {}", hex_digest);
            println!("{} hash: {}", algo, hex_digest);
            Ok(())
        }
        Err(err) => {
            tracing::error!("hash generation failed: {}", err);
            println!("Error: Hash generation failed");
            Err(err.into())
        }
    }
}
