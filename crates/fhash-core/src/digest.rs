//! Streaming digest computation over a file's byte stream.
//!
//! Files are read in fixed-size chunks so memory use stays bounded by the
//! buffer, not the file size. A digest is produced only if the whole stream
//! was read; any I/O failure aborts with no partial result.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read buffer size. Any positive size yields the same digest; this only
/// caps per-read memory.
const BUF_SIZE: usize = 8192;

/// Supported digest algorithms. New algorithms are new variants here plus a
/// matching [`Hasher`] arm; call sites stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgo {
    Md5,
    #[default]
    Sha256,
}

impl HashAlgo {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgo::Md5 => "md5",
            HashAlgo::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgo {
    type Err = UnknownAlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(HashAlgo::Md5),
            "sha256" => Ok(HashAlgo::Sha256),
            other => Err(UnknownAlgoError(other.to_string())),
        }
    }
}

/// Algorithm name not recognized (expected `md5` or `sha256`).
#[derive(Debug, thiserror::Error)]
#[error("unknown algorithm `{0}` (expected md5 or sha256)")]
pub struct UnknownAlgoError(pub String);

/// Target file could not be opened or read; no digest was produced.
#[derive(Debug, thiserror::Error)]
#[error("{path}: {source}", path = .path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Incremental accumulator, one arm per [`HashAlgo`] variant.
enum Hasher {
    Md5(md5::Context),
    Sha256(Sha256),
}

impl Hasher {
    fn new(algo: HashAlgo) -> Self {
        match algo {
            HashAlgo::Md5 => Hasher::Md5(md5::Context::new()),
            HashAlgo::Sha256 => Hasher::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            Hasher::Md5(ctx) => ctx.consume(chunk),
            Hasher::Sha256(h) => h.update(chunk),
        }
    }

    /// Finalize and render as lowercase hex.
    fn finish(self) -> String {
        match self {
            Hasher::Md5(ctx) => format!("{:x}", ctx.finalize()),
            Hasher::Sha256(h) => hex::encode(h.finalize()),
        }
    }
}

/// Stream `reader` to exhaustion in bounded chunks and return the digest as
/// lowercase hex. Fails on the first read error; no partial digest escapes.
pub fn hash_reader<R: Read>(mut reader: R, algo: HashAlgo) -> io::Result<String> {
    let mut hasher = Hasher::new(algo);
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finish())
}

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
/// The handle is closed on every exit path, success or error.
pub fn hash_path(path: &Path, algo: HashAlgo) -> Result<String, FileAccessError> {
    let file = File::open(path).map_err(|source| FileAccessError {
        path: path.to_path_buf(),
        source,
    })?;
    hash_reader(file, algo).map_err(|source| FileAccessError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Reader that hands out at most 7 bytes per call, so the stream is
    /// split at boundaries unrelated to the internal buffer size.
    struct ShortReads<'a>(&'a [u8]);

    impl Read for ShortReads<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.0.len().min(buf.len()).min(7);
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    #[test]
    fn sha256_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let digest = hash_path(f.path(), HashAlgo::Sha256).unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn md5_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let digest = hash_path(f.path(), HashAlgo::Md5).unwrap();
        assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn sha256_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let digest = hash_path(f.path(), HashAlgo::Sha256).unwrap();
        assert_eq!(
            digest,
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn md5_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let digest = hash_path(f.path(), HashAlgo::Md5).unwrap();
        assert_eq!(digest, "b1946ac92492d2347c6235b4d2611184");
    }

    #[test]
    fn chunked_reads_match_one_shot() {
        // Bigger than the internal buffer so the loop runs several times.
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();

        let one_shot = hex::encode(Sha256::digest(&data));
        let streamed = hash_reader(&data[..], HashAlgo::Sha256).unwrap();
        assert_eq!(streamed, one_shot);

        let short = hash_reader(ShortReads(&data), HashAlgo::Sha256).unwrap();
        assert_eq!(short, one_shot);

        let mut ctx = md5::Context::new();
        ctx.consume(&data);
        let md5_one_shot = format!("{:x}", ctx.finalize());
        let md5_short = hash_reader(ShortReads(&data), HashAlgo::Md5).unwrap();
        assert_eq!(md5_short, md5_one_shot);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file");
        let err = hash_path(&path, HashAlgo::Sha256).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.path, path);
    }

    #[test]
    fn read_error_yields_no_digest() {
        struct FailAfter(usize);
        impl Read for FailAfter {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0 == 0 {
                    return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
                }
                let n = self.0.min(buf.len());
                buf[..n].fill(0xAB);
                self.0 -= n;
                Ok(n)
            }
        }
        // Some chunks succeed before the failure; still no digest.
        assert!(hash_reader(FailAfter(10_000), HashAlgo::Sha256).is_err());
    }

    #[test]
    fn algo_parse_and_display() {
        assert_eq!("md5".parse::<HashAlgo>().unwrap(), HashAlgo::Md5);
        assert_eq!("sha256".parse::<HashAlgo>().unwrap(), HashAlgo::Sha256);
        assert!("sha512".parse::<HashAlgo>().is_err());
        assert_eq!(HashAlgo::Md5.to_string(), "md5");
        assert_eq!(HashAlgo::Sha256.to_string(), "sha256");
    }
}
