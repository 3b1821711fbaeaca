//! crates/dash_io/src/source.rs
//!
//! Where the report bytes come from. A source performs exactly one read per
//! `fetch` call and reports the outcome as a status code plus body, the way an
//! HTTP GET would. Interpreting the status is the loader's job.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::LoadError;

/// Raw result of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: Vec::new() }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Read `rel_path` once. Transport failures are errors; "not there" is a status.
    async fn fetch(&self, rel_path: &str) -> Result<Fetched, LoadError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Reject absolute paths and `..` so a source never escapes its root.
fn check_relative(rel_path: &str) -> Result<(), LoadError> {
    let p = Path::new(rel_path);
    let escapes = p
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if rel_path.is_empty() || escapes {
        return Err(LoadError::Source(format!("report path must be relative: {rel_path}")));
    }
    Ok(())
}

// ----------------------------- Directory -----------------------------

/// Serves files below a local directory (the exported site root).
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ReportSource for DirSource {
    async fn fetch(&self, rel_path: &str) -> Result<Fetched, LoadError> {
        check_relative(rel_path)?;
        let path = self.root.join(rel_path);
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(Fetched::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Fetched::status(404)),
            Err(e) => Err(LoadError::Unreachable {
                path: path.display().to_string(),
                msg: e.to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

// ----------------------------- HTTP -----------------------------

/// Plain GET against a base URL. No auth, no retry, no caching headers.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: url::Url,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(base: &str) -> Result<Self, LoadError> {
        let mut base = url::Url::parse(base).map_err(|e| LoadError::Source(format!("{base}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(LoadError::Source(format!("unsupported scheme: {}", base.scheme())));
        }
        // Url::join drops the last segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client: reqwest::Client::new() })
    }

    pub fn base(&self) -> &url::Url {
        &self.base
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl ReportSource for HttpSource {
    async fn fetch(&self, rel_path: &str) -> Result<Fetched, LoadError> {
        check_relative(rel_path)?;
        let url = self
            .base
            .join(rel_path)
            .map_err(|e| LoadError::Source(format!("{rel_path}: {e}")))?;
        let unreachable = |e: reqwest::Error| LoadError::Unreachable {
            path: url.to_string(),
            msg: e.to_string(),
        };

        let resp = self.client.get(url.clone()).send().await.map_err(unreachable)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(unreachable)?;
        Ok(Fetched { status, body: body.to_vec() })
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

// ----------------------------- Tests -----------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_only() {
        assert!(check_relative("data/analysis.json").is_ok());
        assert!(check_relative("/etc/passwd").is_err());
        assert!(check_relative("../secret.json").is_err());
        assert!(check_relative("").is_err());
    }

    #[tokio::test]
    async fn dir_source_maps_missing_file_to_404() {
        let dir = tempfile::tempdir().unwrap();
        let src = DirSource::new(dir.path());
        let got = src.fetch("data/analysis.json").await.unwrap();
        assert_eq!(got.status, 404);
        assert!(!got.is_success());
    }

    #[tokio::test]
    async fn dir_source_reads_body() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/analysis.json"), b"{}").unwrap();
        let got = DirSource::new(dir.path()).fetch("data/analysis.json").await.unwrap();
        assert_eq!(got, Fetched::ok(b"{}".to_vec()));
    }

    #[cfg(feature = "http")]
    #[test]
    fn http_base_gets_trailing_slash() {
        let src = HttpSource::new("https://example.org/site").unwrap();
        assert_eq!(src.base().as_str(), "https://example.org/site/");
        assert!(HttpSource::new("ftp://example.org/").is_err());
        assert!(HttpSource::new("not a url").is_err());
    }
}
