//! Loader: one fetch of the report, status check, JSON parse, schema check,
//! typed decode, digest. No retry and no partial result.

#![forbid(unsafe_code)]

use dash_core::Report;
use serde_json::Value;
use tracing::{debug, info};

use crate::{hasher, schema, LoadError, ReportSource};

/// Relative location of the report inside the published site.
pub const DEFAULT_REPORT_PATH: &str = "data/analysis.json";

/// A report that made it into memory, plus the digest of its bytes.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub report: Report,
    pub digest: Option<String>,
}

pub struct ReportLoader {
    source: Box<dyn ReportSource>,
    path: String,
}

impl ReportLoader {
    pub fn new(source: Box<dyn ReportSource>) -> Self {
        Self::with_path(source, DEFAULT_REPORT_PATH)
    }

    pub fn with_path(source: Box<dyn ReportSource>, path: impl Into<String>) -> Self {
        Self { source, path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn describe(&self) -> String {
        format!("{} → {}", self.source.describe(), self.path)
    }

    /// Fetch and decode the report. A single attempt is made.
    pub async fn load(&self) -> Result<LoadedReport, LoadError> {
        info!(source = %self.source.describe(), path = %self.path, "fetching report");
        let fetched = self.source.fetch(&self.path).await?;
        if !fetched.is_success() {
            return Err(LoadError::Status { path: self.path.clone(), status: fetched.status });
        }
        debug!(bytes = fetched.body.len(), "report body received");

        let loaded = decode_report(&fetched.body)?;
        info!(
            scenarios = loaded.report.scenarios.len(),
            days = loaded.report.daily.len(),
            "report loaded"
        );
        Ok(loaded)
    }
}

/// Parse, schema-check and decode report bytes.
pub fn decode_report(bytes: &[u8]) -> Result<LoadedReport, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    schema::validate_value(&value)?;
    let report: Report = serde_json::from_value(value)?;
    Ok(LoadedReport { report, digest: hasher::digest_hex(bytes) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fetched;
    use async_trait::async_trait;

    const FIXTURE: &str = include_str!("../../../fixtures/analysis.json");

    struct Canned(Fetched);

    #[async_trait]
    impl ReportSource for Canned {
        async fn fetch(&self, _rel_path: &str) -> Result<Fetched, LoadError> {
            Ok(self.0.clone())
        }
        fn describe(&self) -> String {
            "canned".into()
        }
    }

    fn loader(f: Fetched) -> ReportLoader {
        ReportLoader::new(Box::new(Canned(f)))
    }

    #[tokio::test]
    async fn loads_fixture() {
        let got = loader(Fetched::ok(FIXTURE)).load().await.unwrap();
        assert_eq!(got.report.scenarios.len(), 3);
        assert_eq!(got.report.daily.len(), 5);
        #[cfg(feature = "hash")]
        assert_eq!(got.digest.as_deref().map(str::len), Some(64));
    }

    #[tokio::test]
    async fn non_success_status_is_error() {
        let err = loader(Fetched::status(500)).load().await.unwrap_err();
        match err {
            LoadError::Status { status, path } => {
                assert_eq!(status, 500);
                assert_eq!(path, DEFAULT_REPORT_PATH);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_is_parse_error() {
        let err = loader(Fetched::ok("<html>not json</html>")).load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = decode_report(br#"{"scenarios": [], "daily": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. } | LoadError::Parse(_)));
    }

    #[test]
    fn invalid_scenario_key_is_rejected() {
        let mut value: Value = serde_json::from_str(FIXTURE).unwrap();
        let scenarios = value["scenarios"].as_object_mut().unwrap();
        let c = scenarios.remove("C_conservador").unwrap();
        scenarios.insert(String::new(), c);
        let err = decode_report(value.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. } | LoadError::Parse(_)));
    }
}
