use crate::error::FixtureError;
use log::info;
use shared::{decode_payload, AnalysisPayload, LegacyEtsyData, PayloadSchema};
use std::path::{Path, PathBuf};

/// Canned analysis payload served by every endpoint.
///
/// The fixture is read once at startup in the canonical schema; the legacy
/// shape is derived from it so both endpoints always agree.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    payload: AnalysisPayload,
    legacy: LegacyEtsyData,
    origin: Option<PathBuf>,
}

impl FixtureStore {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let body = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let payload = decode_payload(PayloadSchema::Analysis, 200, &body).map_err(|e| {
            FixtureError::Invalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        info!(
            "Loaded fixture {} ({} categories, {} trending searches)",
            path.display(),
            payload.top_categories.as_ref().map_or(0, Vec::len),
            payload.trending_searches.as_ref().map_or(0, Vec::len),
        );

        let mut store = Self::from_payload(payload);
        store.origin = Some(path.to_path_buf());
        Ok(store)
    }

    pub fn from_payload(payload: AnalysisPayload) -> Self {
        let legacy = LegacyEtsyData::from(&payload);
        Self {
            payload,
            legacy,
            origin: None,
        }
    }

    pub fn payload(&self) -> &AnalysisPayload {
        &self.payload
    }

    pub fn legacy(&self) -> &LegacyEtsyData {
        &self.legacy
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_fixture() {
        let file = write_fixture(
            r#"{"trending_searches": ["planner"], "sales_volume": {"labels": ["Q1"], "datasets": [{"data": [5]}]}}"#,
        );

        let store = FixtureStore::load(file.path()).unwrap();

        assert_eq!(store.payload().trending_searches, Some(vec!["planner".to_string()]));
        assert_eq!(store.legacy().sales_volume, store.payload().sales_volume);
        assert_eq!(store.origin(), Some(file.path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FixtureStore::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }

    #[test]
    fn test_non_object_fixture_is_invalid() {
        let file = write_fixture("[1, 2, 3]");

        match FixtureStore::load(file.path()) {
            Err(FixtureError::Invalid { reason, .. }) => assert!(reason.contains("JSON object")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bundled_fixture_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/etsy-analysis.json");
        let store = FixtureStore::load(&path).unwrap();

        assert!(!store.payload().is_empty());
        assert!(store.payload().top_categories.is_some());
        assert!(store.legacy().top_categories.is_some());
    }
}
