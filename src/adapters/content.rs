//! Implements ContentPort from a JSON document on disk.

use crate::domain::{DomainError, PortfolioData};
use crate::ports::ContentPort;
use std::path::{Path, PathBuf};
use tokio::fs;

/// JSON file-based content source.
pub struct JsonContent {
    path: PathBuf,
}

impl JsonContent {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ContentPort for JsonContent {
    async fn load(&self) -> Result<PortfolioData, DomainError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Content(format!("read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| DomainError::Content(format!("parse {}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_well_formed_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "personal": {{
                    "name": "Ada Lovelace",
                    "title": "Engineer",
                    "description": "Hello.",
                    "email": "ada@example.com"
                }},
                "skills": [{{"name": "Rust", "description": "Systems programming"}}]
            }}"#
        )
        .unwrap();

        let data = JsonContent::new(file.path()).load().await.unwrap();
        assert_eq!(data.personal.name, "Ada Lovelace");
        assert_eq!(data.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_content_error() {
        let err = JsonContent::new("/nonexistent/data.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Content(_)));
    }

    #[tokio::test]
    async fn test_malformed_document_is_content_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = JsonContent::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, DomainError::Content(_)));
    }
}
