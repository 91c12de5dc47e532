//! Runtime configuration.
//!
//! Configuration is a small JSON document; every field is optional and
//! command-line flags take precedence over file values.
//!
//! ```json
//! {
//!   "labels_path": "data/nodes.tsv",
//!   "triples_path": "data/kg.tsv",
//!   "ignore_related": true,
//!   "limit": 50
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PhraseAnalyzer;
use crate::error::{RelataError, Result};
use crate::graph::relation::RelationFilter;
use crate::graph::retrieval::DEFAULT_LIMIT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelataConfig {
    /// TSV file mapping node ids to labels.
    pub labels_path: Option<PathBuf>,
    /// TSV file of `subject<TAB>relation<TAB>object` records.
    pub triples_path: Option<PathBuf>,
    /// Drop `/r/RelatedTo*` relations while indexing.
    pub ignore_related: bool,
    /// Maximum number of results per query.
    pub limit: usize,
    /// Replaces the built-in English stop word list.
    pub stop_words: Option<Vec<String>>,
}

impl Default for RelataConfig {
    fn default() -> Self {
        RelataConfig {
            labels_path: None,
            triples_path: None,
            ignore_related: false,
            limit: DEFAULT_LIMIT,
            stop_words: None,
        }
    }
}

impl RelataConfig {
    /// Load and validate a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RelataError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: RelataConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(words) = &self.stop_words
            && words.is_empty()
        {
            return Err(RelataError::config(
                "stop_words must not be empty; omit it to use the built-in list",
            ));
        }
        Ok(())
    }

    pub fn relation_filter(&self) -> RelationFilter {
        RelationFilter::new(self.ignore_related)
    }

    /// Build the shared phrase analyzer described by this configuration.
    pub fn analyzer(&self) -> Result<Arc<PhraseAnalyzer>> {
        let analyzer = match &self.stop_words {
            Some(words) => {
                let words: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
                PhraseAnalyzer::with_stop_words(words)?
            }
            None => PhraseAnalyzer::new()?,
        };
        Ok(Arc::new(analyzer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config: RelataConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, RelataConfig::default());
        assert_eq!(config.limit, 100);
        assert!(!config.relation_filter().ignore_related());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("relata.json");
        fs::write(
            &path,
            r#"{"labels_path": "nodes.tsv", "ignore_related": true, "limit": 5, "stop_words": ["The", "of"]}"#,
        )
        .unwrap();

        let config = RelataConfig::from_file(&path).unwrap();

        assert_eq!(config.labels_path, Some(PathBuf::from("nodes.tsv")));
        assert!(config.triples_path.is_none());
        assert!(config.ignore_related);
        assert_eq!(config.limit, 5);

        let analyzer = config.analyzer().unwrap();
        assert_eq!(analyzer.stems("the piece of cake").unwrap(), vec!["piec", "cake"]);
    }

    #[test]
    fn test_empty_stop_words_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("relata.json");
        fs::write(&path, r#"{"stop_words": []}"#).unwrap();

        let err = RelataConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RelataError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RelataConfig::from_file("does-not-exist.json").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
