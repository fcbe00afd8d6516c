//! Explorer configuration.
//!
//! Read from a TOML file; every section and field is optional. The radius
//! bounds mirror the explorer's slider (1..=3, starting at 2); the query
//! engine itself accepts any radius including 0.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lineup_core::{LineupError, LineupResult};

use crate::graph::{DuplicatePolicy, GraphBuilder, NeighborhoodQuery, RootRetention};
use crate::loader::DatasetSource;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Input files.
    pub dataset: DatasetConfig,
    /// Query defaults and limits.
    pub query: QueryConfig,
    /// Build options.
    pub build: BuildConfig,
}

/// `[dataset]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Elements CSV.
    pub entities: Option<PathBuf>,
    /// Connections CSV.
    pub connections: Option<PathBuf>,
    /// Single JSON document; takes precedence over the CSV pair.
    pub json: Option<PathBuf>,
}

/// `[query]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Radius used when none is given.
    pub default_radius: usize,
    /// Largest radius a session accepts.
    pub max_radius: usize,
    /// Start with the originals-only filter enabled.
    pub originals_only: bool,
    /// Root handling under the filter.
    pub root_retention: RootRetention,
    /// Query cache size; 0 disables caching.
    pub cache_capacity: usize,
    /// Report searches that match several labels differing only by case
    /// instead of taking the first one inserted.
    pub strict_resolve: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_radius: 2,
            max_radius: 3,
            originals_only: false,
            root_retention: RootRetention::Always,
            cache_capacity: 256,
            strict_resolve: false,
        }
    }
}

impl QueryConfig {
    /// Check a radius against `max_radius`.
    pub fn check_radius(&self, radius: usize) -> LineupResult<usize> {
        if radius > self.max_radius {
            return Err(LineupError::invalid_input(format!(
                "radius {} exceeds the maximum of {}",
                radius, self.max_radius
            )));
        }
        Ok(radius)
    }

    /// Query for `radius` and the filter flag under the configured root
    /// retention.
    pub fn neighborhood(&self, radius: usize, originals_only: bool) -> NeighborhoodQuery {
        NeighborhoodQuery::new(radius)
            .originals_only(originals_only)
            .root_retention(self.root_retention)
    }
}

/// `[build]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Handling of repeated entity labels.
    pub duplicates: DuplicatePolicy,
}

impl ExplorerConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> LineupResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LineupError::io(path, e))?;
        let config = Self::from_toml(&text).map_err(|e| LineupError::parse(path, e))?;
        config.validate()?;
        tracing::debug!(target: "lineup::config", path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if given and present, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> LineupResult<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                tracing::warn!(target: "lineup::config", path = %p.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> LineupResult<()> {
        if self.query.max_radius == 0 {
            return Err(LineupError::invalid_input("query.max_radius must be at least 1"));
        }
        if self.query.default_radius > self.query.max_radius {
            return Err(LineupError::invalid_input(format!(
                "query.default_radius ({}) exceeds query.max_radius ({})",
                self.query.default_radius, self.query.max_radius
            )));
        }
        Ok(())
    }

    /// Resolve the configured dataset location.
    pub fn dataset_source(&self) -> LineupResult<DatasetSource> {
        let d = &self.dataset;
        match (&d.json, &d.entities, &d.connections) {
            (Some(json), _, _) => Ok(DatasetSource::Json(json.clone())),
            (None, Some(entities), Some(connections)) => Ok(DatasetSource::Csv {
                entities: entities.clone(),
                connections: connections.clone(),
            }),
            _ => Err(LineupError::invalid_input(
                "dataset needs either 'json' or both 'entities' and 'connections'",
            )),
        }
    }

    /// Graph builder configured from `[build]`.
    pub fn graph_builder(&self) -> GraphBuilder {
        GraphBuilder::new().duplicate_policy(self.build.duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = ExplorerConfig::from_toml("").unwrap();
        assert_eq!(cfg, ExplorerConfig::default());
        assert_eq!(cfg.query.default_radius, 2);
        assert_eq!(cfg.query.max_radius, 3);
        assert!(!cfg.query.originals_only);
        assert_eq!(cfg.build.duplicates, DuplicatePolicy::LastWriteWins);
    }

    #[test]
    fn full_document() {
        let cfg = ExplorerConfig::from_toml(
            r#"
            [dataset]
            entities = "data/elements.csv"
            connections = "data/connections.csv"

            [query]
            default_radius = 1
            max_radius = 5
            originals_only = true
            root_retention = "filtered"
            cache_capacity = 0

            [build]
            duplicates = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.query.max_radius, 5);
        assert_eq!(cfg.query.root_retention, RootRetention::Filtered);
        assert_eq!(cfg.build.duplicates, DuplicatePolicy::Reject);
        assert_eq!(
            cfg.dataset_source().unwrap(),
            DatasetSource::Csv {
                entities: PathBuf::from("data/elements.csv"),
                connections: PathBuf::from("data/connections.csv"),
            }
        );
    }

    #[test]
    fn json_source_takes_precedence() {
        let cfg = ExplorerConfig::from_toml(
            r#"
            [dataset]
            json = "artists.json"
            entities = "e.csv"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.dataset_source().unwrap(),
            DatasetSource::Json(PathBuf::from("artists.json"))
        );
    }

    #[test]
    fn incomplete_dataset_is_invalid() {
        let cfg = ExplorerConfig::from_toml("[dataset]\nentities = \"e.csv\"\n").unwrap();
        assert!(matches!(
            cfg.dataset_source(),
            Err(LineupError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_policy_string_rejected() {
        assert!(ExplorerConfig::from_toml("[build]\nduplicates = \"merge\"\n").is_err());
    }

    #[test]
    fn validate_radius_bounds() {
        let mut cfg = ExplorerConfig::default();
        cfg.query.default_radius = 4;
        assert!(cfg.validate().is_err());
        cfg.query.default_radius = 0;
        cfg.query.max_radius = 0;
        assert!(cfg.validate().is_err());
        cfg.query.max_radius = 1;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn check_radius_bounded_by_max() {
        let query = QueryConfig::default();
        assert_eq!(query.check_radius(0).unwrap(), 0);
        assert_eq!(query.check_radius(3).unwrap(), 3);
        assert!(matches!(
            query.check_radius(4),
            Err(LineupError::InvalidInput { .. })
        ));
    }

    #[test]
    fn neighborhood_carries_root_retention() {
        let cfg = ExplorerConfig::from_toml("[query]\nroot_retention = \"filtered\"\n").unwrap();
        let q = cfg.query.neighborhood(3, true);
        assert_eq!(q.radius, 3);
        assert!(q.originals_only);
        assert_eq!(q.root_retention, RootRetention::Filtered);
    }

    #[test]
    fn strict_resolve_off_by_default() {
        assert!(!ExplorerConfig::default().query.strict_resolve);
        let cfg = ExplorerConfig::from_toml("[query]\nstrict_resolve = true\n").unwrap();
        assert!(cfg.query.strict_resolve);
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = ExplorerConfig::load_or_default(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg, ExplorerConfig::default());
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lineup.toml");
        std::fs::write(&path, "[query]\ndefault_radius = 9\n").unwrap();
        assert!(matches!(
            ExplorerConfig::load(&path),
            Err(LineupError::InvalidInput { .. })
        ));
    }
}
