//! Dataset loading.
//!
//! The dataset is two tables: elements (`Label`, `Type`) and connections
//! (`From`, `To`, `Original Member`). They can come from a pair of CSV
//! files or from one JSON document holding both tables:
//!
//! ```json
//! {
//!   "elements": [{"Label": "Queen", "Type": "Band"}],
//!   "connections": [{"From": "Freddie", "To": "Queen", "Original Member": "YES"}]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use lineup_core::{ConnectionRecord, EntityRecord, LineupError, LineupResult};

use crate::graph::{GraphBuilder, GraphStore};

/// Where a dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Two CSV files.
    Csv {
        /// Elements table.
        entities: PathBuf,
        /// Connections table.
        connections: PathBuf,
    },
    /// One JSON document with `elements` and `connections` arrays.
    Json(PathBuf),
}

impl DatasetSource {
    /// Pick the format from file extensions.
    ///
    /// One `.json` path is a JSON document; two `.csv` paths are the
    /// elements and connections tables, in that order. Extensions are
    /// matched ignoring case.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> LineupResult<Self> {
        match paths {
            [one] if has_extension(one.as_ref(), "json") => {
                Ok(DatasetSource::Json(one.as_ref().to_path_buf()))
            }
            [entities, connections]
                if has_extension(entities.as_ref(), "csv")
                    && has_extension(connections.as_ref(), "csv") =>
            {
                Ok(DatasetSource::Csv {
                    entities: entities.as_ref().to_path_buf(),
                    connections: connections.as_ref().to_path_buf(),
                })
            }
            _ => Err(LineupError::invalid_input(
                "expected one .json file or an elements .csv and a connections .csv",
            )),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(ext))
}

/// Both input tables, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Elements table.
    #[serde(alias = "Elements", alias = "entities", default)]
    pub elements: Vec<EntityRecord>,
    /// Connections table.
    #[serde(alias = "Connections", default)]
    pub connections: Vec<ConnectionRecord>,
}

impl Dataset {
    /// Load from the given source.
    pub fn load(source: &DatasetSource) -> LineupResult<Self> {
        match source {
            DatasetSource::Csv {
                entities,
                connections,
            } => load_csv(entities, connections),
            DatasetSource::Json(path) => load_json(path),
        }
    }

    /// Load from paths, choosing the format by extension.
    ///
    /// See [`DatasetSource::from_paths`].
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> LineupResult<Self> {
        Self::load(&DatasetSource::from_paths(paths)?)
    }

    /// Build a graph from the loaded tables.
    pub fn build(&self, builder: &GraphBuilder) -> LineupResult<GraphStore> {
        builder.build(&self.elements, &self.connections)
    }
}

/// Load both tables from CSV files with a header row.
///
/// Optional columns (`Type`, `Original Member`) may be absent entirely;
/// empty cells read as missing.
pub fn load_csv(entities: &Path, connections: &Path) -> LineupResult<Dataset> {
    let elements: Vec<EntityRecord> = read_csv::<CsvEntityRow>(entities)?
        .into_iter()
        .map(Into::into)
        .collect();
    let connections: Vec<ConnectionRecord> = read_csv::<CsvConnectionRow>(connections)?
        .into_iter()
        .map(Into::into)
        .collect();
    tracing::info!(
        target: "lineup::load",
        elements = elements.len(),
        connections = connections.len(),
        "Loaded CSV dataset"
    );
    Ok(Dataset {
        elements,
        connections,
    })
}

/// Load both tables from a single JSON document.
pub fn load_json(path: &Path) -> LineupResult<Dataset> {
    let file = File::open(path).map_err(|e| LineupError::io(path, e))?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LineupError::parse(path, e))?;
    tracing::info!(
        target: "lineup::load",
        elements = dataset.elements.len(),
        connections = dataset.connections.len(),
        "Loaded JSON dataset"
    );
    Ok(dataset)
}

// CSV cells are read verbatim. The shared records coerce JSON numbers to
// strings, and through `csv` that would reformat labels such as `007`.
#[derive(Deserialize)]
struct CsvEntityRow {
    #[serde(rename = "Label", alias = "label", default)]
    label: Option<String>,
    #[serde(rename = "Type", alias = "type", default)]
    node_type: Option<String>,
}

impl From<CsvEntityRow> for EntityRecord {
    fn from(row: CsvEntityRow) -> Self {
        EntityRecord {
            label: row.label,
            node_type: row.node_type,
        }
    }
}

#[derive(Deserialize)]
struct CsvConnectionRow {
    #[serde(rename = "From", alias = "from", default)]
    from: Option<String>,
    #[serde(rename = "To", alias = "to", default)]
    to: Option<String>,
    #[serde(rename = "Original Member", alias = "original_member", default)]
    original_member: Option<String>,
}

impl From<CsvConnectionRow> for ConnectionRecord {
    fn from(row: CsvConnectionRow) -> Self {
        ConnectionRecord {
            from: row.from,
            to: row.to,
            original_member: row.original_member,
        }
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> LineupResult<Vec<T>> {
    let file = File::open(path).map_err(|e| LineupError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|e| LineupError::parse(path, e))?;
        rows.push(row);
    }
    Ok(rows)
}
