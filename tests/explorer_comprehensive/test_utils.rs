//! Shared fixtures.

use std::path::PathBuf;

use lineup::{DatasetSource, ExplorerConfig};
use tempfile::TempDir;

pub const ELEMENTS_CSV: &str = "\
Label,Type
Queen,Band
Freddie Mercury,Musician
Brian May,Musician
Roger Taylor,Musician
John Deacon,Musician
The Cross,Band
Smile,Band
Tim Staffell,Musician
Humpy Bong,Band
";

pub const CONNECTIONS_CSV: &str = "\
From,To,Original Member
Freddie Mercury,Queen,YES
Brian May,Queen,YES
Roger Taylor,Queen,YES
John Deacon,Queen,NO
Roger Taylor,The Cross,YES
Brian May,Smile,YES
Roger Taylor,Smile,YES
Tim Staffell,Smile,YES
Tim Staffell,Humpy Bong,
Spike Edney,The Cross,NO
";

/// A temp directory holding the Queen family tree as two CSV files.
pub struct Fixture {
    pub dir: TempDir,
    pub entities: PathBuf,
    pub connections: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(ELEMENTS_CSV, CONNECTIONS_CSV)
    }

    pub fn with(elements: &str, connections: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let entities = dir.path().join("elements.csv");
        let conns = dir.path().join("connections.csv");
        std::fs::write(&entities, elements).unwrap();
        std::fs::write(&conns, connections).unwrap();
        Self {
            dir,
            entities,
            connections: conns,
        }
    }

    pub fn source(&self) -> DatasetSource {
        DatasetSource::Csv {
            entities: self.entities.clone(),
            connections: self.connections.clone(),
        }
    }

    pub fn config(&self) -> ExplorerConfig {
        let mut config = ExplorerConfig::default();
        config.dataset.entities = Some(self.entities.clone());
        config.dataset.connections = Some(self.connections.clone());
        config
    }
}

pub fn sorted(labels: Vec<&str>) -> Vec<&str> {
    let mut v = labels;
    v.sort_unstable();
    v
}
