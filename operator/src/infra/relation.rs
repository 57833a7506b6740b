//! Infrastructure implementation of the `RelationSource` port.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::application::ports::RelationSource;
use crate::domain::RawRelationRecord;

/// On-disk shape of the relation file.
#[derive(Debug, Deserialize)]
struct RelationFile {
    #[serde(default)]
    records: Vec<RawRelationRecord>,
}

/// Database relation data read from a JSON file.
///
/// The file exists once the relation is established. Its `records` hold one
/// databag per remote unit, possibly empty before the database publishes.
pub struct JsonRelationSource {
    path: PathBuf,
}

impl JsonRelationSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RelationSource for JsonRelationSource {
    fn load(&self) -> Result<Option<Vec<RawRelationRecord>>> {
        let path = &self.path;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let file: RelationFile = serde_json::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        Ok(Some(file.records))
    }
}
