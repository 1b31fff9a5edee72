//! Dataset loading and the immutable in-memory snapshot
//!
//! A [`Dataset`] bundles the record collection, the [`FieldIndex`] built over
//! it, and the allowed field set into one value constructed during startup
//! and shared read-only by every request handler. There is no reload path:
//! a failure here is fatal to the process.

use crate::index::FieldIndex;
use crate::model::FieldAccess;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Errors raised while loading the dataset file. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("failed to decode dataset file {path:?}: {error}")]
    Decode { path: PathBuf, error: String },
}

/// Immutable records + index + allowed field set, built once at startup.
#[derive(Debug)]
pub struct Dataset<T> {
    records: Vec<T>,
    index: FieldIndex,
    allowed: BTreeSet<String>,
}

impl<T: FieldAccess> Dataset<T> {
    /// Build a dataset from an already-loaded record collection.
    pub fn new(records: Vec<T>, allowed: BTreeSet<String>) -> Self {
        let index = FieldIndex::build(&allowed, &records);
        Self {
            records,
            index,
            allowed,
        }
    }

    /// Decode a JSON array of records from `path` and index it.
    pub fn from_json_file(path: &Path, allowed: BTreeSet<String>) -> Result<Self, DatasetError>
    where
        T: DeserializeOwned,
    {
        let file = File::open(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let reader = BufReader::new(file);

        let records: Vec<T> = serde_json::from_reader(reader).map_err(|e| DatasetError::Decode {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::info!(path = ?path, records = records.len(), "loaded dataset");

        Ok(Self::new(records, allowed))
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Records whose `field` stringifies to `value`, in dataset order.
    pub fn lookup(&self, field: &str, value: &str) -> Vec<&T> {
        self.index
            .positions(field, value)
            .iter()
            .map(|&pos| &self.records[pos])
            .collect()
    }

    /// The field index built over the records.
    pub fn index(&self) -> &FieldIndex {
        &self.index
    }

    /// The allowed field names this dataset was indexed with.
    pub fn allowed_fields(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
