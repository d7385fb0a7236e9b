//! The write-once record store.
//!
//! A [`RecordStore`] starts [`LoadState::Pending`] and holds no records. A
//! successful load moves it to [`LoadState::Loaded`] for the rest of the
//! session. A failed load moves it to [`LoadState::Failed`], keeps it empty,
//! and can be retried on request.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::record::{Lens, NumericField};

/// Where the catalog comes from.
pub trait CatalogSource {
    /// Short description used in logs.
    fn describe(&self) -> String;

    /// Reads the raw catalog document.
    fn read(&self) -> std::result::Result<String, LoadError>;
}

/// Catalog read from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> std::result::Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Catalog held in memory.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    json: &'a str,
}

impl<'a> StrSource<'a> {
    pub fn new(json: &'a str) -> Self {
        StrSource { json }
    }
}

impl CatalogSource for StrSource<'_> {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> std::result::Result<String, LoadError> {
        Ok(self.json.to_string())
    }
}

/// Decodes and validates a catalog document.
///
/// The whole array is accepted or nothing is: ids must be unique and no
/// physical measurement may be negative.
pub fn parse_catalog(json: &str) -> std::result::Result<Vec<Lens>, LoadError> {
    let records: Vec<Lens> = serde_json::from_str(json)?;
    validate_catalog(&records)?;
    Ok(records)
}

fn validate_catalog(records: &[Lens]) -> std::result::Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(records.len());
    for lens in records {
        if !seen.insert(lens.id) {
            return Err(LoadError::DuplicateId(lens.id));
        }
        if let Some(field) = NumericField::ALL
            .into_iter()
            .find(|field| lens.number(*field) < 0.0)
        {
            return Err(LoadError::NegativeField {
                id: lens.id,
                field: field.as_str(),
            });
        }
    }
    Ok(())
}

/// Load progress of a [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been attempted.
    #[default]
    Pending,
    /// The catalog is loaded and immutable.
    Loaded,
    /// The last attempt failed. The store is empty.
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

/// Holds the catalog for one session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Lens>,
    state: LoadState,
}

impl RecordStore {
    /// Creates an empty, pending store.
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Creates a store that is already loaded with `records`.
    ///
    /// The records go through the same validation as a document load.
    pub fn from_records(records: Vec<Lens>) -> std::result::Result<Self, LoadError> {
        validate_catalog(&records)?;
        Ok(RecordStore {
            records,
            state: LoadState::Loaded,
        })
    }

    /// Makes one load attempt and returns the number of records loaded.
    ///
    /// Refused with [`LoadError::AlreadyLoaded`] once the store is loaded;
    /// the loaded catalog is kept.
    pub fn load(&mut self, source: &dyn CatalogSource) -> std::result::Result<usize, LoadError> {
        if self.state.is_loaded() {
            return Err(LoadError::AlreadyLoaded);
        }

        let result = source.read().and_then(|json| parse_catalog(&json));
        match result {
            Ok(records) => {
                tracing::info!(
                    source = %source.describe(),
                    records = records.len(),
                    "catalog loaded"
                );
                let count = records.len();
                self.records = records;
                self.state = LoadState::Loaded;
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(source = %source.describe(), error = %err, "catalog load failed");
                self.records.clear();
                self.state = LoadState::Failed {
                    reason: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Retries a failed (or never attempted) load.
    pub fn retry(&mut self, source: &dyn CatalogSource) -> std::result::Result<usize, LoadError> {
        tracing::debug!(source = %source.describe(), state = ?self.state, "retrying catalog load");
        self.load(source)
    }

    /// The loaded records, or an empty slice when not loaded.
    pub fn records(&self) -> &[Lens] {
        &self.records
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
