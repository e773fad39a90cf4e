//! Static content dataset loading.
//!
//! # Responsibility
//! - Decode JSON arrays of records for any record variant.
//! - Reject datasets that break the identity preconditions of the model.
//!
//! # Invariants
//! - Source order is preserved exactly.
//! - `id` is unique and `title` is non-blank for every returned record.

use crate::model::record::ContentRecord;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Dataset loading error.
#[derive(Debug)]
pub enum ContentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// Required field is blank at the given source position.
    MissingField {
        position: usize,
        field: &'static str,
    },
    /// Two records share one id.
    DuplicateId(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid content json: {err}"),
            Self::MissingField { position, field } => {
                write!(f, "record #{position} is missing required field `{field}`")
            }
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Decodes a JSON array of records and validates identity fields.
pub fn parse_records<R>(json: &str) -> Result<Vec<R>, ContentError>
where
    R: DeserializeOwned + ContentRecord,
{
    let records: Vec<R> = serde_json::from_str(json)?;
    validate_records(&records)?;
    Ok(records)
}

/// Reads and decodes a JSON dataset file.
pub fn load_records<R>(path: impl AsRef<Path>) -> Result<Vec<R>, ContentError>
where
    R: DeserializeOwned + ContentRecord,
{
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_records(&json) {
        Ok(records) => {
            info!(
                "event=content_loaded module=content status=ok records={}",
                records.len()
            );
            Ok(records)
        }
        Err(err) => {
            warn!("event=content_loaded module=content status=error");
            Err(err)
        }
    }
}

fn validate_records<R: ContentRecord>(records: &[R]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if record.title().trim().is_empty() {
            return Err(ContentError::MissingField {
                position,
                field: "title",
            });
        }
        if !seen.insert(record.id()) {
            return Err(ContentError::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}
