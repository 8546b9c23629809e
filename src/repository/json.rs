//! JSON array documents, one per collection

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{AppError, AppResult};

/// Read a collection from `path`. A missing file is an empty collection.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No data file, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(AppError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a collection to `path` as a JSON array indented by four spaces
pub fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut serializer).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, buf).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = items.len(), "Collection written");
    Ok(())
}
