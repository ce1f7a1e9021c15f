use crate::models::CatalogEntry;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Duplicate catalog entry name: {0}")]
    DuplicateName(String),
}

/// Load the catalog from a JSON array of `{ "name", "description" }` records
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>, CatalogError> {
    let path = path.as_ref();
    tracing::debug!("Loading catalog from {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    let entries = parse_catalog(&raw)?;

    tracing::info!("Loaded {} catalog entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse and validate catalog JSON
///
/// Entry names identify entries during selection, so they must be present
/// and unique. Catalog order is preserved.
pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;

    let mut names = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|source| CatalogError::InvalidEntry { index, source })?;

        if !names.insert(entry.name.as_str()) {
            return Err(CatalogError::DuplicateName(entry.name.clone()));
        }
    }

    Ok(entries)
}
