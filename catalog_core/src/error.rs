use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {context}: {source}")]
    Json { context: String, source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json { context: context.into(), source }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::io("/data/users.json", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().contains("/data/users.json"));
        assert!(err.to_string().contains("gone"));

        let source = serde_json::from_str::<Vec<u64>>("[1,").unwrap_err();
        let err = CatalogError::json("products.json", source);
        assert!(err.to_string().starts_with("invalid JSON in products.json"));
    }
}
