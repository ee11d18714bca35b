use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::reference::ReferenceText;
use crate::matching::engine::TextMatcher;
use crate::parsing::text::{read_text, ParseError};
use crate::utils::validation::{
    check_reference_limit, check_text_size, validate_reference_name, ValidationError,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid reference: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Failed to read reference text {path}: {source}")]
    TextError { path: PathBuf, source: ParseError },

    #[error("No reference texts found in {0}")]
    EmptyDirectory(PathBuf),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub references: Vec<ReferenceText>,
}

/// An ordered collection of named reference texts
#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    /// All references, in insertion order
    pub references: Vec<ReferenceText>,
}

impl TextCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            references: Vec::new(),
        }
    }

    /// Load the embedded default catalog of common permissive licenses
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails to parse or validate.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/licenses.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or any
    /// error from [`TextCatalog::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded catalog {} with {} references",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON, or
    /// `CatalogError::ValidationError` if a reference is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for reference in data.references {
            catalog.add_reference(reference)?;
        }

        Ok(catalog)
    }

    /// Build a catalog from a directory of text files.
    ///
    /// Every regular file becomes one reference named after its file stem.
    /// Files are added in file-name order so the result does not depend on
    /// directory iteration order. Subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the directory cannot be listed,
    /// `CatalogError::TextError` if a file cannot be read as text, or
    /// `CatalogError::EmptyDirectory` if no files were found.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(CatalogError::EmptyDirectory(dir.to_path_buf()));
        }

        let mut catalog = Self::new();
        for path in paths {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let text = read_text(&path).map_err(|source| CatalogError::TextError {
                path: path.clone(),
                source,
            })?;

            debug!("Read reference '{}' from {}", name, path.display());
            catalog.add_reference(ReferenceText::new(name, text))?;
        }

        info!(
            "Loaded {} references from {}",
            catalog.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// Add a reference to the catalog
    ///
    /// Names may repeat; each reference is kept as a separate entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ValidationError` if the name is invalid, the text
    /// is too large, or the catalog is full.
    pub fn add_reference(&mut self, reference: ReferenceText) -> Result<(), CatalogError> {
        validate_reference_name(&reference.name)?;
        check_text_size(reference.text.len())?;
        check_reference_limit(self.references.len())?;

        if self.get(&reference.name).is_some() {
            warn!("Duplicate reference name '{}'", reference.name);
        }

        self.references.push(reference);
        Ok(())
    }

    /// Get the first reference with the given name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReferenceText> {
        self.references.iter().find(|r| r.name == name)
    }

    /// Build a matcher with every reference registered in catalog order
    #[must_use]
    pub fn matcher(&self) -> TextMatcher {
        TextMatcher::from_references(&self.references)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            references: self.references.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of references in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
