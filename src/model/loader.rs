//! Model loading functionality
//!
//! Loads a model from a packaged template archive (ZIP) or from an already
//! extracted model document, decoding and coercing it into a [`DataModel`].

use super::LoadError;
use super::document::{decode_document_text, parse_model_text};
use crate::config::AuditConfig;
use crate::models::{DataModel, Relationship};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::{info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

/// Local file header signature that starts every ZIP archive
const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Model loader for template archives and model documents
#[derive(Debug, Clone, Default)]
pub struct ModelLoader {
    config: AuditConfig,
}

impl ModelLoader {
    /// Create a new model loader with the given configuration
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Load a model from a file on disk.
    ///
    /// ZIP archives are read as template packages; anything else is parsed as
    /// a model document.
    pub fn load_path(&self, path: &Path) -> Result<ModelLoadResult, LoadError> {
        let mut file = File::open(path)?;
        let mut signature = [0u8; 4];
        let read = file.read(&mut signature)?;
        file.rewind()?;

        let result = if read == ZIP_SIGNATURE.len() && signature == ZIP_SIGNATURE {
            self.load_archive(BufReader::new(file))?
        } else {
            let mut bytes = Vec::new();
            file.take(self.config.max_document_bytes.saturating_add(1))
                .read_to_end(&mut bytes)?;
            self.check_size(&path.display().to_string(), bytes.len() as u64)?;
            self.load_document_bytes(&bytes)?
        };

        info!(
            "Loaded {} tables and {} relationships from {}",
            result.model.tables.len(),
            result.model.relationships.len(),
            path.display()
        );
        Ok(result)
    }

    /// Load the model document from a template archive
    pub fn load_archive<R: Read + Seek>(&self, reader: R) -> Result<ModelLoadResult, LoadError> {
        let mut archive = ZipArchive::new(reader).map_err(|err| match err {
            ZipError::Io(e) => LoadError::Io(e),
            other => LoadError::NotAnArchive(other.to_string()),
        })?;

        let entry_name = self.config.schema_entry.as_str();
        let mut entry = archive.by_name(entry_name).map_err(|err| match err {
            ZipError::FileNotFound => LoadError::EntryNotFound {
                entry: entry_name.to_string(),
            },
            ZipError::Io(e) => LoadError::Io(e),
            other => LoadError::NotAnArchive(other.to_string()),
        })?;

        self.check_size(entry_name, entry.size())?;

        let mut bytes = Vec::new();
        (&mut entry)
            .take(self.config.max_document_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        self.check_size(entry_name, bytes.len() as u64)?;

        self.load_document_bytes(&bytes)
    }

    /// Decode and parse raw model document bytes
    pub fn load_document_bytes(&self, bytes: &[u8]) -> Result<ModelLoadResult, LoadError> {
        let text = decode_document_text(bytes)?;
        let model = parse_model_text(&text)?;
        Ok(ModelLoadResult::new(model))
    }

    fn check_size(&self, entry: &str, size: u64) -> Result<(), LoadError> {
        let limit = self.config.max_document_bytes;
        if size > limit {
            return Err(LoadError::EntryTooLarge {
                entry: entry.to_string(),
                size,
                limit,
            });
        }
        Ok(())
    }
}

/// Result of loading a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLoadResult {
    pub model: DataModel,
    /// Relationships with at least one endpoint that names no existing
    /// column. They stay in `model.relationships`; this is a diagnostic copy.
    pub dangling_relationships: Vec<Relationship>,
}

impl ModelLoadResult {
    pub fn new(model: DataModel) -> Self {
        let dangling_relationships: Vec<Relationship> = model
            .relationships
            .iter()
            .filter(|rel| {
                let from_exists = rel.from_key().is_some_and(|(t, c)| model.has_column(t, c));
                let to_exists = rel.to_key().is_some_and(|(t, c)| model.has_column(t, c));
                if !(from_exists && to_exists) {
                    warn!(
                        "Dangling relationship {} -> {}: from exists: {}, to exists: {}",
                        endpoint(rel.from_key()),
                        endpoint(rel.to_key()),
                        from_exists,
                        to_exists
                    );
                }
                !(from_exists && to_exists)
            })
            .cloned()
            .collect();

        Self {
            model,
            dangling_relationships,
        }
    }
}

/// `table[column]`, or `<absent>` for a missing side
pub(crate) fn endpoint(key: Option<(&str, &str)>) -> String {
    match key {
        Some((table, column)) => format!("{}[{}]", table, column),
        None => "<absent>".to_string(),
    }
}
