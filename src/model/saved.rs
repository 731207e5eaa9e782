// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Persisted document state.
//!
//! A saved document is the ordered shape list plus the next free id, written
//! as JSON. Shapes are always stored inactive and without their outline;
//! loading validates the data before anything is handed back, so a corrupt
//! file can never partially replace a live document.

use super::document::Document;
use super::shape::Shape;
use crate::settings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tag written into every saved document
pub const FORMAT_TAG: &str = "geocreator-document";

/// Why a document could not be read or written
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be opened, read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a well-formed document
    #[error("wrong file type or corrupted data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Well-formed JSON that breaks a document invariant
    #[error("invalid document: {0}")]
    Invalid(String),
}

/// Serialized form of a `Document`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocument {
    pub format: String,
    pub shapes: Vec<Shape>,
    pub next_id: u64,
}

impl SavedDocument {
    /// Parse a document from JSON text
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the document as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a document file
    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the document to a file, replacing any existing contents
    pub fn write(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved {} shapes to {}", self.shapes.len(), path.display());
        Ok(())
    }
}

impl Document {
    /// Snapshot the document for saving; every shape is written inactive
    pub fn to_saved(&self) -> SavedDocument {
        let shapes = self
            .shapes()
            .iter()
            .cloned()
            .map(|mut shape| {
                shape.set_active(false);
                shape
            })
            .collect();
        SavedDocument {
            format: FORMAT_TAG.to_string(),
            shapes,
            next_id: self.next_id(),
        }
    }

    /// Validate a saved document and rebuild it with fresh outlines
    pub fn from_saved(saved: SavedDocument) -> Result<Document, DocumentError> {
        if saved.format != FORMAT_TAG {
            return Err(DocumentError::Invalid(format!(
                "unknown format tag {:?}",
                saved.format
            )));
        }
        if saved.next_id == u64::MAX {
            return Err(DocumentError::Invalid(
                "next id leaves no room for new shapes".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for shape in &saved.shapes {
            let id = shape.id();
            if !seen.insert(id) {
                return Err(DocumentError::Invalid(format!("duplicate shape id {id}")));
            }
            if id.get() >= saved.next_id {
                return Err(DocumentError::Invalid(format!(
                    "shape id {id} is not below next id {}",
                    saved.next_id
                )));
            }
            if !shape.points().iter().all(|p| p.is_finite()) {
                return Err(DocumentError::Invalid(format!(
                    "shape {id} has non-finite coordinates"
                )));
            }
            if !shape.scale().is_finite() || shape.scale() < settings::transform::MIN_SCALE {
                return Err(DocumentError::Invalid(format!(
                    "shape {id} has scale {} below the minimum",
                    shape.scale()
                )));
            }
        }

        let shapes = saved
            .shapes
            .into_iter()
            .map(|mut shape| {
                shape.set_active(false);
                shape.reshape();
                shape
            })
            .collect();
        Ok(Document::from_parts(shapes, saved.next_id))
    }
}
