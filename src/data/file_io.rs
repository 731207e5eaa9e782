// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! File operations for AppState (new, open, save, export)

use super::AppState;
use crate::model::SavedDocument;
use crate::render;
use chrono::Local;
use std::path::{Path, PathBuf};

impl AppState {
    /// Discard the document and start over with a single new shape
    pub fn new_file(&mut self) {
        self.session.new_document();
        self.current_file = None;
        self.is_new_file = true;
        self.error_message = None;
        self.last_saved = None;
        tracing::info!("Created new file");
    }

    /// Load a document from a path
    ///
    /// On failure the current document is kept and the error is stored in
    /// `error_message`.
    pub fn open(&mut self, path: PathBuf) {
        let result = SavedDocument::read(&path)
            .and_then(|saved| self.session.load_document(saved));
        match result {
            Ok(_) => {
                tracing::info!(
                    "Opened {} ({} shapes)",
                    path.display(),
                    self.session.document().len()
                );
                self.current_file = Some(path);
                self.is_new_file = false;
                self.error_message = None;
                self.last_saved = None;
            }
            Err(e) => {
                let error = format!("Failed to open {}: {}", path.display(), e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Save to the current file
    ///
    /// A document that was never saved has no file yet; the UI should ask
    /// for one and call `save_as`.
    pub fn save(&mut self) {
        let path = match (&self.current_file, self.is_new_file) {
            (Some(path), false) => path.clone(),
            _ => {
                self.error_message = Some("No file to save to, use Save As".to_string());
                return;
            }
        };
        self.write_to(&path);
    }

    /// Save to `path` and make it the current file
    pub fn save_as(&mut self, path: PathBuf) {
        if self.write_to(&path) {
            self.current_file = Some(path);
            self.is_new_file = false;
        }
    }

    /// Render the canvas to a PNG file, without the cursor and size readouts
    pub fn export_png(&mut self, path: &Path, width: u32, height: u32) {
        match render::export_png(&self.session, width, height, path) {
            Ok(()) => {
                self.error_message = None;
            }
            Err(e) => {
                let error = format!("Failed to export: {}", e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Get the last saved time string
    pub fn last_saved_display(&self) -> Option<&str> {
        self.last_saved.as_deref()
    }

    fn write_to(&mut self, path: &Path) -> bool {
        match self.session.saved_document().write(path) {
            Ok(()) => {
                tracing::info!("Saved: {}", path.display());
                self.error_message = None;
                self.last_saved = Some(Local::now().format("%I:%M %p").to_string());
                true
            }
            Err(e) => {
                let error = format!("Failed to save: {}", e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
                false
            }
        }
    }
}
