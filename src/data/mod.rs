// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) a UI shell drives.
//!
//! `AppState` owns the edit session together with the document-level
//! metadata around it: which file is being edited, whether it was ever
//! saved, the last error to show and when the file was last written.
//! File actions live in `file_io`.

mod file_io;

use crate::editing::EditSession;
use crate::tools::Mode;
use std::path::PathBuf;

/// Title shown for documents that were never saved
pub const NEW_FILE_NAME: &str = "New File";

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The canvas and its document
    pub session: EditSession,

    /// File the document was loaded from or last saved to
    pub current_file: Option<PathBuf>,

    /// Whether the document has never been written to disk
    pub is_new_file: bool,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// When the file was last saved (formatted time string for UI)
    pub last_saved: Option<String>,
}

impl AppState {
    /// Create application state with an empty document in polygon mode
    pub fn new() -> Self {
        Self {
            session: EditSession::new(Mode::default()),
            current_file: None,
            is_new_file: true,
            error_message: None,
            last_saved: None,
        }
    }

    /// Name of the current file for display
    pub fn file_display_name(&self) -> String {
        self.current_file
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| NEW_FILE_NAME.to_string())
    }

    /// Window title, e.g. "GeoCreator - [Editing] - drawing.json"
    pub fn window_title(&self) -> String {
        format!(
            "GeoCreator - [{}] - {}",
            self.session.mode().label(),
            self.file_display_name()
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
