// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Build tool: turns primary clicks into shape vertices
//!
//! One tool serves all three build modes:
//! - Polygon: every click extends the active polygon
//! - Rectangle / Circle: clicks come in pairs; a third click starts a
//!   fresh shape before it is recorded

use crate::editing::{MouseDelegate, MouseEvent, Update};
use crate::model::{Document, ShapeKind};
use crate::tools::{Mode, Tool};

/// Appends clicked points to the active shape
#[derive(Debug, Clone)]
pub struct BuildTool {
    kind: ShapeKind,
}

impl BuildTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Whether the next click has to go into a newly started shape
    ///
    /// Besides the two-point limit of rectangles and circles this also covers
    /// a missing active shape (it was deleted while editing) and an active
    /// shape of another kind.
    fn needs_new_shape(&self, doc: &Document) -> bool {
        match doc.active() {
            None => true,
            Some(shape) if shape.kind() != self.kind => true,
            Some(shape) => self.kind != ShapeKind::Polygon && shape.points().len() >= 2,
        }
    }
}

impl Tool for BuildTool {
    fn id(&self) -> Mode {
        Mode::for_kind(self.kind)
    }
}

impl MouseDelegate for BuildTool {
    type Data = Document;

    fn mouse_down(&mut self, event: MouseEvent, doc: &mut Document) -> Update {
        if !event.is_primary() {
            return Update::None;
        }

        if self.needs_new_shape(doc) {
            doc.start_new_shape(self.kind);
        }

        let Some(shape) = doc.active_mut() else {
            return Update::None;
        };
        shape.add_point(event.pos);
        tracing::debug!(
            "Build tool: added {:?} to shape {} ({} points)",
            event.pos,
            shape.id(),
            shape.points().len()
        );
        Update::Redraw
    }
}
