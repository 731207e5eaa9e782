// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Actions offered by the shape menu for the active shape

use super::EditSession;
use crate::editing::{MouseDelegate, Update};
use crate::model::ShapeColor;

impl EditSession {
    /// Set the fill color of the active shape
    pub fn set_active_fill(&mut self, fill: ShapeColor) -> Update {
        match self.document.active_mut() {
            Some(shape) => {
                shape.set_fill(fill);
                Update::Redraw
            }
            None => Update::None,
        }
    }

    /// Delete the active shape; nothing becomes active afterwards
    pub fn delete_active(&mut self) -> Update {
        let Some(id) = self.document.active_id() else {
            return Update::None;
        };
        self.current_tool.cancel(&mut self.document);
        match self.document.delete(id) {
            Some(_) => Update::Redraw,
            None => Update::None,
        }
    }

    /// Move the active shape to the top layer
    pub fn active_to_front(&mut self) -> Update {
        match self.document.active_id() {
            Some(id) if self.document.bring_to_front(id) => Update::Redraw,
            _ => Update::None,
        }
    }

    /// Move the active shape to the bottom layer
    pub fn active_to_back(&mut self) -> Update {
        match self.document.active_id() {
            Some(id) if self.document.send_to_back(id) => Update::Redraw,
            _ => Update::None,
        }
    }
}
