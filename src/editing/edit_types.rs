// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Notifications sent from the editing core back to the UI layer

use crate::model::ShapeColor;
use kurbo::Point;

/// What the UI should do after an input event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    /// Nothing visible changed
    None,

    /// The document or overlay changed; repaint the canvas
    Redraw,

    /// Open the shape menu (fill color, delete, layer order) for the active
    /// shape at `pos`, with the picker preset to `fill`
    ShowShapeMenu { pos: Point, fill: ShapeColor },
}

impl Update {
    /// Whether the canvas needs a repaint
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Update::None)
    }

    /// Combine two updates, keeping the more significant one
    pub fn or(self, other: Update) -> Update {
        match (self, other) {
            (menu @ Update::ShowShapeMenu { .. }, _) => menu,
            (_, menu @ Update::ShowShapeMenu { .. }) => menu,
            (Update::None, Update::None) => Update::None,
            _ => Update::Redraw,
        }
    }
}
