// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction modes and the tools that implement them

use crate::editing::{MouseDelegate, MouseEvent, Update};
use crate::model::{Document, ShapeKind};

// ===== Mode =====

/// Interaction mode of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Clicks append vertices to one growing polygon
    #[default]
    BuildPolygon,
    /// Each pair of clicks spans a rectangle
    BuildRectangle,
    /// Each pair of clicks gives a center and a rim point
    BuildCircle,
    /// Clicks select, drag moves, wheel scales or rotates
    Edit,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 4] = [
        Mode::BuildPolygon,
        Mode::BuildRectangle,
        Mode::BuildCircle,
        Mode::Edit,
    ];

    /// Menu and title bar label
    pub fn label(self) -> &'static str {
        match self {
            Mode::BuildPolygon => "Creating Polygons",
            Mode::BuildRectangle => "Creating Rectangles",
            Mode::BuildCircle => "Creating Circles",
            Mode::Edit => "Editing",
        }
    }

    /// Kind of shape this mode builds, `None` for edit mode
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Mode::BuildPolygon => Some(ShapeKind::Polygon),
            Mode::BuildRectangle => Some(ShapeKind::Rectangle),
            Mode::BuildCircle => Some(ShapeKind::Circle),
            Mode::Edit => None,
        }
    }

    pub fn is_build(self) -> bool {
        self.shape_kind().is_some()
    }

    /// Function key (F1..F4) that switches to this mode
    pub fn hotkey(self) -> u8 {
        match self {
            Mode::BuildPolygon => 1,
            Mode::BuildRectangle => 2,
            Mode::BuildCircle => 3,
            Mode::Edit => 4,
        }
    }

    /// Mode bound to function key `n`, if any
    pub fn from_hotkey(n: u8) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.hotkey() == n)
    }

    /// Build mode for a shape kind
    pub fn for_kind(kind: ShapeKind) -> Mode {
        match kind {
            ShapeKind::Polygon => Mode::BuildPolygon,
            ShapeKind::Rectangle => Mode::BuildRectangle,
            ShapeKind::Circle => Mode::BuildCircle,
        }
    }
}

// ===== Tool Trait =====

/// A tool interprets pointer input against the document for one mode
pub trait Tool: MouseDelegate<Data = Document> {
    /// The mode this tool implements
    fn id(&self) -> Mode;

    /// Mouse wheel moved by `notches`; `rotate` when the rotate modifier is held
    fn wheel(&mut self, _notches: i32, _rotate: bool, _doc: &mut Document) -> Update {
        Update::None
    }
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Build(build::BuildTool),
    Edit(edit::EditTool),
}

impl ToolBox {
    /// Create the tool for a mode
    pub fn for_mode(mode: Mode) -> Self {
        match mode.shape_kind() {
            Some(kind) => ToolBox::Build(build::BuildTool::new(kind)),
            None => ToolBox::Edit(edit::EditTool::default()),
        }
    }

    /// Get the mode this tool implements
    pub fn id(&self) -> Mode {
        match self {
            ToolBox::Build(tool) => tool.id(),
            ToolBox::Edit(tool) => tool.id(),
        }
    }

    /// Handle mouse wheel
    pub fn wheel(&mut self, notches: i32, rotate: bool, doc: &mut Document) -> Update {
        match self {
            ToolBox::Build(tool) => tool.wheel(notches, rotate, doc),
            ToolBox::Edit(tool) => tool.wheel(notches, rotate, doc),
        }
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for ToolBox {
    type Data = Document;

    fn mouse_down(&mut self, event: MouseEvent, data: &mut Document) -> Update {
        match self {
            ToolBox::Build(tool) => tool.mouse_down(event, data),
            ToolBox::Edit(tool) => tool.mouse_down(event, data),
        }
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut Document) -> Update {
        match self {
            ToolBox::Build(tool) => tool.mouse_moved(event, data),
            ToolBox::Edit(tool) => tool.mouse_moved(event, data),
        }
    }

    fn mouse_up(&mut self, event: MouseEvent, data: &mut Document) -> Update {
        match self {
            ToolBox::Build(tool) => tool.mouse_up(event, data),
            ToolBox::Edit(tool) => tool.mouse_up(event, data),
        }
    }

    fn cancel(&mut self, data: &mut Document) {
        match self {
            ToolBox::Build(tool) => tool.cancel(data),
            ToolBox::Edit(tool) => tool.cancel(data),
        }
    }
}

// ===== Tool Modules =====

pub mod build;
pub mod edit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_hotkey(mode.hotkey()), Some(mode));
        }
        assert_eq!(Mode::from_hotkey(9), None);
    }

    #[test]
    fn build_modes_have_kinds() {
        assert!(!Mode::Edit.is_build());
        for kind in [ShapeKind::Polygon, ShapeKind::Rectangle, ShapeKind::Circle] {
            let mode = Mode::for_kind(kind);
            assert!(mode.is_build());
            assert_eq!(mode.shape_kind(), Some(kind));
        }
    }

    #[test]
    fn toolbox_matches_mode() {
        for mode in Mode::ALL {
            assert_eq!(ToolBox::for_mode(mode).id(), mode);
        }
    }
}
