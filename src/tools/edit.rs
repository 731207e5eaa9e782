// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit tool: select, drag, scale and rotate existing shapes

use crate::editing::{MouseButton, MouseDelegate, MouseEvent, Update};
use crate::model::Document;
use crate::settings;
use crate::tools::{Mode, Tool};
use kurbo::Point;

// ===== Gesture State =====

/// State of the drag gesture
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum GestureState {
    /// No shape grabbed
    #[default]
    Ready,
    /// Primary button went down inside the active shape
    Grabbed { last: Point },
}

// ===== EditTool Struct =====

/// Selects the topmost shape under the pointer and manipulates it
#[derive(Debug, Clone, Default)]
pub struct EditTool {
    gesture: GestureState,
}

impl EditTool {
    /// Whether a shape is currently grabbed for dragging
    pub fn is_grabbed(&self) -> bool {
        matches!(self.gesture, GestureState::Grabbed { .. })
    }
}

// ===== Tool Implementation =====

impl Tool for EditTool {
    fn id(&self) -> Mode {
        Mode::Edit
    }

    fn wheel(&mut self, notches: i32, rotate: bool, doc: &mut Document) -> Update {
        let Some(shape) = doc.active_mut() else {
            return Update::None;
        };

        if rotate {
            shape.modify_rotation(i64::from(notches));
        } else {
            shape.modify_scale(f64::from(notches) * settings::transform::SCALE_STEP);
        }
        tracing::debug!(
            "Edit tool: shape {} now at scale {}, rotation {}",
            shape.id(),
            shape.scale(),
            shape.rotation_steps()
        );
        Update::Redraw
    }
}

// ===== MouseDelegate Implementation =====

impl MouseDelegate for EditTool {
    type Data = Document;

    fn mouse_down(&mut self, event: MouseEvent, doc: &mut Document) -> Update {
        doc.deactivate();
        self.gesture = GestureState::Ready;

        let Some(id) = doc.hit_test_topmost(event.pos) else {
            tracing::debug!("Edit tool: nothing under {:?}", event.pos);
            return Update::Redraw;
        };

        // Promote so the clicked shape stays topmost for the drag and the
        // next hit test
        doc.set_active(id);
        doc.bring_to_front(id);
        if event.is_primary() {
            self.gesture = GestureState::Grabbed { last: event.pos };
        }
        tracing::debug!("Edit tool: selected shape {}", id);
        Update::Redraw
    }

    fn mouse_moved(&mut self, event: MouseEvent, doc: &mut Document) -> Update {
        let GestureState::Grabbed { last } = self.gesture else {
            return Update::None;
        };

        if let Some(shape) = doc.active_mut() {
            shape.move_by(last - event.pos);
        }
        self.gesture = GestureState::Grabbed { last: event.pos };
        Update::Redraw
    }

    fn mouse_up(&mut self, event: MouseEvent, doc: &mut Document) -> Update {
        self.gesture = GestureState::Ready;

        if event.button != Some(MouseButton::Right) {
            return Update::None;
        }
        match doc.active() {
            Some(shape) => Update::ShowShapeMenu {
                pos: event.pos,
                fill: shape.fill(),
            },
            None => Update::None,
        }
    }

    fn cancel(&mut self, _doc: &mut Document) {
        self.gesture = GestureState::Ready;
    }
}
