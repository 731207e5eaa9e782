// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input types and the delegate trait tools implement

use super::edit_types::Update;
use kurbo::Point;

/// Mouse buttons the canvas distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button: adds points, grabs shapes
    Left,
    /// Secondary button: selects without grabbing, opens the shape menu
    Right,
    Middle,
}

/// Modifier keys held during a pointer event
///
/// Only ctrl changes canvas behavior (the wheel rotates).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
}

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Position in canvas pixels
    pub pos: Point,
    /// Button that changed state; `None` for plain moves
    pub button: Option<MouseButton>,
    pub mods: Modifiers,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self::with_modifiers(pos, button, Modifiers::default())
    }

    pub fn with_modifiers(pos: Point, button: Option<MouseButton>, mods: Modifiers) -> Self {
        Self { pos, button, mods }
    }

    /// Whether this event is for the primary button
    pub fn is_primary(&self) -> bool {
        self.button == Some(MouseButton::Left)
    }
}

/// Receives pointer events for some piece of editable data
///
/// Every method has a no-op default so implementors only handle what they
/// care about.
pub trait MouseDelegate {
    type Data;

    /// A button was pressed
    fn mouse_down(&mut self, _event: MouseEvent, _data: &mut Self::Data) -> Update {
        Update::None
    }

    /// The pointer moved, with or without a button held
    fn mouse_moved(&mut self, _event: MouseEvent, _data: &mut Self::Data) -> Update {
        Update::None
    }

    /// A button was released
    fn mouse_up(&mut self, _event: MouseEvent, _data: &mut Self::Data) -> Update {
        Update::None
    }

    /// Abandon any gesture in progress
    fn cancel(&mut self, _data: &mut Self::Data) {}
}
