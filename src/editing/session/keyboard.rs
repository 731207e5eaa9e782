// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard handling for the edit session

use super::EditSession;
use crate::editing::{Key, Update};
use crate::settings::keys;
use crate::tools::Mode;

impl EditSession {
    /// Handle a key press
    ///
    /// - F1..F4 switch mode
    /// - the new shape key finishes the current shape in build modes
    /// - the delete key removes the active shape in edit mode
    /// - the rotate modifier is latched until released
    pub fn key_down(&mut self, key: Key) -> Update {
        if key == keys::ROTATE_MODIFIER {
            self.rotate_modifier_held = true;
            return Update::None;
        }

        if let Key::Function(n) = key
            && let Some(mode) = Mode::from_hotkey(n)
        {
            return self.set_mode(mode);
        }

        match self.mode().shape_kind() {
            Some(kind) if key == keys::NEW_SHAPE => {
                self.document.start_new_shape(kind);
                Update::Redraw
            }
            None if key == keys::DELETE_SHAPE => self.delete_active(),
            _ => Update::None,
        }
    }

    /// Handle a key release
    pub fn key_up(&mut self, key: Key) -> Update {
        if key == keys::ROTATE_MODIFIER {
            self.rotate_modifier_held = false;
        }
        Update::None
    }
}
