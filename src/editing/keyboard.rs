// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Keys the editing core reacts to

/// A key, reduced to what the canvas cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Finish the current shape and start a new one (build modes)
    Space,
    /// Delete the active shape (edit mode)
    Delete,
    /// Held to make the wheel rotate instead of scale
    Control,
    /// Function keys F1..F12, used as mode hotkeys
    Function(u8),
    /// Any key without a canvas binding
    Other,
}
