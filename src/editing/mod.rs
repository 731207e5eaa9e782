// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod edit_types;
pub mod keyboard;
pub mod mouse;
pub mod session;

pub use edit_types::Update;
pub use keyboard::Key;
pub use mouse::{Modifiers, MouseButton, MouseDelegate, MouseEvent};
pub use session::EditSession;
