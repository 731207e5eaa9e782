// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, stroke widths) belongs in `theme.rs`.

use crate::editing::Key;

// ============================================================================
// TRANSFORM SETTINGS
// ============================================================================
/// Smallest scale factor a shape may have
const MIN_SCALE: f64 = 0.025;

/// Scale change per mouse wheel notch
const SCALE_STEP: f64 = 0.025;

/// Number of rotation steps in a full turn (one step = PI / 128 radians)
const ROTATION_STEPS_PER_TURN: i64 = 256;

// ============================================================================
// OUTLINE SETTINGS
// ============================================================================
/// Tolerance used when flattening circles into bezier paths
const PATH_TOLERANCE: f64 = 0.1;

// ============================================================================
// OVERLAY SETTINGS
// ============================================================================
/// Distance of the status readout from the left and bottom canvas edges
const OVERLAY_MARGIN: f64 = 5.0;

/// Distance of the canvas size readout from the right canvas edge
const OVERLAY_SIZE_READOUT_OFFSET: f64 = 135.0;

// ============================================================================
// KEY BINDINGS
// ============================================================================
/// Finishes the current shape in build modes
const NEW_SHAPE_KEY: Key = Key::Space;

/// Deletes the active shape in edit mode
const DELETE_SHAPE_KEY: Key = Key::Delete;

/// Held to make the mouse wheel rotate instead of scale
const ROTATE_MODIFIER_KEY: Key = Key::Control;

// ============================================================================
// EXPORT SETTINGS
// ============================================================================
/// Canvas size used by the command line export when none is given
const DEFAULT_EXPORT_WIDTH: u32 = 800;
const DEFAULT_EXPORT_HEIGHT: u32 = 600;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Shape transform settings (scale, rotation)
pub mod transform {
    /// Smallest scale factor a shape may have
    pub const MIN_SCALE: f64 = super::MIN_SCALE;

    /// Scale change per wheel notch
    pub const SCALE_STEP: f64 = super::SCALE_STEP;

    /// Rotation steps that make one full turn
    pub const ROTATION_STEPS_PER_TURN: i64 = super::ROTATION_STEPS_PER_TURN;

    /// Radians per rotation step
    pub const ROTATION_STEP: f64 = std::f64::consts::TAU / super::ROTATION_STEPS_PER_TURN as f64;
}

/// Outline construction settings
pub mod outline {
    /// Curve flattening tolerance for circle paths
    pub const PATH_TOLERANCE: f64 = super::PATH_TOLERANCE;
}

/// Debug overlay placement (cursor position and canvas size readouts)
pub mod overlay {
    pub const MARGIN: f64 = super::OVERLAY_MARGIN;
    pub const SIZE_READOUT_OFFSET: f64 = super::OVERLAY_SIZE_READOUT_OFFSET;
}

/// Canvas key bindings
pub mod keys {
    use crate::editing::Key;

    pub const NEW_SHAPE: Key = super::NEW_SHAPE_KEY;
    pub const DELETE_SHAPE: Key = super::DELETE_SHAPE_KEY;
    pub const ROTATE_MODIFIER: Key = super::ROTATE_MODIFIER_KEY;
}

/// Raster export defaults
pub mod export {
    pub const DEFAULT_WIDTH: u32 = super::DEFAULT_EXPORT_WIDTH;
    pub const DEFAULT_HEIGHT: u32 = super::DEFAULT_EXPORT_HEIGHT;
}
