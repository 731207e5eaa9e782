// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const BASE_WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_WHITE;

// ============================================================================
// SHAPE OUTLINES
// ============================================================================
const SHAPE_BORDER: Color = BASE_BLACK;
// Active shape border while editing
const ACTIVE_SHAPE_BORDER: Color = Color::from_rgb8(0x00, 0xc4, 0x00);

// ============================================================================
// OVERLAY TEXT
// ============================================================================
const OVERLAY_TEXT: Color = BASE_BLACK;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the drawing canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for shape borders
pub mod shape {
    use super::Color;
    pub const BORDER: Color = super::SHAPE_BORDER;
    pub const ACTIVE_BORDER: Color = super::ACTIVE_SHAPE_BORDER;
}

/// Colors for the cursor and canvas size readouts
pub mod overlay {
    use super::Color;
    pub const TEXT: Color = super::OVERLAY_TEXT;
}

/// Sizes for rendering
pub mod size {
    /// Width of a regular shape border
    pub const BORDER_WIDTH: f64 = 1.0;

    /// Width of the active shape border in edit mode (round caps and joins)
    pub const ACTIVE_BORDER_WIDTH: f64 = 5.0;
}
