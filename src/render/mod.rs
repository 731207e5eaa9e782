// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas painting
//!
//! `paint` walks the document in paint order and issues drawing calls on a
//! `Surface`. The surface decides what a fill or a stroke means: the raster
//! backend rasterizes with tiny-skia, a UI layer can forward to its own
//! renderer.

mod raster;

pub use raster::{ExportError, RasterSurface, export_png};

use crate::editing::EditSession;
use crate::settings;
use crate::theme;
use crate::tools::Mode;
use kurbo::{BezPath, Cap, Join, Point, Shape as _, Size, Stroke};
use peniko::{Color, Fill};

/// Something shapes can be painted onto
pub trait Surface {
    /// Size of the drawable area in pixels
    fn size(&self) -> Size;

    /// Fill a path
    fn fill(&mut self, path: &BezPath, color: Color, rule: Fill);

    /// Stroke a path
    fn stroke(&mut self, path: &BezPath, color: Color, style: &Stroke);

    /// Draw a line of text with its baseline starting at `pos`
    ///
    /// Surfaces without font support ignore text.
    fn text(&mut self, _pos: Point, _text: &str, _color: Color) {}
}

/// Options for a paint pass
#[derive(Debug, Clone, Copy)]
pub struct PaintOptions {
    /// Draw the cursor position and canvas size readouts
    pub show_overlay: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self { show_overlay: true }
    }
}

/// Paint the session's document onto `surface`
pub fn paint(surface: &mut impl Surface, session: &EditSession, options: PaintOptions) {
    let size = surface.size();
    let background = size.to_rect().to_path(settings::outline::PATH_TOLERANCE);
    surface.fill(&background, theme::canvas::BACKGROUND, Fill::NonZero);

    let editing = session.mode() == Mode::Edit;
    let border = border_stroke();
    let active_border = active_border_stroke();

    for shape in session.document().paint_order() {
        let Some(outline) = shape.outline() else {
            continue;
        };
        let path = outline.to_path();
        surface.fill(&path, shape.fill().to_color(), outline.fill_rule());

        if editing && shape.is_active() {
            surface.stroke(&path, theme::shape::ACTIVE_BORDER, &active_border);
        } else {
            surface.stroke(&path, theme::shape::BORDER, &border);
        }
    }

    if options.show_overlay {
        paint_overlay(surface, session.cursor_pos(), size);
    }
}

/// Cursor position (bottom left) and canvas size (bottom right) readouts
fn paint_overlay(surface: &mut impl Surface, cursor: Point, size: Size) {
    let margin = settings::overlay::MARGIN;
    let baseline = size.height - margin;

    surface.text(
        Point::new(margin, baseline),
        &cursor_readout(cursor),
        theme::overlay::TEXT,
    );
    surface.text(
        Point::new(size.width - settings::overlay::SIZE_READOUT_OFFSET, baseline),
        &size_readout(size),
        theme::overlay::TEXT,
    );
}

/// "PosX: 12px | PosY: 30px"
pub fn cursor_readout(cursor: Point) -> String {
    format!(
        "PosX: {}px | PosY: {}px",
        cursor.x.trunc() as i64,
        cursor.y.trunc() as i64
    )
}

/// "Canvas: 800 x 600"
pub fn size_readout(size: Size) -> String {
    format!(
        "Canvas: {} x {}",
        size.width.trunc() as i64,
        size.height.trunc() as i64
    )
}

fn border_stroke() -> Stroke {
    Stroke::new(theme::size::BORDER_WIDTH)
        .with_join(Join::Miter)
        .with_caps(Cap::Square)
        .with_miter_limit(10.0)
}

fn active_border_stroke() -> Stroke {
    Stroke::new(theme::size::ACTIVE_BORDER_WIDTH)
        .with_join(Join::Round)
        .with_caps(Cap::Round)
}
