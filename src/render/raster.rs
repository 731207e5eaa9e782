// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Raster surface backed by tiny-skia, and PNG export

use super::{PaintOptions, Surface, paint};
use crate::editing::EditSession;
use image::{ImageFormat, Rgb, RgbImage};
use kurbo::{BezPath, Cap, Join, PathEl, Size, Stroke};
use peniko::{Color, Fill};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

/// Errors from rendering the canvas to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to create {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// An RGBA pixel buffer that shapes are rasterized into
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Opaque color of a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue()])
    }

    /// Copy the pixels into an RGB image, dropping alpha
    pub fn to_rgb_image(&self) -> RgbImage {
        let data = self.pixmap.data();
        let width = self.width();
        RgbImage::from_fn(width, self.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    fn fill(&mut self, path: &BezPath, color: Color, rule: Fill) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let rule = match rule {
            Fill::NonZero => FillRule::Winding,
            Fill::EvenOdd => FillRule::EvenOdd,
        };
        self.pixmap
            .fill_path(&path, &solid_paint(color), rule, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &BezPath, color: Color, style: &Stroke) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: style.width as f32,
            miter_limit: style.miter_limit as f32,
            line_cap: match style.start_cap {
                Cap::Butt => LineCap::Butt,
                Cap::Square => LineCap::Square,
                Cap::Round => LineCap::Round,
            },
            line_join: match style.join {
                Join::Bevel => LineJoin::Bevel,
                Join::Miter => LineJoin::Miter,
                Join::Round => LineJoin::Round,
            },
            dash: None,
        };
        self.pixmap
            .stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path; `None` for empty or degenerate paths
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Render the session's document to a PNG file
///
/// The cursor and canvas size readouts are never part of the image.
pub fn export_png(
    session: &EditSession,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<(), ExportError> {
    let mut surface = RasterSurface::new(width, height)?;
    paint(&mut surface, session, PaintOptions { show_overlay: false });

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    surface
        .to_rgb_image()
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Exported {}x{} PNG to {}", width, height, path.display());
    Ok(())
}
