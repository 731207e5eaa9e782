// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! The shape entity: an ordered point list plus fill and transform state.
//!
//! A `Shape` owns its points and caches its `Outline`. Every mutation that
//! touches the points, the scale or the rotation reshapes the outline, so
//! readers never see stale geometry. Identity is the `ShapeId` alone: two
//! shapes with identical geometry but different ids are different shapes.

use super::entity_id::ShapeId;
use super::outline::{self, Outline};
use crate::settings;
use kurbo::{Point, Vec2};
use peniko::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Geometric kind of a shape, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Closed path through every point
    Polygon,
    /// Axis-aligned rectangle spanned by the first two points
    Rectangle,
    /// Circle centered on the first point, through the second
    Circle,
}

impl ShapeKind {
    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// Opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShapeColor {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A random color, used as the fill of freshly started shapes
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::from_rgb8(rng.random(), rng.random(), rng.random())
    }

    /// Convert to a renderer color
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

/// A polygon, rectangle or circle on the canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    points: Vec<Point>,
    fill: ShapeColor,
    scale: f64,
    rotation_steps: i64,
    #[serde(skip)]
    active: bool,
    #[serde(skip)]
    outline: Option<Outline>,
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl Shape {
    /// Create an empty, inactive shape
    pub fn new(id: ShapeId, kind: ShapeKind, fill: ShapeColor) -> Self {
        tracing::debug!("Created {} shape {}", kind.label(), id);
        Self {
            id,
            kind,
            points: Vec::new(),
            fill,
            scale: 1.0,
            rotation_steps: 0,
            active: false,
            outline: None,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Stored points in insertion order
    ///
    /// These are pre-transform coordinates; the rendered position also
    /// depends on the scale and rotation.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill(&self) -> ShapeColor {
        self.fill
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation_steps(&self) -> i64 {
        self.rotation_steps
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cached outline, `None` until the shape has two points
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// A shape can be painted and hit tested once it has two points
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Rotation and scale anchor, `None` for a shape without points
    pub fn mid_point(&self) -> Option<Point> {
        outline::mid_point(self.kind, &self.points)
    }

    /// Whether `pt` is inside the transformed outline
    pub fn contains(&self, pt: Point) -> bool {
        self.outline.as_ref().is_some_and(|o| o.contains(pt))
    }

    /// Append a vertex
    pub fn add_point(&mut self, pt: Point) {
        self.points.push(pt);
        self.reshape();
    }

    /// Shift every point by `-delta`
    ///
    /// Drag handlers pass `last - current`, so the shape follows the pointer.
    pub fn move_by(&mut self, delta: Vec2) {
        for pt in &mut self.points {
            *pt -= delta;
        }
        self.reshape();
    }

    /// Change the scale factor by `diff`
    ///
    /// The change is dropped when it would take the factor below the floor.
    /// Returns whether it was applied.
    pub fn modify_scale(&mut self, diff: f64) -> bool {
        let scale = self.scale + diff;
        if scale < settings::transform::MIN_SCALE {
            tracing::debug!("Ignoring scale change to {} on shape {}", scale, self.id);
            return false;
        }
        self.scale = scale;
        self.reshape();
        true
    }

    /// Change the rotation by a number of PI/128 steps
    ///
    /// The counter wraps on overflow. A full turn is 256 steps, which divides
    /// 2^64, so wrapping never changes the angle.
    pub fn modify_rotation(&mut self, steps: i64) {
        self.rotation_steps = self.rotation_steps.wrapping_add(steps);
        self.reshape();
    }

    pub fn set_fill(&mut self, fill: ShapeColor) {
        self.fill = fill;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Recompute the cached outline from the current state
    pub(crate) fn reshape(&mut self) {
        self.outline =
            outline::compute_outline(self.kind, &self.points, self.scale, self.rotation_steps);
    }
}
