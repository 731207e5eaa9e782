// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline construction: from a kind, its points and its transform
//! parameters to the final geometry used for painting and hit testing.
//!
//! An `Outline` keeps the untransformed primitive (a polygon path, an
//! axis-aligned rectangle or a circle) together with the composed `Affine`.
//! Painting asks for the transformed `BezPath`; hit testing maps the query
//! point through the inverse transform and tests the exact primitive, so
//! circles and rectangles are never flattened for containment.
//!
//! The transform is built as rotate-about-midpoint, then a compensating
//! translate of `mid * (1 - scale)`, then a scale about the origin. Applied
//! to a point this scales about the midpoint first and rotates about it
//! second. Shapes saved by earlier versions depend on this exact order.

use super::shape::ShapeKind;
use crate::settings;
use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape as KurboShape, Vec2};
use peniko::Fill;

/// Untransformed geometry of a drawable shape
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Closed path through the points in insertion order
    Polygon(BezPath),
    /// Normalized rectangle spanned by the first two points
    Rect(Rect),
    /// Circle around the first point through the second
    Circle(Circle),
}

/// Final, transform-applied geometry of a shape
#[derive(Debug, Clone)]
pub struct Outline {
    primitive: Primitive,
    transform: Affine,
}

/// Build the outline for a shape, or `None` when it has fewer than two points
pub fn compute_outline(
    kind: ShapeKind,
    points: &[Point],
    scale: f64,
    rotation_steps: i64,
) -> Option<Outline> {
    if points.len() < 2 {
        return None;
    }

    let primitive = match kind {
        ShapeKind::Polygon => Primitive::Polygon(polygon_path(points)),
        ShapeKind::Rectangle => Primitive::Rect(normalized_rect(points[0], points[1])),
        ShapeKind::Circle => Primitive::Circle(Circle::new(points[0], points[0].distance(points[1]))),
    };

    let mid = mid_point(kind, points)?;
    Some(Outline {
        primitive,
        transform: shape_transform(mid, scale, rotation_steps),
    })
}

/// Centroid used as the rotation and scale anchor
///
/// Circles anchor at their center; polygons and rectangles at the
/// arithmetic mean of all stored points.
pub fn mid_point(kind: ShapeKind, points: &[Point]) -> Option<Point> {
    let first = *points.first()?;
    if kind == ShapeKind::Circle {
        return Some(first);
    }

    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / points.len() as f64).to_point())
}

/// Compose the rotate, compensating translate and scale steps
pub fn shape_transform(mid: Point, scale: f64, rotation_steps: i64) -> Affine {
    // Reduce first so huge step counts keep their exact angle
    let steps = rotation_steps.rem_euclid(settings::transform::ROTATION_STEPS_PER_TURN);
    let angle = steps as f64 * settings::transform::ROTATION_STEP;
    Affine::rotate_about(angle, mid)
        * Affine::translate(mid.to_vec2() * (1.0 - scale))
        * Affine::scale(scale)
}

fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for &pt in &points[1..] {
        path.line_to(pt);
    }
    path.close_path();
    path
}

fn normalized_rect(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

impl Outline {
    /// The untransformed primitive
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// The transform applied to the primitive
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Whether `pt` lies inside the transformed outline
    pub fn contains(&self, pt: Point) -> bool {
        let local = self.transform.inverse() * pt;
        match &self.primitive {
            // Even-odd, so self-intersecting polygons have holes
            Primitive::Polygon(path) => path.winding(local) % 2 != 0,
            Primitive::Rect(rect) => rect.contains(local),
            Primitive::Circle(circle) => circle.contains(local),
        }
    }

    /// The transformed outline as a path, ready for a rasterizer
    pub fn to_path(&self) -> BezPath {
        let tolerance = settings::outline::PATH_TOLERANCE;
        let local = match &self.primitive {
            Primitive::Polygon(path) => path.clone(),
            Primitive::Rect(rect) => rect.to_path(tolerance),
            Primitive::Circle(circle) => circle.to_path(tolerance),
        };
        self.transform * local
    }

    /// Fill rule to use when painting `to_path`
    pub fn fill_rule(&self) -> Fill {
        match self.primitive {
            Primitive::Polygon(_) => Fill::EvenOdd,
            Primitive::Rect(_) | Primitive::Circle(_) => Fill::NonZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn fewer_than_two_points_has_no_outline() {
        for kind in [ShapeKind::Polygon, ShapeKind::Rectangle, ShapeKind::Circle] {
            assert!(compute_outline(kind, &[], 1.0, 0).is_none());
            assert!(compute_outline(kind, &pts(&[(3.0, 4.0)]), 1.0, 0).is_none());
        }
    }

    #[test]
    fn rectangle_ignores_corner_order() {
        let forward = compute_outline(ShapeKind::Rectangle, &pts(&[(10.0, 10.0), (50.0, 40.0)]), 1.0, 0).unwrap();
        let backward = compute_outline(ShapeKind::Rectangle, &pts(&[(50.0, 40.0), (10.0, 10.0)]), 1.0, 0).unwrap();
        let mixed = compute_outline(ShapeKind::Rectangle, &pts(&[(10.0, 40.0), (50.0, 10.0)]), 1.0, 0).unwrap();

        let expected = Rect::new(10.0, 10.0, 50.0, 40.0);
        for outline in [forward, backward, mixed] {
            match outline.primitive() {
                Primitive::Rect(rect) => {
                    assert_eq!(*rect, expected);
                    assert_eq!(rect.width(), 40.0);
                    assert_eq!(rect.height(), 30.0);
                }
                other => panic!("expected rect, got {other:?}"),
            }
        }
    }

    #[test]
    fn circle_radius_is_distance_between_points() {
        let outline = compute_outline(ShapeKind::Circle, &pts(&[(10.0, 10.0), (13.0, 14.0)]), 1.0, 0).unwrap();
        match outline.primitive() {
            Primitive::Circle(circle) => {
                assert_eq!(circle.center, Point::new(10.0, 10.0));
                assert_eq!(circle.radius, 5.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn circle_ignores_extra_points() {
        let outline = compute_outline(
            ShapeKind::Circle,
            &pts(&[(0.0, 0.0), (0.0, 2.0), (100.0, 100.0)]),
            1.0,
            0,
        )
        .unwrap();
        match outline.primitive() {
            Primitive::Circle(circle) => assert_eq!(circle.radius, 2.0),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn polygon_path_is_closed_in_insertion_order() {
        let outline = compute_outline(
            ShapeKind::Polygon,
            &pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            1.0,
            0,
        )
        .unwrap();
        let Primitive::Polygon(path) = outline.primitive() else {
            panic!("expected polygon");
        };
        let elements = path.elements();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0], kurbo::PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(elements[2], kurbo::PathEl::LineTo(Point::new(10.0, 10.0)));
        assert_eq!(elements[3], kurbo::PathEl::ClosePath);
        assert_eq!(outline.fill_rule(), Fill::EvenOdd);
    }

    #[test]
    fn two_point_polygon_is_drawable_but_has_no_area() {
        let outline = compute_outline(ShapeKind::Polygon, &pts(&[(0.0, 0.0), (10.0, 10.0)]), 1.0, 0).unwrap();
        assert!(!outline.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn mid_point_is_mean_except_for_circles() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 20.0)]);
        let mid = mid_point(ShapeKind::Polygon, &points).unwrap();
        assert!((mid.x - 20.0 / 3.0).abs() < EPSILON);
        assert!((mid.y - 20.0 / 3.0).abs() < EPSILON);
        assert_eq!(mid_point(ShapeKind::Circle, &points), Some(Point::new(0.0, 0.0)));
        assert_eq!(mid_point(ShapeKind::Rectangle, &[]), None);
    }

    #[test]
    fn scale_is_anchored_at_mid_point() {
        let mid = Point::new(30.0, 25.0);
        let transform = shape_transform(mid, 0.5, 0);
        let moved = transform * mid;
        assert!((moved - mid).hypot() < EPSILON);

        let corner = transform * Point::new(10.0, 10.0);
        assert!((corner.x - 20.0).abs() < EPSILON);
        assert!((corner.y - 17.5).abs() < EPSILON);
    }

    #[test]
    fn rotation_steps_turn_about_mid_point() {
        // 64 steps of PI/128 is a quarter turn
        let mid = Point::new(10.0, 10.0);
        let transform = shape_transform(mid, 1.0, 64);
        let p = transform * Point::new(20.0, 10.0);
        let expected = mid + Vec2::new(FRAC_PI_2.cos() * 10.0, FRAC_PI_2.sin() * 10.0);
        assert!((p - expected).hypot() < EPSILON);

        // A full turn is the identity
        let full = shape_transform(mid, 1.0, 256) * Point::new(20.0, 10.0);
        assert!((full - Point::new(20.0, 10.0)).hypot() < 1e-6);
    }

    #[test]
    fn rotate_uses_pre_scale_mid_point() {
        // Scale then rotate, both about the mid point, keeps the mid point fixed
        let points = pts(&[(0.0, 0.0), (40.0, 20.0)]);
        let outline = compute_outline(ShapeKind::Rectangle, &points, 2.0, 32).unwrap();
        let mid = Point::new(20.0, 10.0);
        assert!((outline.transform() * mid - mid).hypot() < EPSILON);
    }

    #[test]
    fn contains_follows_transform() {
        let points = pts(&[(0.0, 0.0), (20.0, 20.0)]);
        let plain = compute_outline(ShapeKind::Rectangle, &points, 1.0, 0).unwrap();
        assert!(plain.contains(Point::new(1.0, 1.0)));
        assert!(!plain.contains(Point::new(25.0, 10.0)));

        // Doubled about (10, 10): spans -10..30
        let doubled = compute_outline(ShapeKind::Rectangle, &points, 2.0, 0).unwrap();
        assert!(doubled.contains(Point::new(25.0, 10.0)));
        assert!(doubled.contains(Point::new(-5.0, -5.0)));
        assert!(!doubled.contains(Point::new(31.0, 10.0)));

        // Eighth turn: corner region is outside, the tip along the axis is inside
        let rotated = compute_outline(ShapeKind::Rectangle, &points, 1.0, 32).unwrap();
        assert!(!rotated.contains(Point::new(1.0, 1.0)));
        assert!(rotated.contains(Point::new(23.0, 10.0)));
    }

    #[test]
    fn circle_containment() {
        let outline = compute_outline(ShapeKind::Circle, &pts(&[(50.0, 50.0), (60.0, 50.0)]), 1.0, 0).unwrap();
        assert!(outline.contains(Point::new(55.0, 55.0)));
        assert!(!outline.contains(Point::new(58.0, 58.0)));
        assert_eq!(outline.fill_rule(), Fill::NonZero);
    }

    #[test]
    fn path_and_bounds_are_transformed() {
        let points = pts(&[(0.0, 0.0), (20.0, 10.0)]);
        let outline = compute_outline(ShapeKind::Rectangle, &points, 0.5, 0).unwrap();
        let bounds = outline.to_path().bounding_box();
        assert!((bounds.x0 - 5.0).abs() < EPSILON);
        assert!((bounds.y0 - 2.5).abs() < EPSILON);
        assert!((bounds.x1 - 15.0).abs() < EPSILON);
        assert!((bounds.y1 - 7.5).abs() < EPSILON);
    }
}
