//! Geometry kernel - points, vectors, lines and wall segments
//!
//! Everything here is plain `f64` math with value semantics. The one
//! tolerance in the system, [`EPS`], is applied only by
//! [`Segment::intersection`] when deciding whether a point lies on a wall.

use crate::types::EPS;

/// Tolerant `lhs <= rhs`: true when `lhs < rhs + EPS`.
///
/// Comparisons involving NaN are always false, so a non-finite
/// intersection point never passes a bound check.
#[inline]
pub fn less_or_equal(lhs: f64, rhs: f64) -> bool {
    lhs < rhs + EPS
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// A position in the map plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A displacement in the map plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `a` to `b`.
    pub fn between(a: Point, b: Point) -> Self {
        Self {
            x: b.x - a.x,
            y: b.y - a.y,
        }
    }

    /// The point reached by moving `p` along this vector.
    pub fn shift(&self, p: Point) -> Point {
        Point::new(p.x + self.x, p.y + self.y)
    }

    /// Euclidean norm (0 for the zero vector).
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate in place by `angle` radians, counter-clockwise for positive angles.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
    }

    pub fn rotated(mut self, angle: f64) -> Self {
        self.rotate(angle);
        self
    }

    pub fn dot(lhs: Vector, rhs: Vector) -> f64 {
        lhs.x * rhs.x + lhs.y * rhs.y
    }
}

/// Infinite line in general form `a*x + b*y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through two points.
    ///
    /// `p` and `q` must be distinct; identical points give `a = b = 0`,
    /// which no caller in this crate produces (maps reject zero-length walls).
    pub fn new(p: Point, q: Point) -> Self {
        Self {
            a: p.y - q.y,
            b: q.x - p.x,
            c: -q.x * p.y + q.y * p.x,
        }
    }

    /// Evaluate `a*x + b*y + c` at `p` (zero on the line).
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Intersection of two lines by Cramer's rule.
    ///
    /// Parallel lines have a zero determinant and produce a point with
    /// infinite or NaN coordinates. That is not special-cased here; callers
    /// filter it out (see [`Segment::intersection`]).
    pub fn intersection(lhs: &Line, rhs: &Line) -> Point {
        let det = lhs.a * rhs.b - rhs.a * lhs.b;
        Point {
            x: -(lhs.c * rhs.b - rhs.c * lhs.b) / det,
            y: -(lhs.a * rhs.c - rhs.a * lhs.c) / det,
        }
    }
}

/// A bounded wall piece between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    pub fn len(&self) -> f64 {
        Vector::between(self.p1, self.p2).len()
    }

    /// Intersect this (bounded) segment with an (unbounded) line.
    ///
    /// Returns the point where the segment's own line crosses `line`, if that
    /// point lies inside the segment's bounding box under the EPS tolerance.
    /// Parallel inputs return `None`.
    pub fn intersection(&self, line: &Line) -> Option<Point> {
        let p = Line::intersection(&self.line(), line);
        if self.bounds_contain(p) {
            Some(p)
        } else {
            None
        }
    }

    fn bounds_contain(&self, p: Point) -> bool {
        let min_x = self.p1.x.min(self.p2.x);
        let max_x = self.p1.x.max(self.p2.x);
        let min_y = self.p1.y.min(self.p2.y);
        let max_y = self.p1.y.max(self.p2.y);
        less_or_equal(min_x, p.x)
            && less_or_equal(p.x, max_x)
            && less_or_equal(min_y, p.y)
            && less_or_equal(p.y, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_less_or_equal_tolerance() {
        assert!(less_or_equal(1.0, 1.0));
        assert!(less_or_equal(1.0 + 0.5e-9, 1.0));
        assert!(!less_or_equal(1.0 + 1e-6, 1.0));
        assert!(!less_or_equal(f64::NAN, 1.0));
        assert!(!less_or_equal(1.0, f64::NAN));
    }

    #[test]
    fn test_vector_len() {
        assert_eq!(Vector::new(3.0, 4.0).len(), 5.0);
        assert_eq!(Vector::new(0.0, 0.0).len(), 0.0);
        assert_eq!(
            Vector::between(Point::new(1.0, 1.0), Point::new(4.0, 5.0)).len(),
            5.0
        );
    }

    #[test]
    fn test_rotate_quarter_turn_is_counter_clockwise() {
        let v = Vector::new(1.0, 0.0).rotated(degrees_to_radians(90.0));
        assert!(close(v.x, 0.0));
        assert!(close(v.y, 1.0));
    }

    #[test]
    fn test_rotate_round_trip() {
        for deg in [0.1, 3.46, 45.0, 90.0, 179.0, -33.0, 720.5] {
            let orig = Vector::new(0.6, -1.7);
            let mut v = orig;
            v.rotate(degrees_to_radians(deg));
            v.rotate(degrees_to_radians(-deg));
            assert!(close(v.x, orig.x), "x after {deg}: {}", v.x);
            assert!(close(v.y, orig.y), "y after {deg}: {}", v.y);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector::new(2.0, 1.0);
        let r = v.rotated(1.234);
        assert!(close(v.len(), r.len()));
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(Vector::dot(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0)), 11.0);
        assert_eq!(Vector::dot(Vector::new(1.0, 0.0), Vector::new(0.0, 5.0)), 0.0);
    }

    #[test]
    fn test_line_coefficients() {
        let l = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!((l.a, l.b, l.c), (0.0, 10.0, 0.0));
        assert!(close(l.eval(Point::new(5.0, 0.0)), 0.0));
        assert!(!close(l.eval(Point::new(5.0, 1.0)), 0.0));
    }

    #[test]
    fn test_line_intersection_lies_on_both_lines() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
        let l2 = Line::new(Point::new(0.0, 3.0), Point::new(3.0, -1.5));
        let p = Line::intersection(&l1, &l2);
        assert!(p.is_finite());
        assert!(l1.eval(p).abs() < 1e-9);
        assert!(l2.eval(p).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_lines_are_not_finite() {
        let l1 = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let l2 = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
        assert!(!Line::intersection(&l1, &l2).is_finite());
        // Coincident lines: 0/0.
        assert!(!Line::intersection(&l1, &l1).is_finite());
    }

    #[test]
    fn test_segment_intersection_inside() {
        let wall = Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0));
        let ray = Line::new(Point::new(5.0, 5.0), Point::new(6.0, 5.0));
        let p = wall.intersection(&ray).unwrap();
        assert!(close(p.x, 10.0));
        assert!(close(p.y, 5.0));
    }

    #[test]
    fn test_segment_intersection_on_endpoint_is_accepted() {
        let wall = Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0));
        let ray = Line::new(Point::new(0.0, 10.0), Point::new(1.0, 10.0));
        let p = wall.intersection(&ray).unwrap();
        assert!(close(p.y, 10.0));
    }

    #[test]
    fn test_segment_intersection_just_outside_is_rejected() {
        let wall = Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0));
        let y = 10.0 + 1e-6;
        let ray = Line::new(Point::new(0.0, y), Point::new(1.0, y));
        assert_eq!(wall.intersection(&ray), None);
    }

    #[test]
    fn test_segment_intersection_parallel_is_none() {
        let wall = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let ray = Line::new(Point::new(0.0, 5.0), Point::new(1.0, 5.0));
        assert_eq!(wall.intersection(&ray), None);

        let collinear = Line::new(Point::new(-5.0, 0.0), Point::new(-4.0, 0.0));
        assert_eq!(wall.intersection(&collinear), None);
    }
}
