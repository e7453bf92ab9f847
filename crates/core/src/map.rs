//! Map module - validated polygons and wall enumeration
//!
//! A map is an ordered list of closed polygons. Wall `j` of polygon `i`
//! runs from vertex `j` to vertex `(j + 1) % n` and is identified by
//! [`WallId`] `{ polygon: i, segment: j }`.

use std::fmt;

use crate::geom::{Point, Segment};
use crate::types::EPS;

/// Identifies one wall segment of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId {
    pub polygon: usize,
    pub segment: usize,
}

impl WallId {
    pub const fn new(polygon: usize, segment: usize) -> Self {
        Self { polygon, segment }
    }
}

/// Rejected map configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// A polygon needs at least three vertices to close a loop.
    TooFewVertices { polygon: usize, count: usize },
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex { polygon: usize, vertex: usize },
    /// Two consecutive vertices coincide, giving a zero-length wall.
    DegenerateWall { polygon: usize, segment: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::TooFewVertices { polygon, count } => {
                write!(f, "polygon {polygon} has {count} vertices (need at least 3)")
            }
            MapError::NonFiniteVertex { polygon, vertex } => {
                write!(f, "polygon {polygon} vertex {vertex} is not finite")
            }
            MapError::DegenerateWall { polygon, segment } => {
                write!(f, "polygon {polygon} wall {segment} has zero length")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Closed loop of at least three points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Validate and build a polygon. `index` is only used for error reporting.
    fn validated(index: usize, points: Vec<Point>) -> Result<Self, MapError> {
        if points.len() < 3 {
            return Err(MapError::TooFewVertices {
                polygon: index,
                count: points.len(),
            });
        }
        if let Some(vertex) = points.iter().position(|p| !p.is_finite()) {
            return Err(MapError::NonFiniteVertex {
                polygon: index,
                vertex,
            });
        }
        let polygon = Self { points };
        if let Some(segment) = polygon.segments().position(|s| s.len() <= EPS) {
            return Err(MapError::DegenerateWall {
                polygon: index,
                segment,
            });
        }
        Ok(polygon)
    }

    pub fn new(points: Vec<Point>) -> Result<Self, MapError> {
        Self::validated(0, points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of walls (equal to the number of vertices).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment(&self, j: usize) -> Option<Segment> {
        let n = self.points.len();
        if j >= n {
            return None;
        }
        Some(Segment::new(self.points[j], self.points[(j + 1) % n]))
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |j| Segment::new(self.points[j], self.points[(j + 1) % n]))
    }
}

/// Read-only collection of polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    polygons: Vec<Polygon>,
}

impl Map {
    /// Build a map from raw point lists, validating every polygon.
    pub fn new(polygons: Vec<Vec<Point>>) -> Result<Self, MapError> {
        let polygons = polygons
            .into_iter()
            .enumerate()
            .map(|(i, points)| Polygon::validated(i, points))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { polygons })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_coords(polygons: &[&[(f64, f64)]]) -> Result<Self, MapError> {
        Self::new(
            polygons
                .iter()
                .map(|poly| poly.iter().copied().map(Point::from).collect())
                .collect(),
        )
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn wall_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }

    pub fn wall(&self, id: WallId) -> Option<Segment> {
        self.polygons.get(id.polygon)?.segment(id.segment)
    }

    /// Every wall, ordered by polygon index then segment index.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, Segment)> + '_ {
        self.polygons.iter().enumerate().flat_map(|(i, poly)| {
            poly.segments()
                .enumerate()
                .map(move |(j, seg)| (WallId::new(i, j), seg))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    #[test]
    fn test_walls_close_the_loop() {
        let map = Map::from_coords(&[SQUARE]).unwrap();
        let walls: Vec<_> = map.walls().collect();
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[3].0, WallId::new(0, 3));
        assert_eq!(walls[3].1.p1, Point::new(0.0, 10.0));
        assert_eq!(walls[3].1.p2, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_walls_are_ordered_by_polygon_then_segment() {
        let tri: &[(f64, f64)] = &[(20.0, 20.0), (21.0, 20.0), (20.0, 21.0)];
        let map = Map::from_coords(&[SQUARE, tri]).unwrap();
        let ids: Vec<WallId> = map.walls().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(map.wall_count(), 7);
        assert_eq!(
            map.wall(WallId::new(1, 2)),
            Some(Segment::new(Point::new(20.0, 21.0), Point::new(20.0, 20.0)))
        );
        assert_eq!(map.wall(WallId::new(2, 0)), None);
        assert_eq!(map.wall(WallId::new(1, 3)), None);
    }

    #[test]
    fn test_rejects_short_polygon() {
        let err = Map::from_coords(&[SQUARE, &[(0.0, 0.0), (1.0, 1.0)]]).unwrap_err();
        assert_eq!(err, MapError::TooFewVertices { polygon: 1, count: 2 });
    }

    #[test]
    fn test_rejects_duplicate_consecutive_points() {
        let err = Map::from_coords(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]]).unwrap_err();
        assert_eq!(err, MapError::DegenerateWall { polygon: 0, segment: 1 });
    }

    #[test]
    fn test_rejects_closing_wall_of_zero_length() {
        let err = Map::from_coords(&[&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]]).unwrap_err();
        assert_eq!(err, MapError::DegenerateWall { polygon: 0, segment: 3 });
    }

    #[test]
    fn test_rejects_non_finite_vertex() {
        let err = Map::from_coords(&[&[(0.0, 0.0), (f64::NAN, 0.0), (0.0, 1.0)]]).unwrap_err();
        assert_eq!(err, MapError::NonFiniteVertex { polygon: 0, vertex: 1 });
        assert!(err.to_string().contains("not finite"));
    }
}
