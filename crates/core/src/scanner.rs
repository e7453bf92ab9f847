//! Ray-casting scanner - one ray per screen column
//!
//! The sweep starts at the player's direction rotated by `+FOV/2` (leftmost
//! column) and rotates by `-FOV/columns` after each column. Each ray is an
//! infinite line through the player's position; walls are the bounded side of
//! every intersection test.
//!
//! # Nearest-hit policy
//!
//! Walls are tested in [`Map::walls`] order (polygon index, then segment
//! index). A hit replaces the current one only when it is strictly nearer, so
//! the first wall found wins exact ties. Hits whose displacement from the
//! player points against the player's direction are discarded.
//!
//! # Edges
//!
//! A column is an edge when the previous column hit a wall and this column's
//! nearest wall is a different one (or none at all).

use crate::config::ViewConfig;
use crate::geom::{degrees_to_radians, Line, Point, Vector};
use crate::map::{Map, WallId};
use crate::player::Player;
use crate::projection::wall_height;

/// Nearest wall hit for a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub wall: WallId,
    pub distance: f64,
}

/// Scanner output for one screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHit {
    pub column: u16,
    /// `f64::INFINITY` when no wall was hit.
    pub distance: f64,
    pub wall: Option<WallId>,
    pub height: u16,
    pub is_edge: bool,
}

/// Receives each column as soon as it is scanned ("draw one column").
pub trait ColumnSink {
    fn column(&mut self, hit: &ColumnHit);
}

impl ColumnSink for Vec<ColumnHit> {
    fn column(&mut self, hit: &ColumnHit) {
        self.push(*hit);
    }
}

/// Aggregate numbers of one full sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScanSummary {
    pub columns: u16,
    pub hit_columns: u16,
    pub edge_columns: u16,
    /// Nearest hit over all columns (`f64::INFINITY` if none).
    pub nearest: f64,
}

/// Nearest forward-facing wall along the line through `origin` and
/// `origin + ray`.
///
/// `facing` is the player's direction; hits with a negative dot product
/// against it are behind the viewer and ignored.
pub fn cast_ray(origin: Point, ray: Vector, facing: Vector, map: &Map) -> Option<RayHit> {
    let ray_line = Line::new(origin, ray.shift(origin));
    let mut best: Option<RayHit> = None;

    for (wall, segment) in map.walls() {
        let Some(point) = segment.intersection(&ray_line) else {
            continue;
        };
        let v = Vector::between(origin, point);
        if Vector::dot(v, facing) < 0.0 {
            continue;
        }
        let distance = v.len();
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(RayHit { wall, distance });
        }
    }

    best
}

/// Sweep every column of the view, feeding each result to `sink`.
pub fn scan<S: ColumnSink + ?Sized>(
    player: &Player,
    map: &Map,
    cfg: &ViewConfig,
    sink: &mut S,
) -> ScanSummary {
    let step = cfg.column_step_deg();
    let mut ray = player.direction;
    ray.rotate(degrees_to_radians(cfg.fov_deg / 2.0));

    let mut summary = ScanSummary {
        columns: cfg.columns,
        nearest: f64::INFINITY,
        ..ScanSummary::default()
    };
    let mut last_wall: Option<WallId> = None;

    for column in 0..cfg.columns {
        let hit = cast_ray(player.position, ray, player.direction, map);
        let wall = hit.map(|h| h.wall);
        let distance = hit.map_or(f64::INFINITY, |h| h.distance);

        let is_edge = last_wall.is_some() && last_wall != wall;
        last_wall = wall;

        let column_hit = ColumnHit {
            column,
            distance,
            wall,
            height: wall_height(distance, cfg),
            is_edge,
        };
        sink.column(&column_hit);

        if wall.is_some() {
            summary.hit_columns += 1;
        }
        if is_edge {
            summary.edge_columns += 1;
        }
        summary.nearest = summary.nearest.min(distance);

        ray.rotate(degrees_to_radians(-step));
    }

    summary
}
