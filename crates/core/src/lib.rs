//! Core raycasting module - pure, deterministic, and testable
//!
//! This crate contains the geometry, the ray-casting sweep and the projection
//! model. It has **zero dependencies** on terminals, input or logging, making it:
//!
//! - **Deterministic**: walls are always searched in the same order
//! - **Testable**: every operation is a function of its arguments
//! - **Portable**: the same scan feeds a terminal, a test or a benchmark
//!
//! # Module Structure
//!
//! - [`geom`]: points, vectors, lines, segments and the segment/line intersection
//! - [`map`]: validated polygons and wall ids
//! - [`player`]: player pose and actions
//! - [`scanner`]: per-column rays, nearest-wall search, edge detection
//! - [`projection`]: distance to wall height, sky/wall/floor material bands
//! - [`screen`]: material grid painted one column at a time
//! - [`config`]: field of view, perspective constant, screen size
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{scan, Map, Player, Point, ScreenBuffer, Vector, ViewConfig};
//!
//! let map = Map::from_coords(&[&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]]).unwrap();
//! let player = Player::new(Point::new(5.0, 5.0), Vector::new(1.0, 0.0), 3.0);
//! let cfg = ViewConfig::default();
//!
//! let mut screen = ScreenBuffer::new(&cfg);
//! let summary = scan(&player, &map, &cfg, &mut screen);
//! assert_eq!(summary.hit_columns, cfg.columns);
//! ```

pub mod config;
pub mod geom;
pub mod map;
pub mod player;
pub mod projection;
pub mod scanner;
pub mod screen;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ViewConfig};
pub use geom::{degrees_to_radians, less_or_equal, Line, Point, Segment, Vector};
pub use map::{Map, MapError, Polygon, WallId};
pub use player::Player;
pub use projection::{floor_material, material_at, sky_rows, wall_height, wall_material};
pub use scanner::{cast_ray, scan, ColumnHit, ColumnSink, RayHit, ScanSummary};
pub use screen::ScreenBuffer;
