//! Projection / column model - distance to wall height to material bands
//!
//! A column is laid out top to bottom as sky, wall, floor:
//!
//! ```text
//! rows 0 .. sky               Sky
//! rows sky .. sky + height    wall material (by height, or edge)
//! rows sky + height .. rows   floor material (by absolute row)
//! ```
//!
//! with `sky = (rows - height) / 2 + height % 2`. The floor gradient depends
//! only on the row index, never on wall distance.

use crate::config::ViewConfig;
use crate::types::{Material, EPS};

/// Visible wall height for a hit at `distance`.
///
/// `min(floor(rows / (distance / F)), rows)`. An infinite distance (no hit)
/// gives 0; a distance within EPS of zero (viewer standing on the wall) gives
/// the full row count.
pub fn wall_height(distance: f64, cfg: &ViewConfig) -> u16 {
    let rows = cfg.rows;
    if distance <= EPS {
        return rows;
    }
    let h = (rows as f64 / (distance / cfg.view_depth)).floor();
    // `as` saturates, and NaN maps to 0.
    (h as u16).min(rows)
}

/// Number of sky rows above a wall of `height`.
pub fn sky_rows(height: u16, rows: u16) -> u16 {
    let height = height.min(rows);
    (rows - height) / 2 + height % 2
}

/// Banded wall material: nearer (taller) walls get denser glyphs.
pub fn wall_material(height: u16, is_edge: bool) -> Material {
    if is_edge {
        Material::WallEdge
    } else if height < 5 {
        Material::WallFaint
    } else if height < 10 {
        Material::WallLight
    } else if height < 15 {
        Material::WallMedium
    } else if height < 20 {
        Material::WallDense
    } else {
        Material::WallSolid
    }
}

/// Floor material by absolute row.
pub fn floor_material(row: u16, bands: &[u16; 3]) -> Material {
    if row < bands[0] {
        Material::FloorFar
    } else if row < bands[1] {
        Material::FloorMid
    } else if row < bands[2] {
        Material::FloorNear
    } else {
        Material::FloorNearest
    }
}

/// Material of `row` in a column whose wall is `height` rows tall.
pub fn material_at(row: u16, height: u16, is_edge: bool, cfg: &ViewConfig) -> Material {
    let height = height.min(cfg.rows);
    let sky = sky_rows(height, cfg.rows);
    if row < sky {
        Material::Sky
    } else if row < sky + height {
        wall_material(height, is_edge)
    } else {
        floor_material(row, &cfg.floor_bands)
    }
}
