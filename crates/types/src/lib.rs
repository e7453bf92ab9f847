//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the raycaster.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry core, session loop, terminal rendering).
//!
//! # Reference Session Parameters
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOV_DEG` | 100 | Horizontal field of view in degrees |
//! | `DEFAULT_VIEW_DEPTH` | 2.5 | Perspective constant F |
//! | `DEFAULT_COLUMNS` | 260 | Screen width in columns |
//! | `DEFAULT_ROWS` | 66 | Screen height in rows |
//! | `DEFAULT_TURN_STEPS` | 9 | Turn step, in columns' worth of angle |
//! | `EPS` | 1e-9 | Boundary tolerance for containment tests |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Action, Material};
//!
//! assert_eq!(Action::from_key('w'), Some(Action::MoveForward));
//! assert_eq!(Action::from_key('x'), None);
//!
//! assert_eq!(Material::WallEdge.code(), 6);
//! assert_eq!(Material::from_code(13), Some(Material::FloorFar));
//! ```

/// Boundary tolerance used by every containment test.
pub const EPS: f64 = 1e-9;

/// Horizontal field of view in degrees.
pub const DEFAULT_FOV_DEG: f64 = 100.0;

/// Perspective constant F: a wall at distance F fills the full screen height.
pub const DEFAULT_VIEW_DEPTH: f64 = 2.5;

/// Screen width in columns (one ray per column).
pub const DEFAULT_COLUMNS: u16 = 260;

/// Screen height in rows.
pub const DEFAULT_ROWS: u16 = 66;

/// Player turn step expressed in per-column sweep angles.
///
/// The turn step in degrees is `FOV / columns * DEFAULT_TURN_STEPS`.
pub const DEFAULT_TURN_STEPS: u16 = 9;

/// Floor band thresholds (absolute rows) at `DEFAULT_ROWS`.
pub const DEFAULT_FLOOR_BANDS: [u16; 3] = [43, 48, 54];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_session_defaults() {
        assert_eq!(DEFAULT_FOV_DEG, 100.0);
        assert_eq!(DEFAULT_VIEW_DEPTH, 2.5);
        assert_eq!(DEFAULT_COLUMNS, 260);
        assert_eq!(DEFAULT_ROWS, 66);
        assert_eq!(EPS, 1e-9);
        assert!(DEFAULT_FLOOR_BANDS.windows(2).all(|w| w[0] < w[1]));
        assert!(DEFAULT_FLOOR_BANDS[2] < DEFAULT_ROWS);
    }
}

/// Player actions recognized by the session loop.
///
/// Every other key is ignored without feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate the view counter-clockwise by one turn step
    TurnLeft,
    /// Rotate the view clockwise by one turn step
    TurnRight,
    /// Step along the facing direction
    MoveForward,
    /// Step against the facing direction
    MoveBackward,
}

impl Action {
    /// Map a decoded (lowercased) key to an action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_types::Action;
    ///
    /// assert_eq!(Action::from_key('a'), Some(Action::TurnLeft));
    /// assert_eq!(Action::from_key('d'), Some(Action::TurnRight));
    /// assert_eq!(Action::from_key('s'), Some(Action::MoveBackward));
    /// assert_eq!(Action::from_key('A'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'a' => Some(Action::TurnLeft),
            'd' => Some(Action::TurnRight),
            'w' => Some(Action::MoveForward),
            's' => Some(Action::MoveBackward),
            _ => None,
        }
    }

    /// camelCase name used in frame trace records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::TurnLeft => "turnLeft",
            Action::TurnRight => "turnRight",
            Action::MoveForward => "moveForward",
            Action::MoveBackward => "moveBackward",
        }
    }
}

/// Material code of a single screen cell.
///
/// The numeric codes are stable: the terminal layer selects a glyph from
/// them, and tests compare against them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Material {
    /// Empty sky above the wall band
    #[default]
    Sky = 0,
    /// Nearest walls (height >= 20)
    WallSolid = 2,
    /// Height 15..20
    WallDense = 3,
    /// Height 10..15
    WallMedium = 4,
    /// Height 5..10
    WallLight = 5,
    /// Column whose nearest wall differs from the previous column's
    WallEdge = 6,
    /// Farthest walls (height < 5)
    WallFaint = 8,
    /// Floor rows closest to the viewer (bottom of the screen)
    FloorNearest = 10,
    FloorNear = 11,
    FloorMid = 12,
    /// Floor rows just below the horizon
    FloorFar = 13,
}

impl Material {
    pub const ALL: [Material; 11] = [
        Material::Sky,
        Material::WallSolid,
        Material::WallDense,
        Material::WallMedium,
        Material::WallLight,
        Material::WallEdge,
        Material::WallFaint,
        Material::FloorNearest,
        Material::FloorNear,
        Material::FloorMid,
        Material::FloorFar,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Material::ALL.iter().copied().find(|m| m.code() == code)
    }

    pub fn is_wall(self) -> bool {
        matches!(
            self,
            Material::WallSolid
                | Material::WallDense
                | Material::WallMedium
                | Material::WallLight
                | Material::WallEdge
                | Material::WallFaint
        )
    }

    pub fn is_floor(self) -> bool {
        matches!(
            self,
            Material::FloorNearest | Material::FloorNear | Material::FloorMid | Material::FloorFar
        )
    }
}

/// Player pose snapshot handed to the presenter for on-screen diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerInfo {
    pub pos_x: f64,
    pub pos_y: f64,
    pub dir_x: f64,
    pub dir_y: f64,
}
