//! View configuration shared by the scanner and the projection model.

use std::fmt;

use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_FLOOR_BANDS, DEFAULT_FOV_DEG, DEFAULT_ROWS, DEFAULT_VIEW_DEPTH,
};

/// Screen geometry and perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Horizontal field of view in degrees, centered on the player's direction.
    pub fov_deg: f64,
    /// Perspective constant F.
    pub view_depth: f64,
    pub columns: u16,
    pub rows: u16,
    /// Absolute row thresholds of the floor gradient (far, mid, near).
    pub floor_bands: [u16; 3],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            view_depth: DEFAULT_VIEW_DEPTH,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            floor_bands: DEFAULT_FLOOR_BANDS,
        }
    }
}

/// Invalid view parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    FieldOfView(f64),
    ViewDepth(f64),
    EmptyScreen { columns: u16, rows: u16 },
    /// Turn step is NaN or infinite.
    TurnStep(f64),
    /// Facing direction is zero-length or not finite.
    Direction { x: f64, y: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FieldOfView(v) => {
                write!(f, "field of view must be in (0, 180) degrees, got {v}")
            }
            ConfigError::ViewDepth(v) => write!(f, "view depth must be positive, got {v}"),
            ConfigError::EmptyScreen { columns, rows } => {
                write!(f, "screen must be at least 1x1, got {columns}x{rows}")
            }
            ConfigError::TurnStep(v) => write!(f, "turn step must be finite, got {v}"),
            ConfigError::Direction { x, y } => {
                write!(f, "direction must be finite and non-zero, got ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ViewConfig {
    /// Resize the screen, rescaling the floor bands to the new row count.
    pub fn with_screen(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self.floor_bands = DEFAULT_FLOOR_BANDS.map(|b| scale_row(b, rows));
        self
    }

    /// Sweep angle between adjacent columns, in degrees.
    pub fn column_step_deg(&self) -> f64 {
        self.fov_deg / self.columns as f64
    }

    /// The hit-behind check only rejects hits past 90 degrees off the facing
    /// direction, so a field of view of 180 or more would accept walls behind
    /// the player.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_deg));
        }
        if !(self.view_depth > 0.0 && self.view_depth.is_finite()) {
            return Err(ConfigError::ViewDepth(self.view_depth));
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyScreen {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

fn scale_row(row: u16, rows: u16) -> u16 {
    let default = DEFAULT_ROWS as u32;
    ((row as u32 * rows as u32 + default / 2) / default) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = ViewConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.floor_bands, [43, 48, 54]);
    }

    #[test]
    fn test_with_screen_keeps_reference_bands() {
        let cfg = ViewConfig::default().with_screen(260, 66);
        assert_eq!(cfg.floor_bands, [43, 48, 54]);
    }

    #[test]
    fn test_with_screen_scales_bands() {
        let cfg = ViewConfig::default().with_screen(80, 33);
        assert_eq!(cfg.floor_bands, [22, 24, 27]);
        assert_eq!(cfg.columns, 80);
        assert_eq!(cfg.rows, 33);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = ViewConfig::default();
        cfg.fov_deg = 180.0;
        assert_eq!(cfg.validate(), Err(ConfigError::FieldOfView(180.0)));

        let mut cfg = ViewConfig::default();
        cfg.view_depth = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::ViewDepth(0.0)));

        let cfg = ViewConfig::default().with_screen(0, 10);
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyScreen { .. })));
    }
}
