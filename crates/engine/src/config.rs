//! Session configuration from environment variables.

use std::env;

use crate::core::{ConfigError, Point, Vector, ViewConfig};
use crate::types::{DEFAULT_TURN_STEPS, EPS};

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub view: ViewConfig,
    /// Player turn step in degrees.
    pub turn_step_deg: f64,
    pub start_position: Point,
    pub start_direction: Vector,
    /// Log file; logging is off when `None`.
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let view = ViewConfig::default();
        Self {
            view,
            turn_step_deg: default_turn_step(&view),
            start_position: Point::new(45.0, 45.0),
            start_direction: Vector::new(1.0, 0.0),
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables. Unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_f64 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok());
        let parse_u16 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u16>().ok());

        let defaults = ViewConfig::default();
        let mut view = defaults.with_screen(
            parse_u16("RAYCAST_COLUMNS").unwrap_or(defaults.columns),
            parse_u16("RAYCAST_ROWS").unwrap_or(defaults.rows),
        );
        if let Some(fov) = parse_f64("RAYCAST_FOV") {
            view.fov_deg = fov;
        }
        if let Some(depth) = parse_f64("RAYCAST_VIEW_DEPTH") {
            view.view_depth = depth;
        }

        let turn_step_deg = parse_f64("RAYCAST_TURN_STEP").unwrap_or_else(|| default_turn_step(&view));

        let log_path = lookup("RAYCAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            view,
            turn_step_deg,
            log_path,
            ..Self::default()
        }
    }

    /// Check the view, then the player parameters a scan depends on.
    ///
    /// A non-finite turn step would turn the direction into NaN on the first
    /// turn, and a zero direction gives every ray a degenerate line.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view.validate()?;
        if !self.turn_step_deg.is_finite() {
            return Err(ConfigError::TurnStep(self.turn_step_deg));
        }
        let dir = self.start_direction;
        if !(dir.x.is_finite() && dir.y.is_finite()) || dir.len() <= EPS {
            return Err(ConfigError::Direction { x: dir.x, y: dir.y });
        }
        Ok(())
    }
}

fn default_turn_step(view: &ViewConfig) -> f64 {
    view.column_step_deg() * DEFAULT_TURN_STEPS as f64
}
