//! Session module - configuration, the demo arena and the frame loop
//!
//! The session owns the map, the player and the material screen buffer, and
//! enforces the per-frame ordering:
//!
//! 1. **Input**: one key from a [`KeySource`](tui_raycaster_input::KeySource)
//! 2. **Mutation**: a recognized key updates the player; others are ignored
//! 3. **Rescan**: every column is cast again from the new pose
//! 4. **Present**: the screen and a player snapshot go to a [`Presenter`]
//!
//! # Configuration
//!
//! [`SessionConfig::from_env`] reads these environment variables:
//!
//! - `RAYCAST_FOV`: field of view in degrees (default: 100)
//! - `RAYCAST_VIEW_DEPTH`: perspective constant F (default: 2.5)
//! - `RAYCAST_COLUMNS` / `RAYCAST_ROWS`: screen size (default: 260x66)
//! - `RAYCAST_TURN_STEP`: turn step in degrees (default: 9 columns' worth)
//! - `RAYCAST_LOG_PATH`: write a log file, including one JSON trace line per frame

pub mod arena;
pub mod config;
pub mod session;
pub mod trace;

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_types as types;

pub use arena::demo_map;
pub use config::SessionConfig;
pub use session::{FrameReport, Presenter, Session};
pub use trace::FrameRecord;
