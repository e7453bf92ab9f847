//! Session: the input -> mutate -> rescan -> present frame loop.

use anyhow::Result;
use log::{debug, info};

use crate::config::SessionConfig;
use crate::core::{scan, ConfigError, Map, Player, ScanSummary, ScreenBuffer};
use crate::input::KeySource;
use crate::trace::log_frame;
use crate::types::{Action, PlayerInfo};

/// Presents a finished frame ("present frame" collaborator).
pub trait Presenter {
    fn present(&mut self, screen: &ScreenBuffer, info: &PlayerInfo) -> Result<()>;
}

/// What happened in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// `None` for the initial frame, which is drawn before any key.
    pub key: Option<char>,
    /// `None` when the key was not recognized.
    pub action: Option<Action>,
    /// Player pose the frame was scanned from.
    pub info: PlayerInfo,
    pub summary: ScanSummary,
}

/// Single-threaded game session. The map is read-only; the player is mutated
/// only by [`frame`](Self::frame), strictly before that frame's rescan.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    map: Map,
    player: Player,
    screen: ScreenBuffer,
    frame: u64,
}

impl Session {
    pub fn new(config: SessionConfig, map: Map) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::new(
            config.start_position,
            config.start_direction,
            config.turn_step_deg,
        );
        let screen = ScreenBuffer::new(&config.view);
        Ok(Self {
            config,
            map,
            player,
            screen,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Number of frames scanned so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Apply a decoded key. Unrecognized keys are ignored.
    pub fn handle_key(&mut self, key: char) -> Option<Action> {
        let action = Action::from_key(key)?;
        self.player.apply_action(action);
        Some(action)
    }

    /// Repaint every column of the screen from the current pose.
    pub fn rescan(&mut self) -> ScanSummary {
        scan(&self.player, &self.map, &self.config.view, &mut self.screen)
    }

    /// Initial frame: scan without any input.
    pub fn first_frame(&mut self) -> FrameReport {
        self.finish_frame(None, None)
    }

    /// One full frame for `key`.
    pub fn frame(&mut self, key: char) -> FrameReport {
        let action = self.handle_key(key);
        self.finish_frame(Some(key), action)
    }

    fn finish_frame(&mut self, key: Option<char>, action: Option<Action>) -> FrameReport {
        let summary = self.rescan();
        let report = FrameReport {
            frame: self.frame,
            key,
            action,
            info: self.player.info(),
            summary,
        };
        self.frame += 1;
        log_frame(&report);
        report
    }

    /// Drive the loop until the key source ends. Returns the number of frames.
    pub fn run<K, P>(&mut self, keys: &mut K, presenter: &mut P) -> Result<u64>
    where
        K: KeySource + ?Sized,
        P: Presenter + ?Sized,
    {
        info!(
            "session start: {} walls, {}x{} view, fov {}",
            self.map.wall_count(),
            self.config.view.columns,
            self.config.view.rows,
            self.config.view.fov_deg
        );

        let report = self.first_frame();
        presenter.present(&self.screen, &report.info)?;

        while let Some(key) = keys.next_key()? {
            let report = self.frame(key);
            if report.action.is_none() {
                debug!("ignored key {key:?}");
            }
            presenter.present(&self.screen, &report.info)?;
        }

        info!("session end after {} frames", self.frame);
        Ok(self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::demo_map;
    use crate::input::ScriptedKeys;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<PlayerInfo>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, _screen: &ScreenBuffer, info: &PlayerInfo) -> Result<()> {
            self.frames.push(*info);
            Ok(())
        }
    }

    fn session() -> Session {
        Session::new(SessionConfig::default(), demo_map().unwrap()).unwrap()
    }

    #[test]
    fn test_unrecognized_key_changes_nothing() {
        let mut s = session();
        let before = *s.player();
        let report = s.frame('q');
        assert_eq!(report.action, None);
        assert_eq!(*s.player(), before);
        assert_eq!(s.frames(), 1);
    }

    #[test]
    fn test_run_presents_initial_frame_then_one_per_key() {
        let mut s = session();
        let mut keys = ScriptedKeys::new("wxa");
        let mut rec = Recorder::default();
        let frames = s.run(&mut keys, &mut rec).unwrap();
        assert_eq!(frames, 4);
        assert_eq!(rec.frames.len(), 4);
        assert_eq!(rec.frames[0].pos_x, 45.0);
        assert_eq!(rec.frames[1].pos_x, 46.0);
        assert_eq!(rec.frames[2], rec.frames[1]);
        assert!(rec.frames[3].dir_y > 0.0);
    }

    #[test]
    fn test_rejects_invalid_view() {
        let mut cfg = SessionConfig::default();
        cfg.view.fov_deg = 0.0;
        assert!(Session::new(cfg, demo_map().unwrap()).is_err());
    }

    #[test]
    fn test_rejects_nan_turn_step_before_any_frame() {
        let cfg = SessionConfig {
            turn_step_deg: f64::NAN,
            ..SessionConfig::default()
        };
        let err = Session::new(cfg, demo_map().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::TurnStep(_)));
    }

    #[test]
    fn test_turning_keeps_walls_in_view() {
        let mut s = session();
        assert_eq!(s.first_frame().summary.hit_columns, 260);
        let report = s.frame('a');
        assert!(report.info.dir_x.is_finite() && report.info.dir_y.is_finite());
        assert_eq!(report.summary.hit_columns, 260);
    }
}
