//! Terminal raycaster runner (default binary).
//!
//! Reads one key per frame (WASD or arrows), recasts every column and
//! redraws. Ctrl-C or Ctrl-D exits and restores the terminal.
//! Session parameters come from `RAYCAST_*` environment variables.

use std::io;

use anyhow::{Context, Result};

use tui_raycaster::core::ScreenBuffer;
use tui_raycaster::engine::{demo_map, Presenter, Session, SessionConfig};
use tui_raycaster::input::TerminalKeys;
use tui_raycaster::logging;
use tui_raycaster::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_raycaster::types::PlayerInfo;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut session = Session::new(config, demo_map()?)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut session, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("session failed: {err:#}");
    }
    result
}

fn run(session: &mut Session, term: &mut TerminalRenderer) -> Result<()> {
    let mut presenter = TerminalPresenter {
        term,
        view: SceneView::default(),
        fb: FrameBuffer::new(0, 0),
    };
    session.run(&mut TerminalKeys::new(), &mut presenter)?;
    Ok(())
}

/// Draws each finished frame to the real terminal.
struct TerminalPresenter<'a> {
    term: &'a mut TerminalRenderer,
    view: SceneView,
    fb: FrameBuffer,
}

impl Presenter for TerminalPresenter<'_> {
    fn present(&mut self, screen: &ScreenBuffer, info: &PlayerInfo) -> Result<()> {
        let viewport = viewport(crossterm::terminal::size())?;
        self.view.render_into(screen, info, viewport, &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn viewport(size: io::Result<(u16, u16)>) -> Result<Viewport> {
    let (w, h) = size.context("query terminal size")?;
    Ok(Viewport::new(w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_follows_terminal_size() {
        assert_eq!(viewport(Ok((120, 40))).unwrap(), Viewport::new(120, 40));
    }

    #[test]
    fn test_terminal_size_error_is_propagated() {
        let err = viewport(Err(io::Error::new(io::ErrorKind::Other, "not a tty"))).unwrap_err();
        assert!(format!("{err:#}").contains("not a tty"));
    }
}
