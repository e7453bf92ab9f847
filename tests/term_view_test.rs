use tui_raycaster::core::{ScreenBuffer, ViewConfig};
use tui_raycaster::term::{glyph, AnchorY, SceneView, Viewport};
use tui_raycaster::types::{Material, PlayerInfo};

fn screen(columns: u16, rows: u16) -> ScreenBuffer {
    let cfg = ViewConfig::default().with_screen(columns, rows);
    let mut screen = ScreenBuffer::new(&cfg);
    for col in 0..columns {
        screen.draw_column(col, rows / 2, col == 0);
    }
    screen
}

#[test]
fn term_view_places_readout_under_scene() {
    let s = screen(20, 10);
    let info = PlayerInfo {
        pos_x: 1.0,
        pos_y: 2.0,
        dir_x: 0.0,
        dir_y: 1.0,
    };
    let fb = SceneView::default().render(&s, &info, Viewport::new(80, 30));
    // Scene is centered horizontally: (80 - 20) / 2 = 30.
    assert!(fb.row_text(10)[30..].starts_with("X: 1.000000;  Y: 2.000000"));
    assert_eq!(fb.get(30, 5).unwrap().ch, glyph(Material::WallEdge));
}

#[test]
fn term_view_centers_scene_vertically_when_asked() {
    let s = screen(20, 10);
    let view = SceneView::default().with_anchor_y(AnchorY::Center);
    let fb = view.render(&s, &PlayerInfo::default(), Viewport::new(20, 21));
    // (21 - 1 - 10) / 2 = 5 rows of padding above the scene.
    assert_eq!(fb.row_text(4).trim(), "");
    assert!(fb.row_text(15).starts_with("X: 0.000000"));
}

#[test]
fn term_view_keeps_readout_on_short_terminals() {
    let s = screen(20, 10);
    let fb = SceneView::default().render(&s, &PlayerInfo::default(), Viewport::new(20, 4));
    assert!(fb.row_text(3).starts_with("X: 0.0"));
}

#[test]
fn term_view_handles_empty_viewport() {
    let s = screen(4, 4);
    let fb = SceneView::default().render(&s, &PlayerInfo::default(), Viewport::new(0, 0));
    assert_eq!(fb.width(), 0);
}
