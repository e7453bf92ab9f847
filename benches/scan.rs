use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycaster::core::{scan, Player, ScreenBuffer};
use tui_raycaster::engine::{demo_map, Session, SessionConfig};
use tui_raycaster::term::{FrameBuffer, SceneView, Viewport};

fn start_player(config: &SessionConfig) -> Player {
    Player::new(
        config.start_position,
        config.start_direction,
        config.turn_step_deg,
    )
}

fn bench_scan(c: &mut Criterion) {
    let config = SessionConfig::default();
    let map = demo_map().unwrap();
    let player = start_player(&config);
    let mut screen = ScreenBuffer::new(&config.view);

    c.bench_function("scan_260_columns", |b| {
        b.iter(|| {
            scan(black_box(&player), &map, &config.view, &mut screen);
        })
    });
}

fn bench_session_frame(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default(), demo_map().unwrap()).unwrap();
    session.first_frame();

    c.bench_function("session_turn_frame", |b| {
        b.iter(|| {
            session.frame(black_box('a'));
        })
    });
}

fn bench_scene_view(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default(), demo_map().unwrap()).unwrap();
    let report = session.first_frame();
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_scene_view", |b| {
        b.iter(|| {
            view.render_into(
                session.screen(),
                &report.info,
                black_box(Viewport::new(260, 67)),
                &mut fb,
            );
        })
    });
}

criterion_group!(benches, bench_scan, bench_session_frame, bench_scene_view);
criterion_main!(benches);
