use glamx::Vec2;
use kiss3d_scenes::window::{FrameClock, FramePacer, MouseState, WindowConfig, DEFAULT_FPS};
use kiss3d_scenes::Error;
use web_time::{Duration, Instant};

#[test]
fn clock_reports_time_between_ticks() {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);

    let dt = clock.tick_at(start + Duration::from_millis(250));
    assert!((dt - 0.25).abs() < 1.0e-6);

    let dt = clock.tick_at(start + Duration::from_millis(300));
    assert!((dt - 0.05).abs() < 1.0e-6);

    // Going back in time never yields a negative delta.
    assert_eq!(clock.tick_at(start), 0.0);
}

#[test]
fn clock_clamps_long_frames() {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start).with_max_delta(Duration::from_millis(100));

    let dt = clock.tick_at(start + Duration::from_secs(5));
    assert!((dt - 0.1).abs() < 1.0e-6);
}

#[test]
fn pacer_waits_for_the_rest_of_the_frame() {
    let start = Instant::now();
    let pacer = FramePacer::starting_at(50, start);
    assert_eq!(pacer.min_frame_duration(), Some(Duration::from_millis(20)));

    assert_eq!(pacer.remaining_at(start), Duration::from_millis(20));
    assert_eq!(
        pacer.remaining_at(start + Duration::from_millis(15)),
        Duration::from_millis(5)
    );
    assert_eq!(pacer.remaining_at(start + Duration::from_millis(20)), Duration::ZERO);
    assert_eq!(pacer.remaining_at(start + Duration::from_millis(35)), Duration::ZERO);
}

#[test]
fn pacer_follows_frame_rate_changes() {
    let start = Instant::now();
    let mut pacer = FramePacer::starting_at(DEFAULT_FPS, start);
    assert_eq!(pacer.fps(), 60);
    let sixtieth = pacer.min_frame_duration().unwrap();
    assert!((sixtieth.as_secs_f64() - 1.0 / 60.0).abs() < 1.0e-9);

    pacer.set_fps(10);
    assert_eq!(pacer.remaining_at(start + Duration::from_millis(40)), Duration::from_millis(60));

    pacer.restart_at(start + Duration::from_millis(100));
    assert_eq!(pacer.remaining_at(start + Duration::from_millis(100)), Duration::from_millis(100));

    pacer.set_fps(0);
    assert_eq!(pacer.min_frame_duration(), None);
    assert_eq!(pacer.remaining_at(start), Duration::ZERO);
}

#[test]
fn press_is_reported_for_one_frame() {
    let mut mouse = MouseState::new();
    assert!(mouse.cursor().is_none());

    mouse.begin_frame();
    mouse.move_to(Vec2::new(10.0, 20.0));
    mouse.press_left();
    assert!(mouse.left_pressed());
    assert!(mouse.left_down());
    assert_eq!(mouse.cursor(), Some(Vec2::new(10.0, 20.0)));

    // Held down: no new edge.
    mouse.begin_frame();
    mouse.press_left();
    assert!(!mouse.left_pressed());
    assert!(mouse.left_down());

    mouse.begin_frame();
    mouse.release_left();
    assert!(mouse.left_released());
    assert!(!mouse.left_down());

    mouse.begin_frame();
    assert!(!mouse.left_released());
    assert_eq!(mouse.cursor(), Some(Vec2::new(10.0, 20.0)));
}

#[test]
fn window_config_defaults_and_validation() {
    let config = WindowConfig::new("title");
    assert_eq!(config.title, "title");
    assert_eq!(config.fps, DEFAULT_FPS);
    assert_eq!(config.fps, 60);
    assert_eq!(config.validate(), Ok(()));

    assert_eq!(
        config.clone().with_size(0, 480).validate(),
        Err(Error::InvalidWindowSize {
            width: 0,
            height: 480
        })
    );
    assert_eq!(
        config.with_fps(0).validate(),
        Err(Error::InvalidFrameRate)
    );
}
