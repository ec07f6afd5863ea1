use std::cell::RefCell;
use std::rc::Rc;

use kiss3d_scenes::window::{Callbacks, FrameDriver, FrameHooks, FrameLoop, LoopState};
use kiss3d_scenes::Error;

/// A driver that asks to close once `close_after` frames have been presented.
struct ScriptedDriver {
    close_after: usize,
    presented: usize,
    dt: f32,
    released: usize,
    log: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDriver {
    fn new(close_after: usize, log: Rc<RefCell<Vec<String>>>) -> Self {
        ScriptedDriver {
            close_after,
            presented: 0,
            dt: 0.25,
            released: 0,
            log,
        }
    }
}

impl FrameDriver for ScriptedDriver {
    fn should_close(&self) -> bool {
        self.presented >= self.close_after
    }

    fn frame_time(&mut self) -> f32 {
        self.dt
    }

    async fn present(&mut self) {
        self.presented += 1;
        self.log.borrow_mut().push("present".to_string());
    }

    fn release(&mut self) {
        self.released += 1;
        self.log.borrow_mut().push("release".to_string());
    }
}

fn recording_callbacks(log: &Rc<RefCell<Vec<String>>>) -> Callbacks<ScriptedDriver> {
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    Callbacks::new()
        .on_update(move |_, dt| l1.borrow_mut().push(format!("update {}", dt)))
        .on_draw(move |_| l2.borrow_mut().push("draw".to_string()))
        .on_destroy(move |_| l3.borrow_mut().push("destroy".to_string()))
}

#[test]
fn three_frames_then_close() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(3, log.clone()));
    let mut hooks = recording_callbacks(&log);

    assert_eq!(frame_loop.state(), LoopState::Idle);
    let stats = pollster::block_on(frame_loop.run(&mut hooks)).unwrap();

    let expected = [
        "update 0.25",
        "draw",
        "present",
        "update 0.25",
        "draw",
        "present",
        "update 0.25",
        "draw",
        "present",
        "destroy",
        "release",
    ];
    assert_eq!(*log.borrow(), expected);
    assert_eq!(stats.frames, 3);
    assert!((stats.elapsed - 0.75).abs() < 1.0e-6);
    assert_eq!(frame_loop.state(), LoopState::Terminated);
    assert_eq!(frame_loop.driver().released, 1);
}

#[test]
fn close_before_first_frame_only_tears_down() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(0, log.clone()));
    let mut hooks = recording_callbacks(&log);

    let stats = pollster::block_on(frame_loop.run(&mut hooks)).unwrap();

    assert_eq!(stats.frames, 0);
    assert_eq!(*log.borrow(), ["destroy", "release"]);
}

#[test]
fn missing_callbacks_are_skipped() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(2, log.clone()));
    let l = log.clone();
    let mut hooks = Callbacks::new().on_draw(move |_: &mut ScriptedDriver| {
        l.borrow_mut().push("draw".to_string())
    });

    let _ = pollster::block_on(frame_loop.run(&mut hooks)).unwrap();

    assert_eq!(
        *log.borrow(),
        ["draw", "present", "draw", "present", "release"]
    );
}

#[test]
fn terminated_loop_cannot_run_again() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(1, log.clone()));
    let mut hooks = recording_callbacks(&log);

    let _ = pollster::block_on(frame_loop.run(&mut hooks)).unwrap();
    let again = pollster::block_on(frame_loop.run(&mut hooks));

    assert_eq!(again, Err(Error::LoopTerminated));
    assert_eq!(log.borrow().iter().filter(|e| *e == "destroy").count(), 1);
    assert_eq!(frame_loop.driver().released, 1);
}

/// Records when it is released and when it is dropped.
struct Tracked {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl FrameDriver for Tracked {
    fn should_close(&self) -> bool {
        self.events.borrow().contains(&"present")
    }

    fn frame_time(&mut self) -> f32 {
        0.0
    }

    async fn present(&mut self) {
        self.events.borrow_mut().push("present");
    }

    fn release(&mut self) {
        self.events.borrow_mut().push("release");
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.events.borrow_mut().push("drop");
    }
}

#[test]
fn released_driver_lives_until_dropped() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(Tracked {
        events: events.clone(),
    });

    let stats = pollster::block_on(frame_loop.run(&mut Callbacks::<Tracked>::new())).unwrap();
    assert_eq!(stats.frames, 1);
    assert_eq!(*events.borrow(), ["present", "release"]);

    let driver = frame_loop.into_driver();
    assert_eq!(events.borrow().len(), 2);
    drop(driver);
    assert_eq!(*events.borrow(), ["present", "release", "drop"]);
}

#[derive(Default)]
struct Counter {
    updates: usize,
    draws: usize,
    destroys: usize,
}

impl FrameHooks<ScriptedDriver> for Counter {
    fn update(&mut self, _: &mut ScriptedDriver, _: f32) {
        self.updates += 1;
    }

    fn draw(&mut self, _: &mut ScriptedDriver) {
        self.draws += 1;
    }

    fn destroy(&mut self, _: &mut ScriptedDriver) {
        self.destroys += 1;
    }
}

#[test]
fn hooks_trait_runs_once_per_frame() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(3, log));
    let mut counter = Counter::default();

    let _ = pollster::block_on(frame_loop.run(&mut counter)).unwrap();

    assert_eq!(counter.updates, 3);
    assert_eq!(counter.draws, 3);
    assert_eq!(counter.destroys, 1);
}

struct Silent;
impl FrameHooks<ScriptedDriver> for Silent {}

#[test]
fn default_hooks_do_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut frame_loop = FrameLoop::new(ScriptedDriver::new(2, log.clone()));

    let stats = pollster::block_on(frame_loop.run(&mut Silent)).unwrap();

    assert_eq!(stats.frames, 2);
    assert_eq!(*log.borrow(), ["present", "present", "release"]);
}
