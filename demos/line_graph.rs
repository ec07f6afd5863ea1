//! A scrolling plot of a sine wave, built from plain closures instead of a
//! dedicated hooks type.
use std::cell::RefCell;
use std::rc::Rc;

use kiss3d_scenes::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let window = WindowConfig::new("kiss3d-scenes: line graph")
        .with_size(960, 480)
        .with_fps(30);
    let config = GraphConfig::default().with_waveform(Waveform::new(WaveShape::Sine, 0.5, 1.0));

    let stage = match Stage::open(&window, &CameraRig::default().with_mode(CameraMode::Free)).await
    {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("Unable to open the window: {}", e);
            return;
        }
    };

    let plotter = Rc::new(RefCell::new(GraphPlotter::new(config)));
    let (p1, p2, p3) = (plotter.clone(), plotter.clone(), plotter);

    let mut hooks = Callbacks::new()
        .on_update(move |stage: &mut Stage, dt| p1.borrow_mut().update(stage, dt))
        .on_draw(move |stage: &mut Stage| p2.borrow_mut().draw(stage))
        .on_destroy(move |stage: &mut Stage| p3.borrow_mut().destroy(stage));

    if let Err(e) = FrameLoop::new(stage).run(&mut hooks).await {
        log::error!("{}", e);
    }
}
