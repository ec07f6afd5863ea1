//! Drag with the left mouse button to orbit around a few shapes; the shapes
//! under the cursor are highlighted.
use kiss3d_scenes::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let config = ShapeViewerConfig::default();
    let window = WindowConfig::new("kiss3d-scenes: shape viewer").with_background(WHITE);

    let mut stage = match Stage::open(&window, &config.camera).await {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("Unable to open the window: {}", e);
            return;
        }
    };

    let mut viewer = ShapeViewer::new(config);
    viewer.attach(&mut stage);

    if let Err(e) = FrameLoop::new(stage).run(&mut viewer).await {
        log::error!("{}", e);
    }
}
