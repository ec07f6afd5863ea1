//! Click on the cubes of a 5x5x5 grid to remove them, one per click.
//!
//! The camera orbits around the grid on its own. Set `CUBE_PICKER_NEAREST=1`
//! to remove the cube nearest to the camera instead of the last one hit.
use kiss3d_scenes::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let policy = if std::env::var_os("CUBE_PICKER_NEAREST").is_some() {
        PickPolicy::Nearest
    } else {
        PickPolicy::LastHit
    };
    let config = CubeGridConfig::default().with_pick_policy(policy);
    let window = WindowConfig::new("kiss3d-scenes: cube picker");

    let mut stage = match Stage::open(&window, &config.camera()).await {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("Unable to open the window: {}", e);
            return;
        }
    };

    let mut grid = CubeGrid::with_random_colors(config);
    grid.attach(&mut stage);

    if let Err(e) = FrameLoop::new(stage).run(&mut grid).await {
        log::error!("{}", e);
    }
}
