/*!
# kiss3d-scenes

A few small interactive scenes built on [kiss3d](https://kiss3d.org):

* a voxel grid of cubes removed one by one by clicking on them;
* a shape viewer highlighting the shapes under the mouse cursor;
* an animated line-graph plotter.

Every scene is a set of per-frame hooks (update, draw, destroy) run by a
[`FrameLoop`](window::FrameLoop) on top of a [`Stage`](window::Stage), i.e., a
kiss3d window with its scene and camera:

```no_run
use kiss3d_scenes::prelude::*;

#[kiss3d::main]
async fn main() {
    let config = CubeGridConfig::default();
    let window = WindowConfig::new("Cube picker");

    let mut stage = match Stage::open(&window, &config.camera()).await {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let mut grid = CubeGrid::with_random_colors(config);
    grid.attach(&mut stage);

    let _ = FrameLoop::new(stage).run(&mut grid).await;
}
```

Picking is done against axis-aligned bounding boxes; see [`picking`] for the
selection policies.

The scenes and the loop log through the [`log`] facade; install any logger
(e.g. `env_logger`) to see the output.
*/
#![allow(clippy::type_complexity)]

pub use glamx;
pub use kiss3d;

pub mod bounding;
pub mod camera;
pub mod error;
pub mod math;
pub mod picking;
pub mod plot;
pub mod scenes;
pub mod shape;
pub mod window;

pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::bounding::{Aabb, Ray, RayHit};
    pub use crate::camera::{CameraMode, CameraRig, ViewCamera};
    pub use crate::error::{Error, Result};
    pub use crate::math::distance;
    pub use crate::picking::{pick, Pick, PickPolicy};
    pub use crate::plot::{LineGraph, PlotArea, WaveShape, Waveform};
    pub use crate::scenes::*;
    pub use crate::shape::{Entity, Outline, Shape};
    pub use crate::window::*;
    pub use glamx::{Vec2, Vec3};
    pub use kiss3d::color::*;
}
