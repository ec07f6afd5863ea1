//! The demo scenes.
//!
//! Each scene implements [`FrameHooks`](crate::window::FrameHooks) for a
//! [`Stage`](crate::window::Stage), and keeps its per-frame logic in plain
//! methods that do not need a window.

pub use self::cube_grid::{CubeGrid, CubeGridConfig, PALETTE, RAY_LENGTH};
pub use self::line_graph::{GraphConfig, GraphPlotter};
pub use self::shape_viewer::{ShapeViewer, ShapeViewerConfig};

mod cube_grid;
mod line_graph;
mod shape_viewer;
