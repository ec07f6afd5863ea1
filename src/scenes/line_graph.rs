//! An animated plot of a periodic signal.

use glamx::Vec2;
use kiss3d::color::{self, Color};

use crate::plot::{LineGraph, PlotArea, Waveform};
use crate::window::{FrameHooks, Stage};

/// Parameters of a [`GraphPlotter`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// The plotted signal.
    pub waveform: Waveform,
    /// Number of samples visible at once.
    pub capacity: usize,
    /// Seconds between two samples.
    pub sample_interval: f32,
    /// Values mapped to the bottom and top of the plot area.
    pub y_range: (f32, f32),
    /// Distance between the plot area and the window border, in pixels.
    pub margin: f32,
    pub line_color: Color,
    pub line_width: f32,
    pub axis_color: Color,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            waveform: Waveform::default(),
            capacity: 240,
            sample_interval: 1.0 / 60.0,
            y_range: (-1.2, 1.2),
            margin: 40.0,
            line_color: color::DODGER_BLUE,
            line_width: 2.0,
            axis_color: color::DIM_GRAY,
        }
    }
}

impl GraphConfig {
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Feeds a [`LineGraph`] from a [`Waveform`] at a fixed rate, and draws it.
pub struct GraphPlotter {
    config: GraphConfig,
    graph: LineGraph,
    time: f32,
    pending: f32,
}

impl GraphPlotter {
    pub fn new(config: GraphConfig) -> Self {
        let graph = LineGraph::new(config.capacity, config.y_range.0, config.y_range.1);

        GraphPlotter {
            config,
            graph,
            time: 0.0,
            pending: 0.0,
        }
    }

    #[inline]
    pub fn graph(&self) -> &LineGraph {
        &self.graph
    }

    /// Signal time of the latest sample, in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advances the signal by `dt` seconds, pushing one sample per elapsed interval.
    ///
    /// At most one graph worth of samples is pushed per call; older intervals
    /// would scroll out immediately anyway. Returns the number of samples pushed.
    pub fn advance(&mut self, dt: f32) -> usize {
        let interval = self.config.sample_interval;
        if interval <= 0.0 {
            return 0;
        }

        self.pending += dt.max(0.0);

        let due = (self.pending / interval).floor() as usize;
        let skipped = due.saturating_sub(self.graph.capacity());
        self.time += skipped as f32 * interval;
        self.pending -= due as f32 * interval;

        let pushed = due - skipped;
        for _ in 0..pushed {
            self.time += interval;
            self.graph.push(self.config.waveform.sample(self.time));
        }

        pushed
    }

    /// The plot area of a window of `size` pixels.
    pub fn area(&self, size: Vec2) -> PlotArea {
        PlotArea::inside_window(size, self.config.margin)
    }
}

impl FrameHooks<Stage> for GraphPlotter {
    fn update(&mut self, _: &mut Stage, dt: f32) {
        let _ = self.advance(dt);
    }

    fn draw(&mut self, stage: &mut Stage) {
        let area = self.area(stage.size());
        let axis = self.config.axis_color;

        stage.draw_line_2d(
            area.mins,
            Vec2::new(area.mins.x, area.maxs.y),
            axis,
            1.0,
        );
        stage.draw_line_2d(
            area.mins,
            Vec2::new(area.maxs.x, area.mins.y),
            axis,
            1.0,
        );
        if let Some((a, b)) = self.graph.zero_line(&area) {
            stage.draw_line_2d(a, b, axis, 1.0);
        }

        for (a, b) in self.graph.segments(&area) {
            stage.draw_line_2d(a, b, self.config.line_color, self.config.line_width);
        }
    }

    fn destroy(&mut self, _: &mut Stage) {
        log::info!(
            "Plotted {} samples over {:.2}s.",
            self.graph.total_pushed(),
            self.time
        );
    }
}
