//! Fixed-capacity scrolling line graphs.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glamx::Vec2;

use crate::math::remap;

/// Samples reserved up front by [`LineGraph::new`].
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// The shape of a periodic [`Waveform`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveShape {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A periodic signal of time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waveform {
    pub shape: WaveShape,
    /// Periods per second.
    pub frequency: f32,
    /// Peak value; the signal spans `[-amplitude, amplitude]`.
    pub amplitude: f32,
}

impl Default for Waveform {
    fn default() -> Self {
        Waveform {
            shape: WaveShape::Sine,
            frequency: 0.5,
            amplitude: 1.0,
        }
    }
}

impl Waveform {
    pub fn new(shape: WaveShape, frequency: f32, amplitude: f32) -> Self {
        Waveform {
            shape,
            frequency,
            amplitude,
        }
    }

    /// The value of the signal at time `t`, in seconds.
    ///
    /// Every shape starts its period at phase 0: the sine at 0, the square
    /// at `amplitude`, the triangle and the sawtooth at `-amplitude`.
    pub fn sample(&self, t: f32) -> f32 {
        let phase = (t * self.frequency).rem_euclid(1.0);

        let unit = match self.shape {
            WaveShape::Sine => (TAU * phase).sin(),
            WaveShape::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveShape::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            WaveShape::Sawtooth => 2.0 * phase - 1.0,
        };

        unit * self.amplitude
    }
}

/// A rectangle of the 2D overlay in which a graph is drawn.
///
/// Overlay coordinates have their origin at the window center and `y` up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlotArea {
    /// Bottom-left corner.
    pub mins: Vec2,
    /// Top-right corner.
    pub maxs: Vec2,
}

impl PlotArea {
    pub fn new(mins: Vec2, maxs: Vec2) -> Self {
        PlotArea { mins, maxs }
    }

    /// The area covering a window of `size` pixels, minus `margin` pixels on every side.
    ///
    /// Margins larger than half the window collapse the area to its center.
    pub fn inside_window(size: Vec2, margin: f32) -> Self {
        let half = (size * 0.5 - Vec2::splat(margin)).max(Vec2::ZERO);
        PlotArea::new(-half, half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.maxs.y - self.mins.y
    }
}

/// A scrolling graph keeping the last `capacity` samples.
///
/// The oldest sample is drawn on the left edge of the plot area, and a full
/// graph spans its whole width. Values are mapped linearly from
/// `[y_min, y_max]` to the bottom and top edges, and clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGraph {
    samples: VecDeque<f32>,
    capacity: usize,
    y_min: f32,
    y_max: f32,
    total: u64,
}

impl LineGraph {
    /// An empty graph. A capacity below 2 is raised to 2.
    ///
    /// Any capacity is accepted; memory is only taken as samples come in.
    pub fn new(capacity: usize, y_min: f32, y_max: f32) -> Self {
        let capacity = capacity.max(2);

        LineGraph {
            samples: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED_SAMPLES)),
            capacity,
            y_min: y_min.min(y_max),
            y_max: y_max.max(y_min),
            total: 0,
        }
    }

    /// Appends a sample, evicting the oldest one if the graph is full.
    pub fn push(&mut self, value: f32) {
        if self.samples.len() == self.capacity {
            let _ = self.samples.pop_front();
        }

        self.samples.push_back(value);
        self.total += 1;
    }

    /// Removes every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples pushed since creation, including evicted ones.
    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.total
    }

    /// The samples kept, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// The most recent sample.
    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    #[inline]
    pub fn y_range(&self) -> (f32, f32) {
        (self.y_min, self.y_max)
    }

    /// The overlay point of a value, at horizontal slot `index`.
    pub fn map_point(&self, index: usize, value: f32, area: &PlotArea) -> Vec2 {
        let x = area.mins.x + area.width() * index as f32 / (self.capacity - 1) as f32;
        let y = remap(value, self.y_min, self.y_max, area.mins.y, area.maxs.y)
            .clamp(area.mins.y, area.maxs.y);

        Vec2::new(x, y)
    }

    /// The overlay points of the kept samples, oldest first.
    pub fn points(&self, area: &PlotArea) -> Vec<Vec2> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, v)| self.map_point(i, *v, area))
            .collect()
    }

    /// The segments joining consecutive points.
    pub fn segments(&self, area: &PlotArea) -> Vec<(Vec2, Vec2)> {
        self.points(area).windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// The horizontal line at value 0, if it lies within the vertical range.
    pub fn zero_line(&self, area: &PlotArea) -> Option<(Vec2, Vec2)> {
        if self.y_min > 0.0 || self.y_max < 0.0 {
            return None;
        }

        let y = remap(0.0, self.y_min, self.y_max, area.mins.y, area.maxs.y);
        Some((Vec2::new(area.mins.x, y), Vec2::new(area.maxs.x, y)))
    }
}
