use smallvec::SmallVec;

use crate::core::{Bounds, PlotArea};

/// Intervals per axis; ticks sit on the `AXIS_TICK_STEPS + 1` boundaries.
pub const AXIS_TICK_STEPS: usize = 5;
pub(super) const AXIS_TICK_LENGTH_PX: f64 = 5.0;

pub(super) type AxisTicks = SmallVec<[AxisTick; AXIS_TICK_STEPS + 1]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    /// Tick position along the axis, `0..=AXIS_TICK_STEPS`.
    pub step: usize,
    pub value: f64,
    /// Pixel x for the horizontal axis, pixel y for the vertical one.
    pub pixel: f64,
}

impl AxisTick {
    /// Ticks past the origin get grid lines.
    #[must_use]
    pub fn has_grid_line(self) -> bool {
        self.step > 0
    }
}

pub(super) fn x_axis_ticks(bounds: Bounds, area: PlotArea) -> AxisTicks {
    (0..=AXIS_TICK_STEPS)
        .map(|step| {
            let fraction = step as f64 / AXIS_TICK_STEPS as f64;
            AxisTick {
                step,
                value: bounds.min_x + bounds.span_x() * fraction,
                pixel: area.x + area.width * fraction,
            }
        })
        .collect()
}

pub(super) fn y_axis_ticks(bounds: Bounds, area: PlotArea) -> AxisTicks {
    (0..=AXIS_TICK_STEPS)
        .map(|step| {
            let fraction = step as f64 / AXIS_TICK_STEPS as f64;
            AxisTick {
                step,
                value: bounds.min_y + bounds.span_y() * fraction,
                pixel: area.bottom() - area.height * fraction,
            }
        })
        .collect()
}

/// One decimal place, e.g. `-2.5`.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    format!("{value:.1}")
}
