use crate::core::{PlotArea, ViewWindow};

pub(super) const SCROLLBAR_OFFSET_Y_PX: f64 = 25.0;
pub(super) const SCROLLBAR_HEIGHT_PX: f64 = 5.0;
pub(super) const SCROLLBAR_MIN_THUMB_WIDTH_PX: f64 = 20.0;
pub(super) const SCROLLBAR_READOUT_OFFSET_Y_PX: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll indicator drawn under the x axis when retained data overflows
/// the view window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarLayout {
    pub track: ScrollbarRect,
    pub thumb: ScrollbarRect,
    pub readout: String,
    pub readout_x: f64,
    pub readout_y: f64,
    pub auto_scroll: bool,
}

impl ScrollbarLayout {
    /// Returns `None` while all data fits in one window.
    #[must_use]
    pub fn compute(
        area: PlotArea,
        window: ViewWindow,
        max_len: usize,
        auto_scroll: bool,
    ) -> Option<Self> {
        if max_len <= window.size() {
            return None;
        }

        let y = area.bottom() + SCROLLBAR_OFFSET_Y_PX;
        let track = ScrollbarRect {
            x: area.x,
            y,
            width: area.width,
            height: SCROLLBAR_HEIGHT_PX,
        };

        let thumb_ratio = window.size() as f64 / max_len as f64;
        let thumb_width = (area.width * thumb_ratio)
            .max(SCROLLBAR_MIN_THUMB_WIDTH_PX)
            .min(area.width);
        let scrollable = (max_len - window.size()) as f64;
        let progress = window.start() as f64 / scrollable;
        let thumb = ScrollbarRect {
            x: area.x + (area.width - thumb_width) * progress,
            y,
            width: thumb_width,
            height: SCROLLBAR_HEIGHT_PX,
        };

        Some(Self {
            track,
            thumb,
            readout: range_readout(window, max_len, auto_scroll),
            readout_x: area.x,
            readout_y: y + SCROLLBAR_READOUT_OFFSET_Y_PX,
            auto_scroll,
        })
    }
}

/// `Showing 11 - 60 of 250 points`, 1-based and inclusive.
fn range_readout(window: ViewWindow, max_len: usize, auto_scroll: bool) -> String {
    let first = window.start() + 1;
    let last = window.end().min(max_len);
    let suffix = if auto_scroll { " (Auto-scroll ON)" } else { "" };
    format!("Showing {first} - {last} of {max_len} points{suffix}")
}
