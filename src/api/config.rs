use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Construction-time configuration of a [`ChartView`](super::ChartView).
///
/// Every field has a serde default, so a partial JSON object such as
/// `{"streaming": true, "retain_data": true}` is a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    pub padding: f64,
    /// Dataset colors, assigned cyclically by insertion order.
    pub line_colors: Vec<Color>,
    pub background_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub grid_color: Color,
    pub scrollbar_track_color: Color,
    pub scrollbar_thumb_auto_color: Color,
    pub scrollbar_thumb_manual_color: Color,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub show_grid: bool,
    pub line_width: f64,
    /// Marker radius stamped on each visible point; `0` disables markers.
    pub dot_size: f64,
    /// Per-dataset cap applied when streaming without retention.
    pub max_points: usize,
    pub streaming: bool,
    pub retain_data: bool,
    pub view_window_size: usize,
    pub auto_scroll_with_new_data: bool,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            padding: 30.0,
            line_colors: default_palette(),
            background_color: Color::WHITE,
            axis_color: Color::from_rgb8(0x33, 0x33, 0x33),
            label_color: Color::from_rgb8(0x66, 0x66, 0x66),
            grid_color: Color::from_rgb8(0xEE, 0xEE, 0xEE),
            scrollbar_track_color: Color::from_rgb8(0xEE, 0xEE, 0xEE),
            scrollbar_thumb_auto_color: Color::from_rgb8(0x66, 0xCC, 0x66),
            scrollbar_thumb_manual_color: Color::from_rgb8(0x99, 0x99, 0x99),
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            show_grid: false,
            line_width: 2.0,
            dot_size: 0.0,
            max_points: 100,
            streaming: false,
            retain_data: false,
            view_window_size: 50,
            auto_scroll_with_new_data: true,
        }
    }
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x33, 0x66, 0xCC),
        Color::from_rgb8(0xDC, 0x39, 0x12),
        Color::from_rgb8(0xFF, 0x99, 0x00),
        Color::from_rgb8(0x10, 0x96, 0x18),
        Color::from_rgb8(0x99, 0x00, 0x99),
    ]
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Parses a JSON config and validates it.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("malformed config json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("config not serializable: {err}")))
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_line_colors(mut self, colors: Vec<Color>) -> Self {
        self.line_colors = colors;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Sets axis captions and the chart title. Empty strings are not drawn.
    #[must_use]
    pub fn with_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_dot_size(mut self, radius: f64) -> Self {
        self.dot_size = radius;
        self
    }

    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    #[must_use]
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    #[must_use]
    pub fn with_retain_data(mut self, retain: bool) -> Self {
        self.retain_data = retain;
        self
    }

    #[must_use]
    pub fn with_view_window_size(mut self, size: usize) -> Self {
        self.view_window_size = size;
        self
    }

    #[must_use]
    pub fn with_auto_scroll_with_new_data(mut self, enabled: bool) -> Self {
        self.auto_scroll_with_new_data = enabled;
        self
    }

    /// Color of the `index`-th added dataset.
    #[must_use]
    pub fn line_color(&self, index: usize) -> Color {
        match self.line_colors.len() {
            0 => self.axis_color,
            len => self.line_colors[index % len],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        PlotArea::from_viewport(self.viewport, self.padding)?;

        if self.line_colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "line color palette must not be empty".to_owned(),
            ));
        }
        for color in self.line_colors.iter().chain([
            &self.background_color,
            &self.axis_color,
            &self.label_color,
            &self.grid_color,
            &self.scrollbar_track_color,
            &self.scrollbar_thumb_auto_color,
            &self.scrollbar_thumb_manual_color,
        ]) {
            color.validate()?;
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.dot_size.is_finite() || self.dot_size < 0.0 {
            return Err(ChartError::InvalidConfig(
                "dot size must be finite and >= 0".to_owned(),
            ));
        }
        if self.max_points == 0 {
            return Err(ChartError::InvalidConfig(
                "max points must be > 0".to_owned(),
            ));
        }
        if self.view_window_size == 0 {
            return Err(ChartError::InvalidConfig(
                "view window size must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
