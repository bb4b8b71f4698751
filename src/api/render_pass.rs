use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::core::{Dataset, PlotArea, PlotTransform, ViewWindow, compute_bounds, max_dataset_len};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, FontSpec, Path, StrokeStyle, TextHAlign};

use super::axis_ticks::{AXIS_TICK_LENGTH_PX, format_tick_label, x_axis_ticks, y_axis_ticks};
use super::legend_layout::{
    LEGEND_SWATCH_LENGTH_PX, LEGEND_TEXT_BASELINE_SHIFT_PX, layout_legend,
};
use super::{ChartView, ChartViewConfig, ScrollbarLayout};

const TICK_FONT: FontSpec = FontSpec::regular(10.0);
const CAPTION_FONT: FontSpec = FontSpec::regular(12.0);
const TITLE_FONT: FontSpec = FontSpec::bold(14.0);
const LEGEND_FONT: FontSpec = FontSpec::regular(10.0);
const READOUT_FONT: FontSpec = FontSpec::regular(10.0);

const AXIS_LINE_WIDTH: f64 = 1.0;
const X_TICK_LABEL_OFFSET_PX: f64 = 15.0;
const Y_TICK_LABEL_OFFSET_PX: f64 = 8.0;
const Y_TICK_LABEL_BASELINE_SHIFT_PX: f64 = 3.0;
const X_CAPTION_BOTTOM_MARGIN_PX: f64 = 5.0;
const Y_CAPTION_LEFT_PX: f64 = 10.0;
const TITLE_OFFSET_Y_PX: f64 = 25.0;

/// Counters describing the most recent render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Datasets stroked as a polyline (at least two visible points).
    pub series_drawn: usize,
    pub markers_drawn: usize,
    pub legend_entries: usize,
    pub scrollbar_drawn: bool,
}

impl<S: DrawingSurface> ChartView<S> {
    /// Runs one synchronous render pass onto the surface.
    ///
    /// Order: background, axes and captions, series, legend, scrollbar. With
    /// no datasets only the background is filled.
    pub fn draw(&mut self) -> ChartResult<&mut Self> {
        let pass = RenderPass {
            surface: &mut self.surface,
            config: &self.config,
            area: self.plot_area,
            datasets: &self.datasets,
            window: self.config.retain_data.then_some(self.view_window),
            auto_scroll: self.auto_scroll,
        };
        let stats = pass.run()?;
        debug!(
            series_drawn = stats.series_drawn,
            markers_drawn = stats.markers_drawn,
            legend_entries = stats.legend_entries,
            scrollbar_drawn = stats.scrollbar_drawn,
            "render pass complete"
        );
        self.last_render_stats = stats;
        Ok(self)
    }

    #[must_use]
    pub fn last_render_stats(&self) -> RenderStats {
        self.last_render_stats
    }
}

struct RenderPass<'a, S: DrawingSurface> {
    surface: &'a mut S,
    config: &'a ChartViewConfig,
    area: PlotArea,
    datasets: &'a [Dataset],
    window: Option<ViewWindow>,
    auto_scroll: bool,
}

impl<S: DrawingSurface> RenderPass<'_, S> {
    fn run(mut self) -> ChartResult<RenderStats> {
        let mut stats = RenderStats::default();
        let viewport = self.config.viewport;
        self.surface.fill_rect(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            self.config.background_color,
        )?;

        if self.datasets.is_empty() {
            return Ok(stats);
        }

        let transform = PlotTransform::new(compute_bounds(self.datasets, self.window), self.area);
        self.draw_axes(transform)?;
        self.draw_captions()?;
        self.draw_series(transform, &mut stats)?;
        stats.legend_entries = self.draw_legend()?;
        stats.scrollbar_drawn = self.draw_scrollbar()?;
        Ok(stats)
    }

    fn stroke_segment(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: StrokeStyle,
    ) -> ChartResult<()> {
        self.surface.stroke_path(&Path::segment(x1, y1, x2, y2), style)
    }

    fn draw_axes(&mut self, transform: PlotTransform) -> ChartResult<()> {
        let area = self.area;
        let bounds = transform.bounds();
        let axis_style = StrokeStyle::new(self.config.axis_color, AXIS_LINE_WIDTH);
        let label_color = self.config.label_color;

        let mut rules = Path::with_capacity(4);
        rules
            .move_to(area.x, area.bottom())
            .line_to(area.right(), area.bottom())
            .move_to(area.x, area.y)
            .line_to(area.x, area.bottom());
        self.surface.stroke_path(&rules, axis_style)?;

        let x_ticks = x_axis_ticks(bounds, area);
        let y_ticks = y_axis_ticks(bounds, area);

        for tick in &x_ticks {
            self.stroke_segment(
                tick.pixel,
                area.bottom(),
                tick.pixel,
                area.bottom() + AXIS_TICK_LENGTH_PX,
                axis_style,
            )?;
            self.surface.fill_text(
                &format_tick_label(tick.value),
                tick.pixel,
                area.bottom() + X_TICK_LABEL_OFFSET_PX,
                TICK_FONT,
                label_color,
                TextHAlign::Center,
            )?;
        }

        for tick in &y_ticks {
            self.stroke_segment(
                area.x,
                tick.pixel,
                area.x - AXIS_TICK_LENGTH_PX,
                tick.pixel,
                axis_style,
            )?;
            self.surface.fill_text(
                &format_tick_label(tick.value),
                area.x - Y_TICK_LABEL_OFFSET_PX,
                tick.pixel + Y_TICK_LABEL_BASELINE_SHIFT_PX,
                TICK_FONT,
                label_color,
                TextHAlign::Right,
            )?;
        }

        if self.config.show_grid {
            let grid_style = StrokeStyle::new(self.config.grid_color, AXIS_LINE_WIDTH);
            for tick in x_ticks.iter().filter(|tick| tick.has_grid_line()) {
                self.stroke_segment(tick.pixel, area.y, tick.pixel, area.bottom(), grid_style)?;
            }
            for tick in y_ticks.iter().filter(|tick| tick.has_grid_line()) {
                self.stroke_segment(area.x, tick.pixel, area.right(), tick.pixel, grid_style)?;
            }
        }

        Ok(())
    }

    fn draw_captions(&mut self) -> ChartResult<()> {
        let area = self.area;
        let color = self.config.label_color;

        if !self.config.x_label.is_empty() {
            self.surface.fill_text(
                &self.config.x_label,
                area.center_x(),
                f64::from(self.config.viewport.height) - X_CAPTION_BOTTOM_MARGIN_PX,
                CAPTION_FONT,
                color,
                TextHAlign::Center,
            )?;
        }

        if !self.config.y_label.is_empty() {
            self.surface.save()?;
            self.surface.translate(Y_CAPTION_LEFT_PX, area.center_y())?;
            self.surface.rotate(-FRAC_PI_2)?;
            let drawn = self.surface.fill_text(
                &self.config.y_label,
                0.0,
                0.0,
                CAPTION_FONT,
                color,
                TextHAlign::Center,
            );
            self.surface.restore()?;
            drawn?;
        }

        if !self.config.title.is_empty() {
            self.surface.fill_text(
                &self.config.title,
                area.center_x(),
                area.y - TITLE_OFFSET_Y_PX,
                TITLE_FONT,
                color,
                TextHAlign::Center,
            )?;
        }

        Ok(())
    }

    fn draw_series(
        &mut self,
        transform: PlotTransform,
        stats: &mut RenderStats,
    ) -> ChartResult<()> {
        let datasets = self.datasets;
        for dataset in datasets {
            let visible = dataset.visible_points(self.window);
            if visible.len() < 2 {
                continue;
            }

            let color = self.dataset_color(dataset);
            let mut path = Path::with_capacity(visible.len());
            for (i, point) in visible.iter().enumerate() {
                let (x, y) = transform.scale_to_pixel(*point);
                if i == 0 {
                    path.move_to(x, y);
                } else {
                    path.line_to(x, y);
                }
            }
            self.surface
                .stroke_path(&path, StrokeStyle::new(color, self.config.line_width))?;
            stats.series_drawn += 1;

            if self.config.dot_size > 0.0 {
                for point in visible {
                    let (x, y) = transform.scale_to_pixel(*point);
                    self.surface.fill_circle(x, y, self.config.dot_size, color)?;
                    stats.markers_drawn += 1;
                }
            }
        }
        Ok(())
    }

    fn draw_legend(&mut self) -> ChartResult<usize> {
        if !self.datasets.iter().any(Dataset::has_label) {
            return Ok(0);
        }

        let datasets = self.datasets;
        let surface = &mut *self.surface;
        let entries = layout_legend(datasets, self.area, |label| {
            surface.measure_text(label, LEGEND_FONT)
        })?;

        for entry in &entries {
            let dataset = &datasets[entry.dataset_index];
            let swatch = StrokeStyle::new(self.dataset_color(dataset), self.config.line_width);
            self.stroke_segment(
                entry.swatch_x,
                entry.y,
                entry.swatch_x + LEGEND_SWATCH_LENGTH_PX,
                entry.y,
                swatch,
            )?;
            self.surface.fill_text(
                dataset.label(),
                entry.text_x,
                entry.y + LEGEND_TEXT_BASELINE_SHIFT_PX,
                LEGEND_FONT,
                self.config.label_color,
                TextHAlign::Left,
            )?;
        }
        Ok(entries.len())
    }

    fn draw_scrollbar(&mut self) -> ChartResult<bool> {
        let Some(window) = self.window else {
            return Ok(false);
        };
        let max_len = max_dataset_len(self.datasets);
        let Some(layout) = ScrollbarLayout::compute(self.area, window, max_len, self.auto_scroll)
        else {
            return Ok(false);
        };

        let track = layout.track;
        self.surface.fill_rect(
            track.x,
            track.y,
            track.width,
            track.height,
            self.config.scrollbar_track_color,
        )?;

        let thumb = layout.thumb;
        let thumb_color = if layout.auto_scroll {
            self.config.scrollbar_thumb_auto_color
        } else {
            self.config.scrollbar_thumb_manual_color
        };
        self.surface
            .fill_rect(thumb.x, thumb.y, thumb.width, thumb.height, thumb_color)?;

        self.surface.fill_text(
            &layout.readout,
            layout.readout_x,
            layout.readout_y,
            READOUT_FONT,
            self.config.label_color,
            TextHAlign::Left,
        )?;
        Ok(true)
    }

    fn dataset_color(&self, dataset: &Dataset) -> Color {
        self.config.line_color(dataset.color_index())
    }
}
