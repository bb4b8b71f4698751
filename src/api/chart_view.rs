use tracing::debug;

use crate::core::{
    Bounds, DataPoint, Dataset, PlotArea, PlotTransform, ViewWindow, compute_bounds,
    max_dataset_len,
};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::{ChartViewConfig, RenderStats};

/// Line chart bound to one drawing surface.
///
/// `ChartView` owns its datasets, the scroll window and the auto-scroll flag.
/// Mutators return `&mut Self` so calls can be chained; nothing is drawn
/// until [`ChartView::draw`] runs.
#[derive(Debug)]
pub struct ChartView<S: DrawingSurface> {
    pub(super) surface: S,
    pub(super) config: ChartViewConfig,
    pub(super) plot_area: PlotArea,
    pub(super) datasets: Vec<Dataset>,
    pub(super) view_window: ViewWindow,
    pub(super) auto_scroll: bool,
    pub(super) last_render_stats: RenderStats,
}

impl<S: DrawingSurface> ChartView<S> {
    /// Validates `config` and binds the view to `surface`.
    pub fn new(surface: S, config: ChartViewConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot_area = PlotArea::from_viewport(config.viewport, config.padding)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            streaming = config.streaming,
            retain_data = config.retain_data,
            view_window_size = config.view_window_size,
            "create chart view"
        );

        Ok(Self {
            surface,
            plot_area,
            datasets: Vec::new(),
            view_window: ViewWindow::new(config.view_window_size),
            auto_scroll: config.auto_scroll_with_new_data,
            last_render_stats: RenderStats::default(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&Dataset> {
        self.datasets.get(index)
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Point count of the longest dataset.
    #[must_use]
    pub fn data_length(&self) -> usize {
        max_dataset_len(&self.datasets)
    }

    #[must_use]
    pub fn view_window(&self) -> ViewWindow {
        self.view_window
    }

    #[must_use]
    pub fn is_auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Window applied to datasets, or `None` when everything is visible.
    #[must_use]
    pub fn visible_window(&self) -> Option<ViewWindow> {
        self.config.retain_data.then_some(self.view_window)
    }

    /// Padded data bounds of everything currently visible.
    #[must_use]
    pub fn compute_bounds(&self) -> Bounds {
        compute_bounds(&self.datasets, self.visible_window())
    }

    /// Transform used by the next render pass.
    #[must_use]
    pub fn plot_transform(&self) -> PlotTransform {
        PlotTransform::new(self.compute_bounds(), self.plot_area)
    }

    /// Maps a data point into pixel space with the current bounds.
    #[must_use]
    pub fn scale_to_pixel(&self, point: DataPoint) -> (f64, f64) {
        self.plot_transform().scale_to_pixel(point)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
