use tracing::{debug, trace, warn};

use crate::core::{DataPoint, Dataset};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::ChartView;

impl<S: DrawingSurface> ChartView<S> {
    /// Adds a dataset; its color is the next palette entry, cycling.
    ///
    /// Points with a non-finite coordinate are dropped.
    pub fn add_dataset(
        &mut self,
        mut points: Vec<DataPoint>,
        label: impl Into<String>,
    ) -> &mut Self {
        let original_len = points.len();
        points.retain(|point| point.is_finite());
        if points.len() != original_len {
            warn!(
                dropped = original_len - points.len(),
                "dropping non-finite points from new dataset"
            );
        }
        let color_index = self.datasets.len() % self.config.line_colors.len();
        let dataset = Dataset::new(label, color_index, points);
        debug!(
            index = self.datasets.len(),
            label = dataset.label(),
            points = dataset.len(),
            color_index,
            "add dataset"
        );
        self.datasets.push(dataset);
        self
    }

    /// Appends `point` to one dataset, logging and ignoring a bad index or a
    /// non-finite point.
    pub fn add_point(&mut self, dataset_index: usize, point: DataPoint) -> &mut Self {
        if let Err(err) = self.try_add_point(dataset_index, point) {
            warn!(error = %err, "skipping add_point");
        }
        self
    }

    /// Fallible form of [`Self::add_point`].
    ///
    /// After the append, streaming without retention evicts the oldest points
    /// beyond `max_points`; streaming with retention and auto-scroll moves the
    /// window so it ends on the newest point.
    pub fn try_add_point(&mut self, dataset_index: usize, point: DataPoint) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        let dataset_count = self.datasets.len();
        let dataset = self
            .datasets
            .get_mut(dataset_index)
            .ok_or(ChartError::DatasetIndexOutOfRange {
                index: dataset_index,
                len: dataset_count,
            })?;

        dataset.push(point);
        let evicted = if self.config.streaming && !self.config.retain_data {
            dataset.retain_latest(self.config.max_points)
        } else {
            0
        };
        let len = dataset.len();
        trace!(dataset_index, count = len, "append point");

        if evicted > 0 {
            trace!(dataset_index, evicted, "evict oldest points");
            let max_len = self.data_length();
            self.view_window.clamp_to(max_len);
        }

        if self.config.streaming
            && self.config.retain_data
            && self.auto_scroll
            && self.view_window.follow_latest(len)
        {
            trace!(
                dataset_index,
                start = self.view_window.start(),
                "auto-follow newest point"
            );
        }
        Ok(())
    }

    /// Drops every dataset and resets the window and auto-scroll flag.
    pub fn clear(&mut self) -> &mut Self {
        debug!(datasets = self.datasets.len(), "clear all datasets");
        self.datasets.clear();
        self.reset_navigation();
        self
    }

    /// Empties one dataset's points, keeping its label and color.
    ///
    /// The window and auto-scroll flag are reset even when `dataset_index`
    /// is out of range.
    pub fn clear_dataset(&mut self, dataset_index: usize) -> &mut Self {
        if let Err(err) = self.try_clear_dataset(dataset_index) {
            debug!(error = %err, "clear_dataset ignored missing dataset");
        }
        self
    }

    /// Fallible form of [`Self::clear_dataset`]; the navigation reset still
    /// happens when the index is out of range.
    pub fn try_clear_dataset(&mut self, dataset_index: usize) -> ChartResult<()> {
        let dataset_count = self.datasets.len();
        let result = match self.datasets.get_mut(dataset_index) {
            Some(dataset) => {
                dataset.clear();
                debug!(dataset_index, "clear dataset");
                Ok(())
            }
            None => Err(ChartError::DatasetIndexOutOfRange {
                index: dataset_index,
                len: dataset_count,
            }),
        };
        self.reset_navigation();
        result
    }

    fn reset_navigation(&mut self) {
        self.view_window.reset();
        self.auto_scroll = self.config.auto_scroll_with_new_data;
    }
}
