use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ViewWindow};

/// Labeled point sequence owned by a chart view.
///
/// The color is an index into the view's palette so the dataset stays
/// independent of any drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    label: String,
    color_index: usize,
    points: Vec<DataPoint>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, color_index: usize, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            color_index,
            points,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    #[must_use]
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Drops the oldest points so at most `max_len` remain.
    ///
    /// Returns how many points were evicted.
    pub fn retain_latest(&mut self, max_len: usize) -> usize {
        let excess = self.points.len().saturating_sub(max_len);
        if excess > 0 {
            self.points.drain(..excess);
        }
        excess
    }

    /// Empties the points; label and color are kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points eligible for drawing: the window slice when one is given,
    /// otherwise every point.
    #[must_use]
    pub fn visible_points(&self, window: Option<ViewWindow>) -> &[DataPoint] {
        match window {
            Some(window) => &self.points[window.visible_range(self.points.len())],
            None => &self.points,
        }
    }
}

/// Length of the longest dataset, `0` when there are none.
#[must_use]
pub fn max_dataset_len(datasets: &[Dataset]) -> usize {
    datasets.iter().map(Dataset::len).max().unwrap_or(0)
}
