use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Dataset, PlotArea, ViewWindow};

/// Fraction of each axis range added on both ends of the tight bounds.
pub const BOUNDS_PADDING_RATIO: f64 = 0.05;

/// Half-span used when every visible value on an axis is identical.
pub const DEGENERATE_HALF_SPAN: f64 = 1.0;

/// Data-space rectangle mapped onto the plot area for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Returned when nothing is visible.
    pub const EMPTY_DEFAULT: Self = Self {
        min_x: 0.0,
        max_x: 10.0,
        min_y: 0.0,
        max_y: 10.0,
    };

    #[must_use]
    pub fn span_x(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn span_y(self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY_DEFAULT
    }
}

/// Padded bounds over the visible slice of every dataset.
///
/// `window` is `Some` when retention is enabled. Axes whose visible values
/// collapse to a single number are widened by [`DEGENERATE_HALF_SPAN`] so
/// scaling stays finite.
#[must_use]
pub fn compute_bounds(datasets: &[Dataset], window: Option<ViewWindow>) -> Bounds {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut seen = false;

    for point in datasets
        .iter()
        .flat_map(|dataset| dataset.visible_points(window))
    {
        seen = true;
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    if !seen {
        return Bounds::EMPTY_DEFAULT;
    }

    let (min_x, max_x) = pad_axis(min_x, max_x);
    let (min_y, max_y) = pad_axis(min_y, max_y);
    Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

fn pad_axis(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    if range == 0.0 {
        return (min - DEGENERATE_HALF_SPAN, max + DEGENERATE_HALF_SPAN);
    }
    let pad = range * BOUNDS_PADDING_RATIO;
    (min - pad, max + pad)
}

/// Affine map between data space and the pixel plot area.
///
/// Pixel y grows downward, so larger data y maps to smaller pixel y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    bounds: Bounds,
    area: PlotArea,
}

impl PlotTransform {
    #[must_use]
    pub fn new(bounds: Bounds, area: PlotArea) -> Self {
        Self { bounds, area }
    }

    #[must_use]
    pub fn bounds(self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn scale_to_pixel(self, point: DataPoint) -> (f64, f64) {
        let b = self.bounds;
        let a = self.area;
        let x = a.x + (point.x - b.min_x) / b.span_x() * a.width;
        let y = a.y + a.height - (point.y - b.min_y) / b.span_y() * a.height;
        (x, y)
    }

    #[must_use]
    pub fn pixel_to_data(self, px: f64, py: f64) -> DataPoint {
        let b = self.bounds;
        let a = self.area;
        let x = b.min_x + (px - a.x) / a.width * b.span_x();
        let y = b.min_y + (a.y + a.height - py) / a.height * b.span_y();
        DataPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, PlotTransform, compute_bounds};
    use crate::core::{DataPoint, Dataset, PlotArea, ViewWindow};
    use approx::assert_relative_eq;

    fn area() -> PlotArea {
        PlotArea {
            x: 45.0,
            y: 30.0,
            width: 225.0,
            height: 140.0,
        }
    }

    #[test]
    fn no_datasets_yield_default_box() {
        assert_eq!(compute_bounds(&[], None), Bounds::EMPTY_DEFAULT);
    }

    #[test]
    fn empty_window_slice_yields_default_box() {
        let sets = [Dataset::new("a", 0, vec![DataPoint::new(1.0, 1.0)])];
        let mut window = ViewWindow::new(2);
        assert!(window.try_move_to(0, 1));
        let empty = [Dataset::new("a", 0, Vec::new())];
        assert_eq!(compute_bounds(&empty, Some(window)), Bounds::EMPTY_DEFAULT);
        assert_ne!(compute_bounds(&sets, Some(window)), Bounds::EMPTY_DEFAULT);
    }

    #[test]
    fn bounds_are_padded_by_five_percent() {
        let sets = [Dataset::new(
            "a",
            0,
            vec![DataPoint::new(0.0, -10.0), DataPoint::new(100.0, 10.0)],
        )];
        let bounds = compute_bounds(&sets, None);
        assert_relative_eq!(bounds.min_x, -5.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_x, 105.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.min_y, -11.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_y, 11.0, epsilon = 1e-12);
    }

    #[test]
    fn bounds_only_consider_window_slice() {
        let points = (0..10).map(|i| DataPoint::new(i as f64, i as f64)).collect();
        let sets = [Dataset::new("a", 0, points)];
        let mut window = ViewWindow::new(3);
        assert!(window.try_move_to(2, 10));
        let bounds = compute_bounds(&sets, Some(window));
        assert_relative_eq!(bounds.min_x, 1.9, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_x, 4.1, epsilon = 1e-12);
    }

    #[test]
    fn flat_series_gets_finite_span() {
        let sets = [Dataset::new(
            "a",
            0,
            vec![DataPoint::new(1.0, 5.0), DataPoint::new(2.0, 5.0)],
        )];
        let bounds = compute_bounds(&sets, None);
        assert_eq!(bounds.min_y, 4.0);
        assert_eq!(bounds.max_y, 6.0);

        let (_, py) = PlotTransform::new(bounds, area()).scale_to_pixel(DataPoint::new(1.5, 5.0));
        assert!(py.is_finite());
    }

    #[test]
    fn corners_map_to_plot_area_with_inverted_y() {
        let transform = PlotTransform::new(Bounds::EMPTY_DEFAULT, area());
        assert_eq!(
            transform.scale_to_pixel(DataPoint::new(0.0, 0.0)),
            (45.0, 170.0)
        );
        assert_eq!(
            transform.scale_to_pixel(DataPoint::new(10.0, 10.0)),
            (270.0, 30.0)
        );
    }

    #[test]
    fn pixel_to_data_inverts_scale() {
        let bounds = Bounds {
            min_x: -3.5,
            max_x: 12.25,
            min_y: 100.0,
            max_y: 180.0,
        };
        let transform = PlotTransform::new(bounds, area());
        let point = DataPoint::new(7.125, 133.3);
        let (px, py) = transform.scale_to_pixel(point);
        let back = transform.pixel_to_data(px, py);
        assert_relative_eq!(back.x, point.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, point.y, epsilon = 1e-9);
    }
}
