pub mod dataset;
pub mod scale;
pub mod types;
pub mod view_window;

pub use dataset::{Dataset, max_dataset_len};
pub use scale::{
    BOUNDS_PADDING_RATIO, Bounds, DEGENERATE_HALF_SPAN, PlotTransform, compute_bounds,
};
pub use types::{DataPoint, PlotArea, Viewport, datetime_to_unix_seconds};
pub use view_window::ViewWindow;
