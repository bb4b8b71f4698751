//! tiny-plot: small streaming line-chart renderer.
//!
//! A [`ChartView`] keeps named datasets, a scrollable index window over them
//! and an auto-scroll flag, and draws axes, series, legend and a scroll
//! indicator onto any [`render::DrawingSurface`]. Intended for low-rate
//! telemetry where a few hundred points per series are on screen.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
