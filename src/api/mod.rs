mod axis_ticks;
mod chart_view;
mod config;
mod data_controller;
mod legend_layout;
mod navigation_controller;
mod render_pass;
mod scrollbar_layout;

pub use axis_ticks::{AXIS_TICK_STEPS, AxisTick, format_tick_label};
pub use chart_view::ChartView;
pub use config::ChartViewConfig;
pub use legend_layout::LegendEntry;
pub use render_pass::RenderStats;
pub use scrollbar_layout::{ScrollbarLayout, ScrollbarRect};
