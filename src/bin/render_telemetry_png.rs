//! Renders a synthetic telemetry stream to a PNG file.
//!
//! Usage: `render_telemetry_png [output.png] [config.json]`

use std::process::ExitCode;

use tiny_plot::api::{ChartView, ChartViewConfig};
use tiny_plot::core::{DataPoint, Viewport};
use tiny_plot::render::CairoSurface;
use tiny_plot::{ChartResult, telemetry};
use tracing::{error, info};

const SAMPLE_COUNT: u32 = 400;

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "telemetry.png".to_owned());
    let config_path = args.next();

    match run(&output, config_path.as_deref()) {
        Ok(()) => {
            info!(output = %output, "wrote chart");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "render failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: Option<&str>) -> ChartResult<ChartViewConfig> {
    let Some(path) = config_path else {
        return Ok(ChartViewConfig::new(Viewport::new(800, 400))
            .with_streaming(true)
            .with_retain_data(true)
            .with_view_window_size(150)
            .with_grid(true)
            .with_labels("sample", "g", "Accelerometer"));
    };
    let json = std::fs::read_to_string(path).map_err(|err| {
        tiny_plot::ChartError::InvalidConfig(format!("cannot read {path}: {err}"))
    })?;
    ChartViewConfig::from_json_str(&json)
}

fn run(output: &str, config_path: Option<&str>) -> ChartResult<()> {
    let config = load_config(config_path)?;
    let width = i32::try_from(config.viewport.width).unwrap_or(i32::MAX);
    let height = i32::try_from(config.viewport.height).unwrap_or(i32::MAX);
    let surface = CairoSurface::new(width, height)?;

    let mut chart = ChartView::new(surface, config)?;
    chart
        .add_dataset(Vec::new(), "X")
        .add_dataset(Vec::new(), "Y")
        .add_dataset(Vec::new(), "Z");

    for i in 0..SAMPLE_COUNT {
        let t = f64::from(i);
        chart
            .add_point(0, DataPoint::new(t, (t * 0.07).sin()))
            .add_point(1, DataPoint::new(t, (t * 0.05).cos() * 0.5))
            .add_point(2, DataPoint::new(t, 1.0 + (t * 0.013).sin() * 0.2));
    }

    chart.draw()?;
    chart.surface().write_png(output)
}
