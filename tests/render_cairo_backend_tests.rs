#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use tiny_plot::ChartError;
use tiny_plot::api::{ChartView, ChartViewConfig};
use tiny_plot::core::{DataPoint, Viewport};
use tiny_plot::render::{CairoSurface, DrawingSurface, FontSpec};

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_surface_renders_full_pass() {
    let surface = CairoSurface::new(640, 360).expect("surface");
    let config = ChartViewConfig::new(Viewport::new(640, 360))
        .with_grid(true)
        .with_dot_size(2.0)
        .with_retain_data(true)
        .with_view_window_size(4)
        .with_labels("t", "value", "Cairo pass");
    let mut chart = ChartView::new(surface, config).expect("view init");
    chart.add_dataset(
        (0..10)
            .map(|i| DataPoint::new(f64::from(i), f64::from(i % 3)))
            .collect(),
        "wave",
    );

    chart.draw().expect("draw");
    let stats = chart.last_render_stats();
    assert_eq!(stats.series_drawn, 1);
    assert_eq!(stats.markers_drawn, 4);
    assert!(stats.scrollbar_drawn);
}

#[test]
fn cairo_surface_measures_text_with_pango() {
    let mut surface = CairoSurface::new(200, 100).expect("surface");
    let short = surface
        .measure_text("ab", FontSpec::regular(10.0))
        .expect("measure");
    let long = surface
        .measure_text("abcdefgh", FontSpec::regular(10.0))
        .expect("measure");
    assert!(long > short);
    assert!(short > 0.0);
}

#[test]
fn cairo_surface_draws_on_external_context() {
    let image = ImageSurface::create(Format::ARgb32, 300, 200).expect("image");
    let context = Context::new(&image).expect("context");
    let surface = CairoSurface::from_context(context);
    let mut chart = ChartView::new(surface, ChartViewConfig::default()).expect("view init");
    chart.add_dataset(vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)], "");
    chart.draw().expect("draw on external context");

    let surface = chart.into_surface();
    assert!(surface.image().is_none());
    assert!(surface.write_png("unused.png").is_err());
}
