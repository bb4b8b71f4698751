use tiny_plot::api::{ChartView, ChartViewConfig};
use tiny_plot::core::{Bounds, DataPoint, Viewport};
use tiny_plot::render::RecordingSurface;

#[test]
fn chart_view_smoke_flow() {
    let config = ChartViewConfig::new(Viewport::new(640, 360))
        .with_streaming(true)
        .with_retain_data(true)
        .with_view_window_size(20)
        .with_grid(true)
        .with_labels("time (s)", "rpm", "Spin rate");
    let mut chart = ChartView::new(RecordingSurface::new(), config).expect("view init");

    chart.add_dataset(Vec::new(), "RPM");
    for i in 0..50 {
        chart.add_point(0, DataPoint::new(f64::from(i), f64::from(i * i)));
    }
    assert_eq!(chart.data_length(), 50);
    assert_eq!(chart.view_window().start(), 30);
    assert!(chart.is_auto_scroll());

    chart.scroll(-5).draw().expect("draw");
    assert_eq!(chart.view_window().start(), 25);
    assert!(!chart.is_auto_scroll());

    let stats = chart.last_render_stats();
    assert_eq!(stats.series_drawn, 1);
    assert_eq!(stats.legend_entries, 1);
    assert!(stats.scrollbar_drawn);

    let texts = chart.surface().texts();
    assert!(texts.contains(&"Spin rate"));
    assert!(texts.contains(&"Showing 26 - 45 of 50 points"));
}

#[test]
fn mutators_chain() {
    let config = ChartViewConfig::default()
        .with_retain_data(true)
        .with_view_window_size(2);
    let mut chart = ChartView::new(RecordingSurface::new(), config).expect("view init");

    chart
        .add_dataset(vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)], "a")
        .add_dataset(Vec::new(), "b")
        .add_point(1, DataPoint::new(0.0, 3.0))
        .add_point(1, DataPoint::new(1.0, 4.0))
        .add_point(1, DataPoint::new(2.0, 5.0))
        .scroll_to_end()
        .disable_auto_scroll()
        .enable_auto_scroll()
        .toggle_auto_scroll();

    assert_eq!(chart.dataset_count(), 2);
    assert_eq!(chart.view_window().start(), 1);
    assert!(!chart.is_auto_scroll());
}

#[test]
fn empty_view_uses_default_bounds() {
    let chart =
        ChartView::new(RecordingSurface::new(), ChartViewConfig::default()).expect("view init");
    assert_eq!(chart.compute_bounds(), Bounds::EMPTY_DEFAULT);
    assert_eq!(chart.data_length(), 0);
}

#[test]
fn construction_rejects_invalid_config() {
    let config = ChartViewConfig::new(Viewport::new(40, 40));
    assert!(ChartView::new(RecordingSurface::new(), config).is_err());
}

#[test]
fn into_surface_returns_recorded_commands() {
    let mut chart =
        ChartView::new(RecordingSurface::new(), ChartViewConfig::default()).expect("view init");
    chart.draw().expect("draw");
    let surface = chart.into_surface();
    assert_eq!(surface.commands().len(), 1);
}
