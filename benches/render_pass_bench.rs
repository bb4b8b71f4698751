use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tiny_plot::api::{ChartView, ChartViewConfig};
use tiny_plot::core::{DataPoint, Dataset, ViewWindow, Viewport, compute_bounds};
use tiny_plot::render::RecordingSurface;

fn sine_points(count: usize, phase: f64) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, (x * 0.05 + phase).sin() * 100.0)
        })
        .collect()
}

fn bench_compute_bounds_windowed(c: &mut Criterion) {
    let datasets: Vec<Dataset> = (0..3)
        .map(|i| Dataset::new(format!("s{i}"), i, sine_points(10_000, i as f64)))
        .collect();
    let mut window = ViewWindow::new(500);
    window.jump_to_end(10_000);

    c.bench_function("compute_bounds_3x10k_window_500", |b| {
        b.iter(|| compute_bounds(black_box(&datasets), black_box(Some(window))))
    });
}

fn bench_streaming_append_and_draw(c: &mut Criterion) {
    let config = ChartViewConfig::new(Viewport::new(800, 400))
        .with_streaming(true)
        .with_retain_data(true)
        .with_view_window_size(200)
        .with_grid(true);
    let mut chart = ChartView::new(RecordingSurface::new(), config).expect("view init");
    chart
        .add_dataset(sine_points(1_000, 0.0), "raw")
        .add_dataset(sine_points(1_000, 1.0), "filtered");
    let mut x = 1_000.0;

    c.bench_function("streaming_append_and_draw_window_200", |b| {
        b.iter(|| {
            chart.add_point(0, DataPoint::new(x, x.sin()));
            chart.add_point(1, DataPoint::new(x, x.cos()));
            x += 1.0;
            chart.surface_mut().clear();
            chart.draw().expect("draw");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_bounds_windowed,
    bench_streaming_append_and_draw
);
criterion_main!(benches);
