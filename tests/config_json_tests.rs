use tiny_plot::ChartError;
use tiny_plot::api::ChartViewConfig;
use tiny_plot::core::Viewport;
use tiny_plot::render::Color;

#[test]
fn partial_json_fills_defaults() {
    let config = ChartViewConfig::from_json_str(
        r##"{
            "viewport": { "width": 480, "height": 240 },
            "streaming": true,
            "retain_data": true,
            "view_window_size": 120,
            "line_colors": ["#f00", "#00FF00"],
            "title": "Accelerometer"
        }"##,
    )
    .expect("valid config");

    assert_eq!(config.viewport, Viewport::new(480, 240));
    assert!(config.streaming);
    assert!(config.retain_data);
    assert_eq!(config.view_window_size, 120);
    assert_eq!(config.line_colors, vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)]);
    assert_eq!(config.title, "Accelerometer");
    assert_eq!(config.max_points, 100);
    assert_eq!(config.padding, 30.0);
    assert!(config.auto_scroll_with_new_data);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartViewConfig::default()
        .with_grid(true)
        .with_labels("t", "g", "Raw G")
        .with_dot_size(2.5);
    let json = config.to_json_string().expect("serialize");
    assert!(json.contains("\"#3366CC\""));

    let parsed = ChartViewConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.show_grid, config.show_grid);
    assert_eq!(parsed.title, config.title);
    assert_eq!(parsed.dot_size, config.dot_size);
    assert_eq!(parsed.line_colors.len(), config.line_colors.len());
    for (parsed, original) in parsed.line_colors.iter().zip(&config.line_colors) {
        assert_eq!(parsed.to_hex(), original.to_hex());
    }
}

#[test]
fn invalid_color_is_a_config_error() {
    let err = ChartViewConfig::from_json_str(r#"{"axis_color": "chartreuse"}"#)
        .expect_err("unknown color name");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn semantically_invalid_json_config_is_rejected() {
    let err = ChartViewConfig::from_json_str(r#"{"view_window_size": 0}"#)
        .expect_err("zero window");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ChartViewConfig::from_json_str(r#"{"viewport": {"width": 0, "height": 10}}"#)
        .expect_err("zero viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
}
