// File: crates/chart-core/tests/config.rs
// Purpose: Configuration defaults, TOML overrides and validation.

use event_chart_core::config::{LOAD_ERROR_MESSAGE, NO_DATA_MESSAGE};
use event_chart_core::geometry::Rect;
use event_chart_core::theme::Theme;
use event_chart_core::{load_config, ChartConfig, ConfigError};

#[test]
fn defaults_match_reference_layout() {
    let cfg = ChartConfig::default();
    assert_eq!((cfg.width, cfg.height), (1200, 600));
    let plot = cfg.plot_area();
    assert_eq!(plot, Rect::from_ltrb(80.0, 40.0, 1120.0, 540.0));
    assert_eq!((plot.width(), plot.height()), (1040.0, 500.0));
    assert_eq!(cfg.theme(), Theme::light());
    assert_eq!(cfg.bands.len(), 6);
    assert_eq!(cfg.palette().position("Top 201+"), Some(5));
    assert_eq!(cfg.load_error_message, LOAD_ERROR_MESSAGE);
    assert_eq!(cfg.no_data_message, NO_DATA_MESSAGE);
    cfg.validate().expect("defaults are valid");
}

#[test]
fn toml_file_overrides_selected_fields() {
    let path = std::path::PathBuf::from("target/test_out/config/chart.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r##"
width = 1400
theme = "dark"
marker_radius = 5.5

[insets]
left = 100

[[bands]]
label = "Leaders"
color = "#112233"

[[bands]]
label = "Laggards"
color = "#445566"
"##,
    )
    .unwrap();

    let cfg = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.width, 1400);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.insets.left, 100);
    assert_eq!(cfg.insets.right, 80);
    assert_eq!(cfg.marker_radius, 5.5);
    assert_eq!(cfg.theme(), Theme::dark());
    let palette = cfg.palette();
    assert_eq!(palette.position("Laggards"), Some(1));
    assert_eq!(palette.color_for("Leaders").to_hex(), "#112233");
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let cfg = ChartConfig { theme: "neon".into(), ..ChartConfig::default() };
    assert_eq!(cfg.theme(), Theme::light());
}

#[test]
fn surface_smaller_than_insets_is_rejected() {
    let cfg = ChartConfig { width: 100, ..ChartConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    let cfg = ChartConfig { bands: vec![], ..ChartConfig::default() };
    assert!(cfg.validate().is_err());
    let cfg = ChartConfig { ticks: 0, ..ChartConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn invalid_file_surfaces_error() {
    let path = std::path::PathBuf::from("target/test_out/config/tiny.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "width = 100\n").unwrap();
    assert!(matches!(load_config(Some(&path)), Err(ConfigError::Invalid(_))));

    let missing = std::path::PathBuf::from("target/test_out/config/absent.toml");
    assert!(matches!(load_config(Some(&missing)), Err(ConfigError::Source(_))));
}
