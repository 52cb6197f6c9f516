// File: crates/chart-core/tests/svg.rs
// Purpose: SVG document and interactive page output.

mod common;

use event_chart_core::svg::{escape, frame_to_svg, render_error_page, render_page, write_file};
use event_chart_core::{redraw, ChartConfig, Dataset, Event, Selection, Series};

#[test]
fn example_svg_contains_line_markers_and_tooltips() {
    let frame = redraw(&common::acquisition(), &Selection::All, &ChartConfig::default());
    let svg = frame_to_svg(&frame, true);
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="1200" height="600""#));
    assert_eq!(svg.matches(r#"<path class="line""#).count(), 1);
    assert_eq!(svg.matches(r#"<circle class="dot""#).count(), 3);
    assert_eq!(svg.matches(r#"class="grid""#).count(), 20);
    assert!(svg.contains("<title>Top 1-10\nDay: 0\nReturn: 1.20%</title>"));
    assert!(svg.contains(r#"data-return="3.40""#));
    assert!(svg.contains(r#"stroke-dasharray="5,5""#));
    assert!(svg.contains(">Event Start</text>"));
    assert!(svg.contains(r#"transform="rotate(-90"#));
    assert_eq!(svg.matches(r#"class="legend-swatch""#).count(), 1);
    assert!(svg.contains("#1f77b4"));
}

#[test]
fn legend_can_be_left_out() {
    let frame = redraw(&common::acquisition(), &Selection::All, &ChartConfig::default());
    assert!(!frame_to_svg(&frame, false).contains("legend-swatch"));
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape(r#"R&D <Spin-off> "x" 'y'"#), "R&amp;D &lt;Spin-off&gt; &quot;x&quot; &#39;y&#39;");
    let ds = Dataset::new(vec![Event::new(
        "rd",
        "R&D <Spin-off>",
        vec![Series::new("Top 1-10", vec![(0, 1.0), (1, 2.0)])],
    )]);
    let svg = frame_to_svg(&redraw(&ds, &Selection::All, &ChartConfig::default()), true);
    assert!(svg.contains("R&amp;D &lt;Spin-off&gt;"));
    assert!(!svg.contains("<Spin-off>"));
}

#[test]
fn placeholder_svg_has_message_only() {
    let frame = redraw(&Dataset::default(), &Selection::All, &ChartConfig::default());
    let svg = frame_to_svg(&frame, true);
    assert!(svg.contains(">No data available</text>"));
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn page_has_selector_views_and_tooltip() {
    let ds = common::two_events();
    let html = render_page(&ds, &ChartConfig::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<option ").count(), ds.len() + 1);
    assert!(html.contains(r#"<option value="all" selected>All Events</option>"#));
    assert!(html.contains(r#"<option value="buyback">Buyback Programs</option>"#));
    assert_eq!(html.matches(r#"<div class="chart-view""#).count(), ds.len() + 1);
    assert_eq!(html.matches(r#"<div class="legend" data-event"#).count(), ds.len() + 1);
    assert_eq!(html.matches("<svg ").count(), ds.len() + 1);
    assert!(html.contains(r#"<div id="tooltip"></div>"#));
    assert!(html.contains("tip.style.opacity = 0.9"));
}

#[test]
fn hidden_views_and_legends_are_not_displayed() {
    let html = render_page(&common::two_events(), &ChartConfig::default());
    // `.legend` sets display:flex, which would otherwise beat the user-agent [hidden] rule.
    assert!(html.contains(".legend { display: flex;"));
    assert!(html.contains("[hidden] { display: none !important; }"));
    assert!(html.contains("el.hidden = el.dataset.event !== id"));
    let legends = html.matches(r#"<div class="legend" data-event"#).count();
    assert_eq!(legends, 3, "one legend per selector value");
}

#[test]
fn page_for_empty_dataset_still_has_all_option() {
    let html = render_page(&Dataset::default(), &ChartConfig::default());
    assert_eq!(html.matches("<option ").count(), 1);
    assert!(html.contains("No data available"));
}

#[test]
fn error_page_replaces_chart() {
    let html = render_error_page("Error loading <data>");
    assert!(html.contains("Error loading &lt;data&gt;"));
    assert!(!html.contains("<svg"));
    assert!(!html.contains("<select"));
}

#[test]
fn write_file_creates_parent_dirs() {
    let path = std::path::PathBuf::from("target/test_out/svg/nested/example.svg");
    let _ = std::fs::remove_dir_all("target/test_out/svg");
    let frame = redraw(&common::acquisition(), &Selection::All, &ChartConfig::default());
    write_file(&path, &frame_to_svg(&frame, true)).expect("write svg");
    let back = std::fs::read_to_string(&path).expect("read back");
    assert!(back.contains("<circle class=\"dot\""));
}
