// File: crates/chart-core/tests/snapshot.rs
// Purpose: Raster backend smoke checks and golden snapshot harness with bless flow.
// Behavior:
// - Renders the example event without labels (font variance) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and skips without failing.

#![cfg(feature = "png")]

mod common;

use event_chart_core::geometry::Point;
use event_chart_core::raster::{render_to_png, render_to_png_bytes, render_to_rgba8};
use event_chart_core::{redraw, ChartConfig, Frame, RasterOptions, Selection, Session};

fn example_frame() -> Frame {
    redraw(&common::acquisition(), &Selection::All, &ChartConfig::default())
}

fn unlabeled() -> RasterOptions {
    RasterOptions { draw_labels: false, ..Default::default() }
}

#[test]
fn render_smoke_png() {
    let frame = example_frame();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&frame, &RasterOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&frame, &RasterOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let frame = example_frame();
    let (px, w, h, stride) = render_to_rgba8(&frame, &unlabeled()).expect("rgba render");
    assert_eq!((w, h), (1200, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    // Top-left pixel is the opaque white background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    // Marker center at (600, 215) is filled with the first band color.
    assert_eq!(at(600, 215)[..3], [0x1f, 0x77, 0xb4]);
}

#[test]
fn device_pixel_ratio_scales_surface() {
    let opts = RasterOptions { dpr: 2.0, ..unlabeled() };
    let (_, w, h, _) = render_to_rgba8(&example_frame(), &opts).expect("rgba render");
    assert_eq!((w, h), (2400, 1200));
}

#[test]
fn tooltip_overlay_changes_pixels() {
    let mut session = Session::new(ChartConfig::default());
    session.load_succeeded(common::acquisition());
    assert!(session.pointer_move(Point::new(600.0, 215.0)));
    let frame = session.frame().expect("frame").clone();

    let plain = render_to_rgba8(&frame, &unlabeled()).expect("plain").0;
    let opts = RasterOptions { tooltip: Some(session.tooltip().clone()), ..unlabeled() };
    let with_tip = render_to_rgba8(&frame, &opts).expect("tooltip").0;
    assert_ne!(plain, with_tip);
}

#[test]
fn golden_example_chart() {
    let bytes = render_to_png_bytes(&example_frame(), &unlabeled()).expect("render bytes");
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("example_event.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
