// File: crates/chart-core/src/raster.rs
// Summary: Headless PNG/RGBA rendering of frames using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::info;

use crate::chart::Frame;
use crate::geometry::Point;
use crate::scene::{Anchor, PathCmd, Primitive, Stroke};
use crate::session::Tooltip;

pub struct RasterOptions {
    /// Pixels per logical unit.
    pub dpr: f32,
    /// Text output; turned off by snapshot tests to avoid font variance across platforms.
    pub draw_labels: bool,
    /// Draw legend rows inside the plot (PNG has no separate legend container).
    pub legend: bool,
    /// Tooltip overlay to paint on top, if visible.
    pub tooltip: Option<Tooltip>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, legend: true, tooltip: None }
    }
}

fn skpt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(s.color.to_skia());
    if let Some((on, off)) = s.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn make_font(size: f32, bold: bool) -> skia::Font {
    let style = if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
    let mut font = skia::FontMgr::default()
        .legacy_make_typeface(None::<&str>, style)
        .map(|tf| skia::Font::from_typeface(tf, size))
        .unwrap_or_default();
    font.set_size(size);
    font
}

fn draw_text(canvas: &skia::Canvas, text: &str, pos: Point, size: f32, color: skia::Color, anchor: Anchor, bold: bool, rotate: f32) {
    let font = make_font(size, bold);
    let paint = fill_paint(color);
    let (advance, _) = font.measure_str(text, Some(&paint));
    let dx = match anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -advance * 0.5,
        Anchor::End => -advance,
    };
    let origin = skpt(pos);
    canvas.save();
    if rotate != 0.0 {
        canvas.rotate(rotate, Some(origin));
    }
    canvas.draw_str(text, (origin.x + dx, origin.y), &font, &paint);
    canvas.restore();
}

fn draw_primitive(canvas: &skia::Canvas, p: &Primitive, draw_labels: bool) {
    match p {
        Primitive::Line { from, to, stroke, .. } => {
            canvas.draw_line(skpt(*from), skpt(*to), &stroke_paint(stroke));
        }
        Primitive::Path { cmds, stroke, .. } => {
            let mut path = skia::Path::new();
            for c in cmds {
                match *c {
                    PathCmd::MoveTo(p) => { path.move_to(skpt(p)); }
                    PathCmd::LineTo(p) => { path.line_to(skpt(p)); }
                    PathCmd::CubicTo(c1, c2, p) => { path.cubic_to(skpt(c1), skpt(c2), skpt(p)); }
                }
            }
            canvas.draw_path(&path, &stroke_paint(stroke));
        }
        Primitive::Circle { center, radius, fill, outline, .. } => {
            canvas.draw_circle(skpt(*center), *radius as f32, &fill_paint(fill.to_skia()));
            if let Some(o) = outline {
                canvas.draw_circle(skpt(*center), *radius as f32, &stroke_paint(o));
            }
        }
        Primitive::Text { pos, text, size, color, anchor, bold, rotate, .. } => {
            if draw_labels {
                draw_text(canvas, text, *pos, *size as f32, color.to_skia(), *anchor, *bold, *rotate as f32);
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, frame: &Frame, draw_labels: bool) {
    for row in frame.legend_layout() {
        let r = row.swatch;
        let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
        canvas.draw_rect(rect, &fill_paint(row.color.to_skia()));
        if draw_labels {
            draw_text(canvas, &row.label, row.label_pos, 12.0, frame.theme.axis_label.to_skia(), Anchor::Start, false, 0.0);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, draw_labels: bool) {
    let Some(content) = tooltip.content.as_ref().filter(|_| tooltip.is_visible()) else { return };
    let lines = content.lines();
    let alpha = (tooltip.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let (x, y) = (tooltip.pos.x as f32, tooltip.pos.y as f32);
    let rect = skia::Rect::from_xywh(x, y, 130.0, 8.0 + 16.0 * lines.len() as f32);
    let bg = fill_paint(skia::Color::from_argb((alpha as f32 * 0.8) as u8, 0, 0, 0));
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);
    if draw_labels {
        for (i, line) in lines.iter().enumerate() {
            let pos = Point::new(tooltip.pos.x + 8.0, tooltip.pos.y + 18.0 + 16.0 * i as f64);
            draw_text(canvas, line, pos, 12.0, skia::Color::from_argb(alpha, 255, 255, 255), Anchor::Start, false, 0.0);
        }
    }
}

fn render_surface(frame: &Frame, opts: &RasterOptions) -> Result<skia::Surface> {
    let w = (frame.width as f32 * opts.dpr).round() as i32;
    let h = (frame.height as f32 * opts.dpr).round() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))?;
    let canvas = surface.canvas();
    canvas.clear(frame.theme.background.to_skia());
    canvas.save();
    canvas.scale((opts.dpr, opts.dpr));
    for p in &frame.scene.items {
        draw_primitive(canvas, p, opts.draw_labels);
    }
    if opts.legend {
        draw_legend(canvas, frame, opts.draw_labels);
    }
    if let Some(t) = &opts.tooltip {
        draw_tooltip(canvas, t, opts.draw_labels);
    }
    canvas.restore();
    Ok(surface)
}

/// Render a frame to in-memory PNG bytes.
pub fn render_to_png_bytes(frame: &Frame, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(frame, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render a frame to a PNG file at `output_png_path`.
pub fn render_to_png(frame: &Frame, opts: &RasterOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(frame, opts)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Render a frame into a tightly packed RGBA8 buffer: (pixels, width, height, row_bytes).
pub fn render_to_rgba8(frame: &Frame, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(frame, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("failed to read back surface pixels");
    }
    Ok((pixels, w as u32, h as u32, row_bytes))
}
