// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of frames and a self-contained interactive HTML page
// (event selector, chart container, legend container, fading tooltip).

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::chart::{redraw, selector_options, Frame, Selection, ALL_EVENTS};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::RenderError;
use crate::geometry::Point;
use crate::scene::{Anchor, PathCmd, Primitive, Stroke};

const FONT_FAMILY: &str = "Segoe UI, Arial, Helvetica, sans-serif";

/// Escape text for XML/HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn anchor_attr(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut out = format!(r#"stroke="{}" stroke-width="{}""#, s.color, s.width);
    if s.color.a < 255 {
        let _ = write!(out, r#" stroke-opacity="{:.2}""#, s.color.opacity());
    }
    if let Some((on, off)) = s.dash {
        let _ = write!(out, r#" stroke-dasharray="{on},{off}""#);
    }
    out
}

fn pt(p: Point) -> String {
    format!("{:.2},{:.2}", p.x, p.y)
}

/// SVG path data for a command list.
pub fn path_data(cmds: &[PathCmd]) -> String {
    let parts: Vec<String> = cmds
        .iter()
        .map(|c| match *c {
            PathCmd::MoveTo(p) => format!("M{}", pt(p)),
            PathCmd::LineTo(p) => format!("L{}", pt(p)),
            PathCmd::CubicTo(c1, c2, p) => format!("C{} {} {}", pt(c1), pt(c2), pt(p)),
        })
        .collect();
    parts.join(" ")
}

fn write_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Line { from, to, stroke, role } => {
            let _ = writeln!(
                out,
                r#"  <line class="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                role.class(), from.x, from.y, to.x, to.y, stroke_attrs(stroke)
            );
        }
        Primitive::Path { cmds, stroke, role } => {
            let _ = writeln!(
                out,
                r#"  <path class="{}" d="{}" fill="none" {}/>"#,
                role.class(), path_data(cmds), stroke_attrs(stroke)
            );
        }
        Primitive::Circle { center, radius, fill, outline, tooltip } => {
            let outline = outline.as_ref().map(stroke_attrs).unwrap_or_default();
            match tooltip {
                Some(t) => {
                    let _ = writeln!(
                        out,
                        r#"  <circle class="dot" cx="{:.2}" cy="{:.2}" r="{}" fill="{}" {} data-series="{}" data-day="{}" data-return="{:.2}"><title>{}</title></circle>"#,
                        center.x, center.y, radius, fill, outline,
                        escape(&t.series), t.day, t.ret, escape(&t.text())
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        r#"  <circle class="dot" cx="{:.2}" cy="{:.2}" r="{}" fill="{}" {}/>"#,
                        center.x, center.y, radius, fill, outline
                    );
                }
            }
        }
        Primitive::Text { pos, text, size, color, anchor, bold, rotate, role } => {
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            let transform = if *rotate != 0.0 {
                format!(r#" transform="rotate({} {:.2} {:.2})""#, rotate, pos.x, pos.y)
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                r#"  <text class="{}" x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{}"{}{}>{}</text>"#,
                role.class(), pos.x, pos.y, size, color, anchor_attr(*anchor), weight, transform, escape(text)
            );
        }
    }
}

/// Serialize a frame as a standalone SVG document. With `legend`, the legend rows are
/// drawn inside the top-right corner of the plot.
pub fn frame_to_svg(frame: &Frame, legend: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = frame.width,
        h = frame.height
    );
    let _ = writeln!(out, r#"  <rect width="{}" height="{}" fill="{}"/>"#, frame.width, frame.height, frame.theme.background);
    for p in &frame.scene.items {
        write_primitive(&mut out, p);
    }
    if legend {
        for row in frame.legend_layout() {
            let _ = writeln!(
                out,
                r#"  <rect class="legend-swatch" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                row.swatch.left, row.swatch.top, row.swatch.width(), row.swatch.height(), row.color
            );
            let _ = writeln!(
                out,
                r#"  <text class="legend-label" x="{:.2}" y="{:.2}" font-size="12" fill="{}">{}</text>"#,
                row.label_pos.x, row.label_pos.y, frame.theme.axis_label, escape(&row.label)
            );
        }
    }
    out.push_str("</svg>\n");
    out
}

/// HTML legend container content: one row per series with a color swatch.
pub fn legend_html(frame: &Frame) -> String {
    let mut out = String::new();
    for entry in &frame.legend {
        let _ = writeln!(
            out,
            r#"    <div class="legend-item"><span class="legend-color" style="background:{}"></span>{}</div>"#,
            entry.color,
            escape(&entry.label)
        );
    }
    out
}

const PAGE_STYLE: &str = r#"
  body { font-family: Segoe UI, Arial, Helvetica, sans-serif; margin: 24px; }
  .controls { margin-bottom: 12px; }
  .legend { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 8px; }
  .legend-item { display: flex; align-items: center; gap: 6px; font-size: 13px; }
  .legend-color { width: 14px; height: 14px; display: inline-block; }
  .error { color: #c0392b; font-size: 16px; }
  #tooltip { position: absolute; pointer-events: none; opacity: 0; transition: opacity 200ms;
             background: rgba(0, 0, 0, 0.8); color: #fff; padding: 6px 8px; border-radius: 4px;
             font-size: 12px; white-space: pre-line; }
  circle.dot { cursor: pointer; }
  [hidden] { display: none !important; }
"#;

const PAGE_SCRIPT: &str = r#"
  const select = document.getElementById('event-select');
  const tip = document.getElementById('tooltip');
  function show(id) {
    document.querySelectorAll('[data-event]').forEach(el => { el.hidden = el.dataset.event !== id; });
  }
  select.addEventListener('change', () => { tip.style.opacity = 0; show(select.value); });
  show(select.value);
  document.querySelectorAll('circle.dot').forEach(dot => {
    dot.addEventListener('mouseover', ev => {
      tip.textContent = dot.dataset.series + '\nDay: ' + dot.dataset.day + '\nReturn: ' + dot.dataset.return + '%';
      tip.style.left = (ev.pageX + 10) + 'px';
      tip.style.top = (ev.pageY - 28) + 'px';
      tip.style.opacity = 0.9;
    });
    dot.addEventListener('mouseout', () => { tip.style.opacity = 0; });
  });
"#;

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        PAGE_STYLE,
        body
    )
}

/// Interactive page: selector ("all" sentinel plus one option per event), one pre-rendered
/// chart and legend per selector value, and a tooltip that fades in/out on marker hover.
pub fn render_page(dataset: &Dataset, cfg: &ChartConfig) -> String {
    let mut values = vec![Selection::All];
    values.extend(dataset.events.iter().map(|e| Selection::Event(e.id.clone())));

    let mut body = String::new();
    body.push_str("<div class=\"controls\">\n  <label for=\"event-select\">Event: </label>\n  <select id=\"event-select\">\n");
    let _ = writeln!(body, r#"    <option value="{ALL_EVENTS}" selected>All Events</option>"#);
    for opt in selector_options(dataset) {
        let _ = writeln!(body, r#"    <option value="{}">{}</option>"#, escape(&opt.value), escape(&opt.label));
    }
    body.push_str("  </select>\n</div>\n<div id=\"chart\">\n");
    let frames: Vec<(String, Frame)> =
        values.iter().map(|s| (s.value().to_string(), redraw(dataset, s, cfg))).collect();
    for (value, frame) in &frames {
        let _ = writeln!(body, r#"<div class="chart-view" data-event="{}">"#, escape(value));
        body.push_str(&frame_to_svg(frame, false));
        body.push_str("</div>\n");
    }
    body.push_str("</div>\n<div id=\"legend\">\n");
    for (value, frame) in &frames {
        let _ = writeln!(body, r#"  <div class="legend" data-event="{}">"#, escape(value));
        body.push_str(&legend_html(frame));
        body.push_str("  </div>\n");
    }
    body.push_str("</div>\n<div id=\"tooltip\"></div>\n<script>");
    body.push_str(PAGE_SCRIPT);
    body.push_str("</script>\n");
    page_shell("Cumulative Returns Around Events", &body)
}

/// Page shown when the dataset failed to load: the chart area holds only the static message.
pub fn render_error_page(message: &str) -> String {
    let body = format!("<div id=\"chart\">\n  <p class=\"error\">{}</p>\n</div>\n", escape(message));
    page_shell("Cumulative Returns Around Events", &body)
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: impl AsRef<Path>, contents: &str) -> Result<(), RenderError> {
    let path = path.as_ref();
    let io = |source| RenderError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, contents).map_err(io)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
