// File: crates/chart-core/src/chart.rs
// Summary: Pure redraw pipeline: (dataset, selection, config) -> Frame (scene + legend + scales).

use tracing::{debug, warn};

use crate::axis::{Axis, TickFormat, X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::config::ChartConfig;
use crate::curve::monotone_x;
use crate::dataset::{Dataset, Event};
use crate::geometry::{Point, Rect};
use crate::grid;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Primitive, Role, Scene, Stroke, TooltipContent};
use crate::theme::{Color, RankPalette, Theme};

/// Selector value that stands for "all events".
pub const ALL_EVENTS: &str = "all";
/// Label of the reference line at day 0.
pub const EVENT_START_LABEL: &str = "Event Start";
/// Vertical domain padding applied to the largest absolute return.
pub const Y_PADDING: f64 = 1.1;

/// Current selector value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// The "all" sentinel. Resolves to the first event in dataset order.
    #[default]
    All,
    Event(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_EVENTS { Selection::All } else { Selection::Event(value.to_string()) }
    }

    pub fn value(&self) -> &str {
        match self {
            Selection::All => ALL_EVENTS,
            Selection::Event(id) => id,
        }
    }
}

/// One populated selector entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One option per event, dataset order, value = event id.
pub fn selector_options(dataset: &Dataset) -> Vec<SelectOption> {
    dataset
        .events
        .iter()
        .map(|e| SelectOption { value: e.id.clone(), label: e.name.clone() })
        .collect()
}

/// Event to display for `selection`, if any.
pub fn resolve<'a>(dataset: &'a Dataset, selection: &Selection) -> Option<&'a Event> {
    match selection {
        // TODO: aggregate or compare events once "all" gets a real multi-event view.
        Selection::All => dataset.first(),
        Selection::Event(id) => dataset.find(id),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch: Rect,
    pub label_pos: Point,
    pub label: String,
    pub color: Color,
}

/// Everything one redraw produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub plot: Rect,
    pub theme: Theme,
    /// Id of the event drawn; `None` for the placeholder frame.
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub scene: Scene,
    pub legend: Vec<LegendEntry>,
}

impl Frame {
    fn empty(cfg: &ChartConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            plot: cfg.plot_area(),
            theme: cfg.theme(),
            event_id: None,
            title: None,
            x_axis: None,
            y_axis: None,
            scene: Scene::new(),
            legend: Vec::new(),
        }
    }

    /// True when the frame only carries the "no data" placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.event_id.is_none()
    }

    /// In-surface legend placement (top-right of the plot), for backends without a legend container.
    pub fn legend_layout(&self) -> Vec<LegendRow> {
        const ROW: f64 = 20.0;
        const SWATCH: f64 = 12.0;
        let x = self.plot.right - 130.0;
        self.legend
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let y = self.plot.top + 10.0 + i as f64 * ROW;
                LegendRow {
                    swatch: Rect::from_ltwh(x, y, SWATCH, SWATCH),
                    label_pos: Point::new(x + SWATCH + 6.0, y + SWATCH - 2.0),
                    label: e.label.clone(),
                    color: e.color,
                }
            })
            .collect()
    }

    /// Marker primitives with their tooltip payloads, in paint order.
    pub fn markers(&self) -> impl Iterator<Item = (Point, f64, &TooltipContent)> + '_ {
        self.scene.items.iter().filter_map(|p| match p {
            Primitive::Circle { center, radius, tooltip: Some(t), .. } => Some((*center, *radius, t)),
            _ => None,
        })
    }
}

/// Raw day-offset extent over every point of `event`. A single-day extent is widened by one day each side.
pub fn x_domain(event: &Event) -> Option<(f64, f64)> {
    let mut days = event.points().map(|p| p.day());
    let first = days.next()?;
    let (lo, hi) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    if lo == hi {
        return Some((lo as f64 - 1.0, hi as f64 + 1.0));
    }
    Some((lo as f64, hi as f64))
}

/// Symmetric vertical extent `[-m, m]` with `m = 1.1 * max |return|` (before nicing).
/// All-zero returns fall back to `[-1, 1]`.
pub fn y_domain(event: &Event) -> Option<(f64, f64)> {
    let mut any = false;
    let max_abs = event
        .points()
        .map(|p| p.ret())
        .filter(|r| r.is_finite())
        .inspect(|_| any = true)
        .fold(0.0f64, |m, r| m.max(r.abs()));
    if !any {
        return None;
    }
    let m = if max_abs > 0.0 { max_abs * Y_PADDING } else { 1.0 };
    Some((-m, m))
}

/// Build a fresh frame for `selection`. Never fails: unresolvable selections yield the placeholder.
pub fn redraw(dataset: &Dataset, selection: &Selection, cfg: &ChartConfig) -> Frame {
    let mut frame = Frame::empty(cfg);

    let Some(event) = resolve(dataset, selection).filter(|e| !e.series.is_empty()) else {
        debug!(selection = selection.value(), "selection resolved to no data");
        draw_placeholder(&mut frame, &cfg.no_data_message);
        return frame;
    };
    let (Some(xd), Some(yd)) = (x_domain(event), y_domain(event)) else {
        warn!(event_id = %event.id, "event has no drawable points");
        draw_placeholder(&mut frame, &cfg.no_data_message);
        return frame;
    };

    let plot = frame.plot;
    let theme = frame.theme;
    let palette = cfg.palette();
    let x = Axis::new(
        X_AXIS_TITLE,
        LinearScale::new(xd, (plot.left, plot.right)).nice(cfg.ticks),
        TickFormat::Integer,
        cfg.ticks,
    );
    let y = Axis::new(
        Y_AXIS_TITLE,
        LinearScale::new(yd, (plot.bottom, plot.top)).nice(cfg.ticks),
        TickFormat::Percent,
        cfg.ticks,
    );

    draw_grid(&mut frame.scene, &x, &y, &plot, &theme);
    draw_event_start(&mut frame.scene, &x, &plot, &theme);
    for s in &event.series {
        let color = palette.color_for(&s.name);
        if palette.position(&s.name).is_none() {
            warn!(event_id = %event.id, series = %s.name, "rank group outside the canonical bands");
        }
        draw_series(&mut frame.scene, s, color, &x, &y, cfg, &theme);
    }
    draw_axes(&mut frame.scene, &x, &y, &plot, &theme);
    frame.scene.push(text(
        Point::new(plot.center().x, plot.top * 0.5),
        &event.name,
        16.0,
        theme.title,
        Anchor::Middle,
        Role::Title,
    ).bold());

    frame.legend = legend(event, &palette);
    frame.event_id = Some(event.id.clone());
    frame.title = Some(event.name.clone());
    frame.x_axis = Some(x);
    frame.y_axis = Some(y);
    debug!(
        event_id = %event.id,
        series = event.series.len(),
        points = event.point_count(),
        primitives = frame.scene.items.len(),
        "redraw complete"
    );
    frame
}

/// Legend rows in stored series order, colored by canonical band position.
pub fn legend(event: &Event, palette: &RankPalette) -> Vec<LegendEntry> {
    event
        .series
        .iter()
        .map(|s| LegendEntry { label: s.name.clone(), color: palette.color_for(&s.name) })
        .collect()
}

// ---- helpers ----------------------------------------------------------------

fn text(pos: Point, s: &str, size: f64, color: Color, anchor: Anchor, role: Role) -> Primitive {
    Primitive::Text { pos, text: s.to_string(), size, color, anchor, bold: false, rotate: 0.0, role }
}

trait TextExt {
    fn bold(self) -> Self;
    fn rotated(self, degrees: f64) -> Self;
}

impl TextExt for Primitive {
    fn bold(mut self) -> Self {
        if let Primitive::Text { bold, .. } = &mut self { *bold = true; }
        self
    }
    fn rotated(mut self, degrees: f64) -> Self {
        if let Primitive::Text { rotate, .. } = &mut self { *rotate = degrees; }
        self
    }
}

fn draw_placeholder(frame: &mut Frame, message: &str) {
    let c = frame.plot.center();
    let color = frame.theme.placeholder;
    frame.scene.push(text(c, message, 16.0, color, Anchor::Middle, Role::Placeholder));
}

fn draw_grid(scene: &mut Scene, x: &Axis, y: &Axis, plot: &Rect, theme: &Theme) {
    let stroke = Stroke::solid(theme.grid, 1.0);
    for (from, to) in grid::vertical_lines(x, plot).into_iter().chain(grid::horizontal_lines(y, plot)) {
        scene.push(Primitive::Line { from, to, stroke, role: Role::Grid });
    }
}

fn draw_event_start(scene: &mut Scene, x: &Axis, plot: &Rect, theme: &Theme) {
    let px = x.scale.to_px(0.0);
    scene.push(Primitive::Line {
        from: Point::new(px, plot.top),
        to: Point::new(px, plot.bottom),
        stroke: Stroke::dashed(theme.event_marker, 2.0, 5.0, 5.0),
        role: Role::EventStart,
    });
    scene.push(text(
        Point::new(px, plot.top - 5.0),
        EVENT_START_LABEL,
        12.0,
        theme.event_marker,
        Anchor::Middle,
        Role::EventStart,
    ));
}

fn draw_series(
    scene: &mut Scene,
    series: &crate::dataset::Series,
    color: Color,
    x: &Axis,
    y: &Axis,
    cfg: &ChartConfig,
    theme: &Theme,
) {
    let pts: Vec<Point> = series
        .data
        .iter()
        .filter(|p| p.ret().is_finite())
        .map(|p| Point::new(x.scale.to_px(p.day() as f64), y.scale.to_px(p.ret())))
        .collect();
    if pts.len() >= 2 {
        scene.push(Primitive::Path { cmds: monotone_x(&pts), stroke: Stroke::solid(color, cfg.line_width), role: Role::Series });
    }
    for (p, center) in series.data.iter().filter(|p| p.ret().is_finite()).zip(pts) {
        scene.push(Primitive::Circle {
            center,
            radius: cfg.marker_radius,
            fill: color,
            outline: Some(Stroke::solid(theme.marker_outline, 1.0)),
            tooltip: Some(TooltipContent { series: series.name.clone(), day: p.day(), ret: p.ret() }),
        });
    }
}

fn draw_axes(scene: &mut Scene, x: &Axis, y: &Axis, plot: &Rect, theme: &Theme) {
    let line = Stroke::solid(theme.axis_line, 1.0);
    const TICK: f64 = 6.0;

    scene.push(Primitive::Line {
        from: Point::new(plot.left, plot.bottom),
        to: Point::new(plot.right, plot.bottom),
        stroke: line,
        role: Role::Axis,
    });
    for (px, label) in x.tick_labels() {
        scene.push(Primitive::Line {
            from: Point::new(px, plot.bottom),
            to: Point::new(px, plot.bottom + TICK),
            stroke: line,
            role: Role::Axis,
        });
        scene.push(text(Point::new(px, plot.bottom + TICK + 12.0), &label, 11.0, theme.tick, Anchor::Middle, Role::TickLabel));
    }

    scene.push(Primitive::Line {
        from: Point::new(plot.left, plot.top),
        to: Point::new(plot.left, plot.bottom),
        stroke: line,
        role: Role::Axis,
    });
    for (py, label) in y.tick_labels() {
        scene.push(Primitive::Line {
            from: Point::new(plot.left - TICK, py),
            to: Point::new(plot.left, py),
            stroke: line,
            role: Role::Axis,
        });
        scene.push(text(Point::new(plot.left - TICK - 3.0, py + 4.0), &label, 11.0, theme.tick, Anchor::End, Role::TickLabel));
    }

    scene.push(text(
        Point::new(plot.center().x, plot.bottom + 45.0),
        &x.title,
        14.0,
        theme.axis_label,
        Anchor::Middle,
        Role::AxisTitle,
    ));
    scene.push(
        text(Point::new(plot.left - 60.0, plot.center().y), &y.title, 14.0, theme.axis_label, Anchor::Middle, Role::AxisTitle)
            .rotated(-90.0),
    );
}
