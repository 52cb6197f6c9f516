// File: crates/chart-core/src/scene.rs
// Summary: Backend-agnostic drawing primitives produced by a redraw and consumed by SVG/PNG backends.

use crate::geometry::Point;
use crate::theme::Color;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// What a primitive belongs to; lets backends group or style output (SVG classes, tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Grid,
    EventStart,
    Series,
    Marker,
    Axis,
    TickLabel,
    AxisTitle,
    Title,
    Placeholder,
}

impl Role {
    pub fn class(&self) -> &'static str {
        match self {
            Role::Grid => "grid",
            Role::EventStart => "event-start",
            Role::Series => "line",
            Role::Marker => "dot",
            Role::Axis => "axis",
            Role::TickLabel => "tick",
            Role::AxisTitle => "axis-label",
            Role::Title => "chart-title",
            Role::Placeholder => "no-data",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths; `None` draws solid.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }
    pub const fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self { color, width, dash: Some((on, off)) }
    }
}

/// Hover content attached to a data-point marker.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub series: String,
    pub day: i32,
    pub ret: f64,
}

impl TooltipContent {
    /// Lines as displayed: label, day offset, return rounded to two decimals.
    pub fn lines(&self) -> [String; 3] {
        [
            self.series.clone(),
            format!("Day: {}", self.day),
            format!("Return: {:.2}%", self.ret),
        ]
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, stroke: Stroke, role: Role },
    Path { cmds: Vec<PathCmd>, stroke: Stroke, role: Role },
    Circle { center: Point, radius: f64, fill: Color, outline: Option<Stroke>, tooltip: Option<TooltipContent> },
    Text {
        pos: Point,
        text: String,
        size: f64,
        color: Color,
        anchor: Anchor,
        bold: bool,
        /// Rotation in degrees around `pos` (counter-clockwise negative, SVG convention).
        rotate: f64,
        role: Role,
    },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { role, .. } | Primitive::Path { role, .. } | Primitive::Text { role, .. } => *role,
            Primitive::Circle { .. } => Role::Marker,
        }
    }
}

/// Ordered display list; later primitives paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub items: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, p: Primitive) { self.items.push(p); }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> + '_ {
        self.items.iter().filter(move |p| p.role() == role)
    }

    /// Texts drawn with `role`, in paint order.
    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.with_role(role)
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
