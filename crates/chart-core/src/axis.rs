// File: crates/chart-core/src/axis.rs
// Summary: Axis model with title, scale, ticks and tick label formatting.

use crate::scale::{LinearScale, Value};

pub const X_AXIS_TITLE: &str = "Days from Event Start";
pub const Y_AXIS_TITLE: &str = "Cumulative Return (%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded whole numbers (day offsets).
    Integer,
    /// Plain number with a `%` suffix.
    Percent,
}

impl TickFormat {
    pub fn format(&self, v: Value) -> String {
        match self {
            TickFormat::Integer => format!("{}", clean(v.round())),
            TickFormat::Percent => format!("{}%", clean(v)),
        }
    }
}

/// Drop float noise (0.30000000000000004) and negative zero before display.
fn clean(v: f64) -> f64 {
    let r = (v * 1e10).round() / 1e10;
    if r == 0.0 { 0.0 } else { r }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub scale: LinearScale,
    pub format: TickFormat,
    pub ticks: Vec<Value>,
}

impl Axis {
    pub fn new(title: impl Into<String>, scale: LinearScale, format: TickFormat, tick_count: usize) -> Self {
        let ticks = scale.ticks(tick_count);
        Self { title: title.into(), scale, format, ticks }
    }

    /// Tick positions in pixels paired with their labels.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks
            .iter()
            .map(|&t| (self.scale.to_px(t), self.format.format(t)))
            .collect()
    }
}
