// File: crates/chart-core/src/grid.rs
// Summary: Gridline layout at axis tick positions.

use crate::axis::Axis;
use crate::geometry::{Point, Rect};

/// Vertical gridlines (one per x tick) spanning the full plot height.
pub fn vertical_lines(x: &Axis, plot: &Rect) -> Vec<(Point, Point)> {
    x.ticks
        .iter()
        .map(|&t| {
            let px = x.scale.to_px(t);
            (Point::new(px, plot.top), Point::new(px, plot.bottom))
        })
        .collect()
}

/// Horizontal gridlines (one per y tick) spanning the full plot width.
pub fn horizontal_lines(y: &Axis, plot: &Rect) -> Vec<(Point, Point)> {
    y.ticks
        .iter()
        .map(|&t| {
            let py = y.scale.to_px(t);
            (Point::new(plot.left, py), Point::new(plot.right, py))
        })
        .collect()
}
