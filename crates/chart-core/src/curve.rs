// File: crates/chart-core/src/curve.rs
// Summary: Monotone cubic interpolation in x (Steffen tangents) emitted as Bezier path commands.
// The curve passes through every point and never overshoots between neighbours:
// on a monotone run the interpolant stays monotone and within each segment's y-range.

use crate::geometry::Point;
use crate::scene::PathCmd;

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Slope of the secant from `a` to `b`; vertical or degenerate segments count as flat.
fn secant(a: Point, b: Point) -> f64 {
    let h = b.x - a.x;
    if h.abs() < f64::EPSILON { 0.0 } else { (b.y - a.y) / h }
}

/// Tangent at interior point `p1` given neighbours `p0` and `p2`.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    let denom = h0 + h1;
    let p = if denom.abs() < f64::EPSILON { 0.0 } else { (s0 * h1 + s1 * h0) / denom };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// Tangent at an end point from the adjacent segment and the neighbour's tangent.
fn end_tangent(a: Point, b: Point, t: f64) -> f64 {
    let h = b.x - a.x;
    if h.abs() < f64::EPSILON { t } else { (3.0 * (b.y - a.y) / h - t) / 2.0 }
}

/// Tangents at every point, in input order.
pub fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        2 => {
            let s = secant(points[0], points[1]);
            vec![s, s]
        }
        _ => {
            let mut t = vec![0.0; n];
            for i in 1..n - 1 {
                t[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
            }
            t[0] = end_tangent(points[0], points[1], t[1]);
            t[n - 1] = end_tangent(points[n - 2], points[n - 1], t[n - 2]);
            t
        }
    }
}

/// Path commands for a monotone-x curve through `points` (already in pixel space).
/// Two points yield a straight segment; a single point yields a bare move.
pub fn monotone_x(points: &[Point]) -> Vec<PathCmd> {
    let Some(&first) = points.first() else { return Vec::new() };
    let mut cmds = Vec::with_capacity(points.len());
    cmds.push(PathCmd::MoveTo(first));
    if points.len() == 2 {
        cmds.push(PathCmd::LineTo(points[1]));
        return cmds;
    }
    let t = tangents(points);
    for i in 1..points.len() {
        let (p0, p1) = (points[i - 1], points[i]);
        let dx = (p1.x - p0.x) / 3.0;
        cmds.push(PathCmd::CubicTo(
            Point::new(p0.x + dx, p0.y + dx * t[i - 1]),
            Point::new(p1.x - dx, p1.y - dx * t[i]),
            p1,
        ));
    }
    cmds
}
