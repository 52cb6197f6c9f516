// File: crates/chart-core/src/scale.rs
// Summary: Linear domain -> pixel scale with "nice" domain rounding and round tick generation.

/// Value in data space (day offset or return percentage).
pub type Value = f64;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Default tick count hint used for nicing and tick generation.
pub const DEFAULT_TICKS: usize = 10;

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`r0 > r1`), which is how the vertical scale maps
/// larger values to smaller y pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: Value,
    pub d1: Value,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }

    /// Map a domain value to pixels. A degenerate domain maps everything to the range midpoint.
    #[inline]
    pub fn to_px(&self, v: Value) -> f64 {
        let span = self.d1 - self.d0;
        if span.abs() < 1e-12 {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    /// Inverse of [`to_px`](Self::to_px).
    #[inline]
    pub fn from_px(&self, px: f64) -> Value {
        let span = self.r1 - self.r0;
        if span.abs() < 1e-12 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    /// Extend the domain so both ends land on round tick values for roughly `count` ticks.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = nice_domain(self.d0, self.d1, count);
        self.d0 = d0;
        self.d1 = d1;
        self
    }

    /// Round tick values inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.d0.min(self.d1), self.d0.max(self.d1), count)
    }
}

/// Tick step for `count` ticks over `[start, stop]`. Negative results encode
/// the reciprocal of a sub-unit step (`-10` means a step of `0.1`) so callers
/// can divide instead of multiplying by an inexact fraction.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step.is_finite() && step > 0.0) {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Round `[start, stop]` outward to multiples of the tick step, iterating
/// until the step stops changing.
pub fn nice_domain(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    let reversed = stop < start;
    if reversed {
        std::mem::swap(&mut start, &mut stop);
    }
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reversed { (stop, start) } else { (start, stop) }
}

struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    let spec = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start { i1 += 1.0; }
        if i2 / inc > stop { i2 -= 1.0; }
        TickSpec { i1, i2, inc: -inc }
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        TickSpec { i1, i2, inc }
    };
    if spec.i2 < spec.i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some(spec)
}

/// Round tick values in `[start, stop]` (inclusive), ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let Some(TickSpec { i1, i2, inc }) = tick_spec(start, stop, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}
