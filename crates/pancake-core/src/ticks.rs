// File: crates/pancake-core/src/ticks.rs
// Summary: "Nice" tick generation for axis labels and gridlines.

use std::fmt;

use tracing::debug;

/// Tick count used when a caller has no preference.
pub const DEFAULT_TICK_COUNT: usize = 5;

// Thresholds between the 1, 2, 5 and 10 multipliers: sqrt(50), sqrt(10), sqrt(2).
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = std::f64::consts::SQRT_2;

/// A tick value.
///
/// Displays as an integer literal when it has no fractional part (`20`,
/// never `20.0`) and as the shortest round-tripping float otherwise (`0.2`).
/// Negative zero is folded into zero on construction.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tick(f64);

impl Tick {
    pub fn new(value: f64) -> Self {
        Self(if value == 0.0 { 0.0 } else { value })
    }

    #[inline]
    pub fn value(self) -> f64 { self.0 }

    pub fn is_integer(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }
}

impl From<f64> for Tick {
    fn from(value: f64) -> Self { Tick::new(value) }
}

impl From<i32> for Tick {
    fn from(value: i32) -> Self { Tick::new(value as f64) }
}

impl From<Tick> for f64 {
    fn from(tick: Tick) -> Self { tick.0 }
}

impl PartialEq<f64> for Tick {
    fn eq(&self, other: &f64) -> bool { self.0 == *other }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display never uses exponent notation and drops a zero
        // fraction, which is exactly the integer/float split we want.
        write!(f, "{}", self.0)
    }
}

/// Step between adjacent ticks for `count` intervals over `[start, stop]`.
///
/// Expects `start <= stop`. The step is `{1, 2, 5, 10} * 10^k`. For
/// sub-unit steps (`k < 0`) the result is returned as a negative inverse,
/// `-10^-k / multiplier`, so that tick values can be produced by dividing
/// integers instead of multiplying by an inexact fraction. `count == 0`
/// yields a non-finite step.
pub fn increment(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let multiplier = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        multiplier * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / multiplier
    }
}

/// Round tick values spanning `[start, stop]`, aiming for about `count`
/// intervals.
///
/// A reversed domain (`stop < start`) yields the same ticks in reverse
/// order. A zero or non-finite step (for example `count == 0`) yields no
/// ticks at all.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<Tick> {
    if start == stop && count > 0 {
        return vec![Tick::new(start)];
    }

    let reverse = stop < start;
    let (start, stop) = if reverse { (stop, start) } else { (start, stop) };

    let step = increment(start, stop, count);
    if step == 0.0 || !step.is_finite() {
        debug!(start, stop, count, step, "no usable tick step");
        return Vec::new();
    }

    let mut values: Vec<f64> = if step > 0.0 {
        let lo = (start / step).ceil();
        let hi = (stop / step).floor();
        let n = (hi - lo + 1.0).ceil();
        (0..tick_count(n)).map(|i| (lo + i as f64) * step).collect()
    } else {
        let lo = (start * step).floor();
        let hi = (stop * step).ceil();
        let n = (lo - hi + 1.0).ceil();
        (0..tick_count(n)).map(|i| (lo - i as f64) / step).collect()
    };

    if reverse {
        values.reverse();
    }

    values.into_iter().map(Tick::new).collect()
}

fn tick_count(n: f64) -> usize {
    if n > 0.0 { n as usize } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(ts: &[Tick]) -> Vec<f64> {
        ts.iter().map(|t| t.value()).collect()
    }

    #[test]
    fn whole_number_domain() {
        assert_eq!(values(&ticks(0.0, 100.0, 5)), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn fractional_domain_uses_inverted_step() {
        assert_eq!(increment(0.0, 1.0, 5), -5.0);
        assert_eq!(values(&ticks(0.0, 1.0, 5)), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn equal_bounds_yield_single_tick() {
        assert_eq!(values(&ticks(7.5, 7.5, 3)), vec![7.5]);
        assert!(ticks(7.5, 7.5, 0).is_empty());
    }

    #[test]
    fn zero_count_yields_nothing() {
        assert!(ticks(0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn reversed_domain_reverses_output() {
        assert_eq!(values(&ticks(100.0, 0.0, 5)), vec![100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        // 1958.2 .. 2019.9 over 5 intervals -> step 10
        let ts = values(&ticks(1958.2, 2019.9, 5));
        assert_eq!(ts, vec![1960.0, 1970.0, 1980.0, 1990.0, 2000.0, 2010.0]);
    }

    #[test]
    fn negative_domain() {
        assert_eq!(values(&ticks(-10.0, 10.0, 4)), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn display_drops_zero_fraction() {
        assert_eq!(Tick::new(20.0).to_string(), "20");
        assert_eq!(Tick::new(0.2).to_string(), "0.2");
        assert_eq!(Tick::new(-0.0).to_string(), "0");
        assert!(Tick::new(3.0).is_integer());
        assert!(!Tick::new(0.5).is_integer());
    }
}
