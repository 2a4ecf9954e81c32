// File: crates/pancake-core/src/scale.rs
// Summary: Linear domain -> range scale used to place data in percentage layout.

/// Affine map from a domain interval onto an output range.
///
/// The slope is computed once at construction. A degenerate domain
/// (`d0 == d1`) is a precondition violation: the slope becomes infinite or
/// NaN and so does every mapped value. Nothing is clamped; check
/// [`Linear::is_degenerate`] when the domain comes from untrusted data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
    slope: f64,
}

impl Linear {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let (r0, r1) = range;
        Self { d0, d1, r0, r1, slope: (r1 - r0) / (d1 - d0) }
    }

    /// Scale that returns its input unchanged.
    pub fn identity() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }

    /// Domain onto `0..100`, left to right.
    pub fn percent(domain: (f64, f64)) -> Self {
        Self::new(domain, (0.0, 100.0))
    }

    /// Domain onto `100..0`, so larger values sit closer to the top edge.
    pub fn percent_flipped(domain: (f64, f64)) -> Self {
        Self::new(domain, (100.0, 0.0))
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.r0 + (value - self.d0) * self.slope
    }

    /// Map an output value back into the domain.
    #[inline]
    pub fn invert(&self, output: f64) -> f64 {
        self.d0 + (output - self.r0) / self.slope
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
    pub fn slope(&self) -> f64 { self.slope }

    pub fn is_degenerate(&self) -> bool {
        self.d0 == self.d1 || !self.slope.is_finite()
    }
}

/// Build a [`Linear`] scale; shorthand for [`Linear::new`].
pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Linear {
    Linear::new(domain, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_midpoint() {
        assert_eq!(linear((0.0, 10.0), (0.0, 100.0)).apply(5.0), 50.0);
    }

    #[test]
    fn flipped_range_inverts_axis() {
        let s = linear((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.apply(0.0), 100.0);
        assert_eq!(s.apply(10.0), 0.0);
        assert_eq!(s.invert(25.0), 7.5);
    }

    #[test]
    fn values_outside_domain_are_not_clamped() {
        let s = Linear::percent((0.0, 10.0));
        assert_eq!(s.apply(20.0), 200.0);
        assert_eq!(s.apply(-5.0), -50.0);
    }

    #[test]
    fn degenerate_domain_is_reported_not_hidden() {
        let s = linear((3.0, 3.0), (0.0, 100.0));
        assert!(s.is_degenerate());
        assert!(!s.apply(3.0).is_finite());
        assert!(!Linear::identity().is_degenerate());
    }
}
