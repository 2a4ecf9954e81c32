// File: crates/pancake-core/src/axis.rs
// Summary: Axis identifiers and gridline orientation.

use std::fmt;

/// One of the two data axes of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction in which gridlines run.
///
/// Horizontal lines sit at Y values and are labelled from the Y domain;
/// vertical lines sit at X values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The axis whose domain supplies the tick values.
    pub const fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Y,
            Orientation::Vertical => Axis::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_lines_follow_the_y_domain() {
        assert_eq!(Orientation::Horizontal.axis(), Axis::Y);
        assert_eq!(Orientation::Vertical.axis(), Axis::X);
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
