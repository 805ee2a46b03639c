// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument validation errors.

use core::fmt;

use crate::Point;

/// An argument to [`generate`] or [`CircleSpec::new`] that cannot describe a
/// set of points on a circle.
///
/// Each variant carries the offending value.
///
/// [`generate`]: crate::generate
/// [`CircleSpec::new`]: crate::CircleSpec::new
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidArgument {
    /// The radius was zero, negative, infinite or NaN.
    Radius(f64),
    /// The point count was less than one, or does not fit in memory indices.
    Count(i64),
    /// The center had an infinite or NaN coordinate.
    Center(Point),
    /// Center and radius are each finite, but some point of the circle
    /// would have a coordinate beyond the largest finite `f64`.
    Extent {
        /// The requested center.
        center: Point,
        /// The requested radius.
        radius: f64,
    },
}

impl InvalidArgument {
    /// The name of the rejected field.
    ///
    /// ```
    /// use circle_points::generate;
    ///
    /// let err = generate((0.0, 0.0), 0.0, 3).unwrap_err();
    /// assert_eq!(err.field(), "radius");
    /// ```
    pub fn field(&self) -> &'static str {
        match self {
            InvalidArgument::Radius(_) => "radius",
            InvalidArgument::Count(_) => "count",
            InvalidArgument::Center(_) | InvalidArgument::Extent { .. } => "center",
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::Radius(r) => {
                write!(f, "invalid radius {r}: must be a finite number greater than 0")
            }
            InvalidArgument::Count(n) => write!(f, "invalid point count {n}: must be at least 1"),
            InvalidArgument::Center(c) => {
                write!(f, "invalid center {c}: coordinates must be finite")
            }
            InvalidArgument::Extent { center, radius } => write!(
                f,
                "circle of radius {radius} around {center} exceeds the finite coordinate range"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_value() {
        assert_eq!(
            InvalidArgument::Radius(-2.5).to_string(),
            "invalid radius -2.5: must be a finite number greater than 0"
        );
        assert_eq!(
            InvalidArgument::Count(0).to_string(),
            "invalid point count 0: must be at least 1"
        );
        assert_eq!(
            InvalidArgument::Center(Point::new(f64::INFINITY, 1.0)).to_string(),
            "invalid center (inf, 1): coordinates must be finite"
        );
        assert_eq!(
            InvalidArgument::Extent {
                center: Point::new(1e308, 0.0),
                radius: 1e308
            }
            .to_string(),
            format!(
                "circle of radius {} around ({}, 0) exceeds the finite coordinate range",
                1e308, 1e308
            )
        );
    }

    #[test]
    fn fields() {
        assert_eq!(InvalidArgument::Count(-3).field(), "count");
        assert_eq!(InvalidArgument::Center(Point::ORIGIN).field(), "center");
        let extent = InvalidArgument::Extent {
            center: Point::ORIGIN,
            radius: 1.0,
        };
        assert_eq!(extent.field(), "center");
    }
}
