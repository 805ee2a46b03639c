// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced points on a circle.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use crate::{Circle, InvalidArgument, Point, PointSet};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A validated request for `count` points on the circle of `radius` around
/// `center`.
///
/// The fields can only be set through [`CircleSpec::new`], so a `CircleSpec`
/// always has a finite center, a finite positive radius and at least one
/// point, and every point of its circle has finite coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CircleSpecFields"))]
pub struct CircleSpec {
    center: Point,
    radius: f64,
    count: usize,
}

/// Unvalidated form used when deserializing a [`CircleSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CircleSpecFields {
    center: Point,
    radius: f64,
    count: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleSpecFields> for CircleSpec {
    type Error = InvalidArgument;

    fn try_from(fields: CircleSpecFields) -> Result<Self, Self::Error> {
        CircleSpec::new(fields.center, fields.radius, fields.count)
    }
}

impl CircleSpec {
    /// Validate a point-generation request.
    ///
    /// # Errors
    ///
    /// Fails if `radius` is not a finite number greater than zero, if `count`
    /// is less than one, if `center` has a non-finite coordinate, or if the
    /// circle reaches past the largest finite `f64`. The checks run in that
    /// order and the first failure is reported.
    ///
    /// ```
    /// use circle_points::{CircleSpec, InvalidArgument};
    ///
    /// let spec = CircleSpec::new((2.0, 3.0), 1.0, 6).unwrap();
    /// assert_eq!(spec.count(), 6);
    /// assert_eq!(CircleSpec::new((0.0, 0.0), 1.0, -1), Err(InvalidArgument::Count(-1)));
    /// ```
    pub fn new(
        center: impl Into<Point>,
        radius: f64,
        count: i64,
    ) -> Result<CircleSpec, InvalidArgument> {
        let center = center.into();
        // Written so that NaN fails too.
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(InvalidArgument::Radius(radius));
        }
        if count < 1 {
            return Err(InvalidArgument::Count(count));
        }
        let count = usize::try_from(count).map_err(|_| InvalidArgument::Count(count))?;
        if !center.is_finite() {
            return Err(InvalidArgument::Center(center));
        }
        if !((center.x.abs() + radius).is_finite() && (center.y.abs() + radius).is_finite()) {
            return Err(InvalidArgument::Extent { center, radius });
        }
        Ok(CircleSpec {
            center,
            radius,
            count,
        })
    }

    /// The center of the circle.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius of the circle. Always positive.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The number of points to place. Always at least one.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The circle the points lie on.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// The angle between consecutive points, in radians.
    #[inline]
    pub fn angle_step(&self) -> f64 {
        TAU / self.count as f64
    }

    /// Compute the points.
    ///
    /// Point `i` is at angle `i * angle_step()`, so the first point is always
    /// `(center.x + radius, center.y)` and the full turn is never repeated.
    pub fn generate(&self) -> PointSet {
        let circle = self.circle();
        let step = self.angle_step();
        let points: Vec<Point> = (0..self.count)
            .map(|i| circle.point_at(i as f64 * step))
            .collect();
        PointSet::new(points, step)
    }
}

/// Place `count` points evenly around the circle of `radius` around `center`.
///
/// The points start at angle 0 and proceed counter-clockwise in angle order;
/// the closing point at 2π is not included. Every point is `radius` away from
/// `center`, up to floating-point rounding.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `radius` is not a finite number greater
/// than zero, if `count` is less than one, if `center` is not finite, or if
/// the circle does not fit in finite coordinates. Nothing is computed in that
/// case.
///
/// # Examples
///
/// ```
/// use circle_points::{generate, Point};
///
/// let points = generate((2.0, 3.0), 1.0, 1).unwrap();
/// assert_eq!(points.as_slice(), &[Point::new(3.0, 3.0)]);
/// ```
pub fn generate(
    center: impl Into<Point>,
    radius: f64,
    count: i64,
) -> Result<PointSet, InvalidArgument> {
    CircleSpec::new(center, radius, count).map(|spec| spec.generate())
}
