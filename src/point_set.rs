// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered result of point generation.

use alloc::vec::Vec;
use core::ops::Deref;
use core::slice;

use crate::{Point, Rect};

/// Points evenly spaced around a circle, in ascending angle order.
///
/// A `PointSet` is produced by [`generate`] or [`CircleSpec::generate`] and is
/// never empty. It dereferences to a slice of [`Point`]s.
///
/// [`generate`]: crate::generate
/// [`CircleSpec::generate`]: crate::CircleSpec::generate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointSet {
    points: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(skip))]
    angle_step: f64,
}

impl PointSet {
    pub(crate) fn new(points: Vec<Point>, angle_step: f64) -> PointSet {
        debug_assert!(!points.is_empty(), "a point set is never empty");
        PointSet { points, angle_step }
    }

    /// The points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Take ownership of the points.
    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// The angle between consecutive points, in radians.
    #[inline]
    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }

    /// The angle of the point at `index`, in radians, or `None` if out of
    /// range.
    pub fn angle_of(&self, index: usize) -> Option<f64> {
        (index < self.points.len()).then(|| index as f64 * self.angle_step)
    }

    /// The smallest rectangle containing every point.
    ///
    /// ```
    /// use circle_points::generate;
    ///
    /// let points = generate((0.0, 0.0), 1.0, 2).unwrap();
    /// let bbox = points.bounding_box();
    /// assert_eq!((bbox.x0, bbox.x1), (-1.0, 1.0));
    /// assert!(bbox.height().abs() < 1e-12);
    /// ```
    pub fn bounding_box(&self) -> Rect {
        let first = self.points[0];
        self.points[1..]
            .iter()
            .fold(Rect::from_points(first, first), |bbox, &p| bbox.union_pt(p))
    }
}

impl Deref for PointSet {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl AsRef<[Point]> for PointSet {
    #[inline]
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = alloc::vec::IntoIter<Point>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl From<PointSet> for Vec<Point> {
    #[inline]
    fn from(set: PointSet) -> Vec<Point> {
        set.points
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use crate::test_util::assert_approx_eq;
    use crate::{generate, Point};

    #[test]
    fn slice_access() {
        let points = generate((1.0, 1.0), 2.0, 4).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points.first(), Some(&Point::new(3.0, 1.0)));
        assert_eq!(points.iter().count(), 4);
        assert_eq!(points.clone().into_vec().len(), 4);
    }

    #[test]
    fn angles() {
        let points = generate((0.0, 0.0), 1.0, 4).unwrap();
        assert_approx_eq(points.angle_step(), FRAC_PI_2, 1e-15);
        assert_eq!(points.angle_of(0), Some(0.0));
        assert_approx_eq(points.angle_of(3).unwrap(), 3.0 * FRAC_PI_2, 1e-15);
        assert_eq!(points.angle_of(4), None);
    }

    #[test]
    fn bounding_box_of_square() {
        let bbox = generate((10.0, -10.0), 5.0, 4).unwrap().bounding_box();
        assert_approx_eq(bbox.x0, 5.0, 1e-12);
        assert_approx_eq(bbox.x1, 15.0, 1e-12);
        assert_approx_eq(bbox.y0, -15.0, 1e-12);
        assert_approx_eq(bbox.y1, -5.0, 1e-12);
    }

    #[test]
    fn owned_iteration_preserves_order() {
        let points = generate((0.0, 0.0), 1.0, 3).unwrap();
        let expected = points.as_slice().to_vec();
        let collected: Vec<Point> = points.into_iter().collect();
        assert_eq!(collected, expected);
    }
}
