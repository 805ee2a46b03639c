// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier paths (up to cubic).

use alloc::vec::Vec;
use core::ops::Mul;

use crate::{Affine, Point};

/// A path of line and cubic Bézier segments, possibly with multiple subpaths.
///
/// Only used as an intermediate for drawing; there is no curve math here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

/// The element of a Bézier path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic bezier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl BezPath {
    /// Create a path from a vector of path elements.
    #[inline]
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Apply an affine transform to the path.
    pub fn apply_affine(&mut self, affine: Affine) {
        for el in self.0.iter_mut() {
            *el = affine * (*el);
        }
    }
}

impl FromIterator<PathEl> for BezPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        let el_vec: Vec<_> = iter.into_iter().collect();
        BezPath::from_vec(el_vec)
    }
}

impl Mul<PathEl> for Affine {
    type Output = PathEl;

    fn mul(self, other: PathEl) -> PathEl {
        match other {
            PathEl::MoveTo(p) => PathEl::MoveTo(self * p),
            PathEl::LineTo(p) => PathEl::LineTo(self * p),
            PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(self * p1, self * p2, self * p3),
            PathEl::ClosePath => PathEl::ClosePath,
        }
    }
}

impl Mul<BezPath> for Affine {
    type Output = BezPath;

    fn mul(self, mut other: BezPath) -> BezPath {
        other.apply_affine(self);
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_every_element() {
        let path: BezPath = [
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(1.0, 0.0)),
            PathEl::CurveTo(
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(0.0, 0.0),
            ),
            PathEl::ClosePath,
        ]
        .into_iter()
        .collect();

        let moved = Affine::translate((2.0, 3.0)) * path;
        assert_eq!(moved.elements().len(), 4);
        assert_eq!(moved.elements()[0], PathEl::MoveTo(Point::new(2.0, 3.0)));
        assert_eq!(moved.elements()[1], PathEl::LineTo(Point::new(3.0, 3.0)));
        assert_eq!(
            moved.elements()[2],
            PathEl::CurveTo(
                Point::new(3.0, 4.0),
                Point::new(2.0, 4.0),
                Point::new(2.0, 3.0)
            )
        );
        assert_eq!(moved.elements()[3], PathEl::ClosePath);
    }
}
