// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced points on a circle.
//!
//! The core of this crate is [`generate`]: given a center, a radius and a
//! point count, it returns the [`PointSet`] of coordinates that divide the
//! circle's circumference into equal arcs, starting at angle 0 and proceeding
//! counter-clockwise (in a Y-up coordinate system).
//!
//! Around that core sit the pieces needed to show the result: a small set of
//! geometry value types, an SVG [`Plot`] renderer and a textual [`Report`] of
//! the parameters, optionally laid out as a PDF.
//!
//! # Examples
//!
//! ```
//! use circle_points::{generate, Point};
//!
//! let points = generate((0.0, 0.0), 5.0, 4).unwrap();
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[0], Point::new(5.0, 0.0));
//! assert!((points[1].y - 5.0).abs() < 1e-12);
//! ```
//!
//! Invalid input is reported, never partially computed:
//!
//! ```
//! use circle_points::{generate, InvalidArgument};
//!
//! assert_eq!(generate((0.0, 0.0), -1.0, 4), Err(InvalidArgument::Radius(-1.0)));
//! assert_eq!(generate((0.0, 0.0), 1.0, 0), Err(InvalidArgument::Count(0)));
//! ```
//!
//! Rendering a plot:
//!
//! ```
//! use circle_points::{CircleSpec, Plot};
//!
//! let spec = CircleSpec::new((0.0, 0.0), 5.0, 8).unwrap();
//! let points = spec.generate();
//! let svg = Plot::new(&spec, &points).to_svg(400.0, 400.0);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate regardless.
//!
//! The `serde`, `schemars` and `mint` features add the corresponding trait
//! implementations to the value types.
//!
//! The `pdf` feature (which implies `std`) adds `Report::to_pdf`, a one-page
//! PDF of the report and plot written with [`printpdf`].
//!
//! [`libm`]: https://docs.rs/libm
//! [`printpdf`]: https://docs.rs/printpdf

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![expect(
    clippy::use_self,
    clippy::return_self_not_must_use,
    reason = "value types name themselves in signatures and builders are plain methods"
)]
#![expect(
    clippy::cast_possible_truncation,
    reason = "segment counts, hex digits and PDF coordinates are in range"
)]
#![expect(
    clippy::exhaustive_enums,
    reason = "path elements and argument errors are complete sets"
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("circle-points requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod affine;
mod bezpath;
mod circle;
mod color;
mod common;
mod error;
mod generate;
#[cfg(feature = "pdf")]
mod pdf;
mod plot;
mod point;
mod point_set;
mod rect;
mod report;
mod svg;
mod vec2;

pub use crate::affine::Affine;
pub use crate::bezpath::{BezPath, PathEl};
pub use crate::circle::{Circle, CirclePathIter};
pub use crate::color::{Color, ColorParseError};
pub use crate::error::InvalidArgument;
pub use crate::generate::{generate, CircleSpec};
#[cfg(feature = "pdf")]
pub use crate::pdf::PdfError;
pub use crate::plot::{Dashes, Plot, PlotStyle};
pub use crate::point::Point;
pub use crate::point_set::PointSet;
pub use crate::rect::Rect;
pub use crate::report::Report;
pub use crate::vec2::Vec2;

#[cfg(test)]
pub(crate) mod test_util {
    /// Assert that two floats are within `epsilon` of each other.
    #[track_caller]
    pub(crate) fn assert_approx_eq(x: f64, y: f64, epsilon: f64) {
        assert!((x - y).abs() < epsilon, "{x} != {y} (epsilon {epsilon})");
    }
}
