// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain text parameter report.

use alloc::string::String;
use core::fmt;

use crate::svg::Fixed;
use crate::{CircleSpec, Color, PointSet};

/// A printable summary of a point-generation run: the parameters, the
/// display color and the computed coordinates.
///
/// The report is the textual half of an export; pair it with
/// [`Plot`](crate::Plot) for the picture, or, with the `pdf` feature, lay
/// out both on a page with `Report::to_pdf`.
///
/// ```
/// use circle_points::{CircleSpec, Color, Report};
///
/// let spec = CircleSpec::new((2.0, 3.0), 1.0, 1).unwrap();
/// let text = Report::new(&spec, Color::RED).with_precision(1).to_string();
/// assert!(text.contains("Center: (2.0, 3.0)\n"));
/// assert!(text.contains("  P1: (3.0, 3.0)\n"));
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    spec: CircleSpec,
    points: PointSet,
    color: Color,
    title: String,
    author: Option<String>,
    precision: usize,
}

impl Report {
    /// A report for `spec`, computing its points.
    pub fn new(spec: &CircleSpec, color: Color) -> Report {
        Report {
            spec: *spec,
            points: spec.generate(),
            color,
            title: "Points on a circle".into(),
            author: None,
            precision: 3,
        }
    }

    /// Builder method for setting the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Report {
        self.title = title.into();
        self
    }

    /// Builder method for adding an author line.
    pub fn with_author(mut self, author: impl Into<String>) -> Report {
        self.author = Some(author.into());
        self
    }

    /// Builder method for setting the number of decimals.
    pub fn with_precision(mut self, precision: usize) -> Report {
        self.precision = precision;
        self
    }

    /// The parameters being reported.
    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    /// The display color of the points.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The computed points.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    fn num(&self, value: f64) -> Fixed {
        Fixed {
            value,
            precision: self.precision,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.spec.center();
        writeln!(f, "{}", self.title)?;
        if let Some(author) = &self.author {
            writeln!(f, "Author: {author}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Center: ({}, {})",
            self.num(center.x),
            self.num(center.y)
        )?;
        writeln!(f, "Radius: {}", self.num(self.spec.radius()))?;
        writeln!(f, "Count: {}", self.spec.count())?;
        writeln!(f, "Color: {}", self.color)?;
        writeln!(f)?;
        writeln!(f, "Points:")?;
        for (i, p) in self.points.iter().enumerate() {
            writeln!(f, "  P{}: ({}, {})", i + 1, self.num(p.x), self.num(p.y))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_report() {
        let spec = CircleSpec::new((0.0, 0.0), 5.0, 4).unwrap();
        let report = Report::new(&spec, Color::RED).with_author("A. Student");
        let expected = "\
Points on a circle
Author: A. Student

Center: (0.000, 0.000)
Radius: 5.000
Count: 4
Color: #ff0000

Points:
  P1: (5.000, 0.000)
  P2: (0.000, 5.000)
  P3: (-5.000, 0.000)
  P4: (0.000, -5.000)
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn title_and_precision() {
        let spec = CircleSpec::new((1.25, -0.5), 2.0, 2).unwrap();
        let text = Report::new(&spec, "#00ff00".parse().unwrap())
            .with_title("Layout")
            .with_precision(2)
            .to_string();
        assert!(text.starts_with("Layout\n\nCenter: (1.25, -0.50)\n"));
        assert!(text.contains("Color: #00ff00\n"));
        assert!(text.contains("  P2: (-0.75, -0.50)\n"));
        assert!(!text.contains("Author"));
    }

    #[test]
    fn points_match_generation() {
        let spec = CircleSpec::new((0.0, 0.0), 1.0, 5).unwrap();
        let report = Report::new(&spec, Color::default());
        assert_eq!(report.points(), &spec.generate());
        assert_eq!(report.spec(), &spec);
        assert_eq!(report.color(), Color::RED);
    }
}
