// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG text output.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{BezPath, PathEl};

impl BezPath {
    /// Convert the path to an SVG path string representation.
    ///
    /// Coordinates are written with at most three decimals, which is plenty
    /// for pixel space.
    ///
    /// ```
    /// use circle_points::{BezPath, PathEl, Point};
    ///
    /// let path = BezPath::from_vec(vec![
    ///     PathEl::MoveTo(Point::new(1.0, 2.5)),
    ///     PathEl::LineTo(Point::new(10.0, -0.0004)),
    ///     PathEl::ClosePath,
    /// ]);
    /// assert_eq!(path.to_svg(), "M1,2.5 L10,0 Z");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut buffer = String::new();
        self.write_svg(&mut buffer)
            .expect("writing to a String never fails");
        buffer
    }

    /// Write the SVG representation of this path to the provided writer.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> fmt::Result {
        for (i, el) in self.elements().iter().enumerate() {
            if i > 0 {
                writer.write_char(' ')?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{},{}", Num(p.x), Num(p.y))?,
                PathEl::LineTo(p) => write!(writer, "L{},{}", Num(p.x), Num(p.y))?,
                PathEl::CurveTo(p1, p2, p3) => write!(
                    writer,
                    "C{},{} {},{} {},{}",
                    Num(p1.x),
                    Num(p1.y),
                    Num(p2.x),
                    Num(p2.y),
                    Num(p3.x),
                    Num(p3.y)
                )?,
                PathEl::ClosePath => writer.write_char('Z')?,
            }
        }
        Ok(())
    }
}

/// A number written with a fixed count of decimals, with `-0` normalized to
/// `0`.
pub(crate) struct Fixed {
    pub(crate) value: f64,
    pub(crate) precision: usize,
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = alloc::format!("{:.*}", self.precision, self.value);
        let is_zero = s.bytes().all(|b| matches!(b, b'-' | b'0' | b'.'));
        f.write_str(if is_zero { s.trim_start_matches('-') } else { &s })
    }
}

/// A compact SVG number: three decimals, trailing zeros dropped.
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = alloc::format!(
            "{}",
            Fixed {
                value: self.0,
                precision: 3
            }
        );
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            &s
        };
        f.write_str(s)
    }
}

/// Text with the XML special characters escaped, for element content and
/// attribute values.
pub(crate) struct Escaped<'a>(pub(crate) &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn numbers() {
        assert_eq!(Num(1.0).to_string(), "1");
        assert_eq!(Num(-0.25).to_string(), "-0.25");
        assert_eq!(Num(3.14159).to_string(), "3.142");
        assert_eq!(Num(-1e-9).to_string(), "0");
        assert_eq!(Num(120.0).to_string(), "120");
    }

    #[test]
    fn fixed() {
        let f = |value| {
            Fixed {
                value,
                precision: 3,
            }
            .to_string()
        };
        assert_eq!(f(5.0), "5.000");
        assert_eq!(f(-3e-16), "0.000");
        assert_eq!(f(-1.5), "-1.500");
    }

    #[test]
    fn escaping() {
        assert_eq!(
            Escaped("<a & \"b\">").to_string(),
            "&lt;a &amp; &quot;b&quot;&gt;"
        );
        assert_eq!(Escaped("X [m]").to_string(), "X [m]");
    }

    #[test]
    fn curve_path() {
        let path = BezPath::from_vec(vec![
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::CurveTo(
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ),
        ]);
        assert_eq!(path.to_svg(), "M0,0 C1,0 1,1 0,1");
    }
}
