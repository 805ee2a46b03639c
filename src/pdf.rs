// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-page PDF export of a [`Report`] with its plot.

use std::fmt;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    calculate_points_for_circle, BuiltinFont, IndirectFontRef, Line, LineDashPattern, Mm,
    PdfDocument, PdfLayerReference, Polygon, Pt, Rgb,
};

use crate::plot::Frame;
use crate::{Color, PlotStyle, Point, Rect, Report};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const LEFT: f64 = 20.0;
const TITLE_TOP: f64 = 277.0;
const LINE_HEIGHT: f64 = 6.0;
/// The plot square, in millimeters from the bottom left of the page.
const PLOT_BOX: Rect = Rect::new(30.0, 20.0, 180.0, 170.0);
/// Style lengths are CSS pixels.
const PT_PER_PX: f64 = 0.75;

fn pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

fn pdf_color(c: Color) -> printpdf::Color {
    let channel = |v: u8| f32::from(v) / 255.0;
    printpdf::Color::Rgb(Rgb::new(channel(c.r), channel(c.g), channel(c.b), None))
}

fn pdf_point(p: Point) -> printpdf::Point {
    printpdf::Point {
        x: Pt(p.x as f32),
        y: Pt(p.y as f32),
    }
}

fn disc(layer: &PdfLayerReference, at: Point, radius: f64, color: Color) {
    layer.set_fill_color(pdf_color(color));
    layer.add_polygon(Polygon {
        rings: vec![calculate_points_for_circle(
            Pt(radius as f32),
            Pt(at.x as f32),
            Pt(at.y as f32),
        )],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

/// An error from the PDF backend.
#[derive(Debug)]
pub struct PdfError(printpdf::Error);

impl From<printpdf::Error> for PdfError {
    fn from(e: printpdf::Error) -> PdfError {
        PdfError(e)
    }
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF export failed: {}", self.0)
    }
}

impl std::error::Error for PdfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl Report {
    /// Lay out the report on an A4 page above a plot of its points, and
    /// return the bytes of the PDF file.
    ///
    /// The plot follows `style` for the outline, center and margin; points
    /// use the report's color. Report lines that do not fit above the plot
    /// are cut off with an ellipsis.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the PDF backend fails to load the built-in
    /// fonts or to serialize the document.
    pub fn to_pdf(&self, style: &PlotStyle) -> Result<Vec<u8>, PdfError> {
        let text = self.to_string();
        let mut lines = text.lines();
        let title = lines.next().unwrap_or_default();

        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(PAGE_WIDTH as f32),
            Mm(PAGE_HEIGHT as f32),
            "Report",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        layer.set_fill_color(pdf_color(Color::BLACK));
        layer.use_text(title, 16.0, Mm(LEFT as f32), Mm(TITLE_TOP as f32), &bold);
        write_lines(&layer, lines, &regular);

        self.draw_plot(&layer, style);
        Ok(doc.save_to_bytes()?)
    }

    fn draw_plot(&self, layer: &PdfLayerReference, style: &PlotStyle) {
        let view = Rect::new(
            pt(PLOT_BOX.x0),
            pt(PLOT_BOX.y0),
            pt(PLOT_BOX.x1),
            pt(PLOT_BOX.y1),
        );
        let frame = Frame::fit(self.spec(), style.margin, view, false);
        let xf = frame.local_transform();

        if style.show_axes {
            let seen = frame.visible(view.width(), view.height());
            let origin = frame.to_local(Point::ORIGIN);
            layer.set_outline_color(pdf_color(Color::BLACK));
            layer.set_outline_thickness(0.5);
            for (a, b) in [
                (Point::new(seen.x0, origin.y), Point::new(seen.x1, origin.y)),
                (Point::new(origin.x, seen.y0), Point::new(origin.x, seen.y1)),
            ] {
                let (a, b) = (xf * a, xf * b);
                if !(a.is_finite() && b.is_finite()) {
                    continue;
                }
                layer.add_line(Line {
                    points: vec![(pdf_point(a), false), (pdf_point(b), false)],
                    is_closed: false,
                });
            }
        }

        let center = frame.map(self.spec().center());
        let mut dashes = style.outline_dashes.iter().map(|d| Some(d.round() as i64));
        layer.set_line_dash_pattern(LineDashPattern {
            dash_1: dashes.next().flatten(),
            gap_1: dashes.next().flatten(),
            ..LineDashPattern::default()
        });
        layer.set_outline_color(pdf_color(style.outline_color));
        layer.set_outline_thickness((style.outline_width * PT_PER_PX) as f32);
        layer.add_line(Line {
            points: calculate_points_for_circle(
                Pt(frame.scale() as f32),
                Pt(center.x as f32),
                Pt(center.y as f32),
            ),
            is_closed: true,
        });
        layer.set_line_dash_pattern(LineDashPattern::default());

        for &p in self.points() {
            disc(
                layer,
                frame.map(p),
                style.point_radius * PT_PER_PX,
                self.color(),
            );
        }
        disc(
            layer,
            center,
            style.center_radius * PT_PER_PX,
            style.center_color,
        );
    }
}

fn write_lines<'a>(
    layer: &PdfLayerReference,
    lines: impl Iterator<Item = &'a str>,
    font: &IndirectFontRef,
) {
    let lowest = PLOT_BOX.y1 + 2.0 * LINE_HEIGHT;
    let mut y = TITLE_TOP - 1.5 * LINE_HEIGHT;
    for line in lines {
        if y < lowest {
            layer.use_text("...", 11.0, Mm(LEFT as f32), Mm(y as f32), font);
            break;
        }
        if !line.is_empty() {
            layer.use_text(line, 11.0, Mm(LEFT as f32), Mm(y as f32), font);
        }
        y -= LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircleSpec;

    #[test]
    fn writes_a_pdf_file() {
        let spec = CircleSpec::new((1.0, 2.0), 5.0, 8).unwrap();
        let bytes = Report::new(&spec, Color::RED)
            .with_author("A. Student")
            .to_pdf(&PlotStyle::default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_reports_and_extreme_radii() {
        for (radius, count) in [(1e308, 500), (1e-310, 3)] {
            let spec = CircleSpec::new((0.0, 0.0), radius, count).unwrap();
            let bytes = Report::new(&spec, Color::BLUE)
                .to_pdf(&PlotStyle::default().with_axes(false))
                .unwrap();
            assert!(bytes.starts_with(b"%PDF"));
        }
    }

    #[test]
    fn plot_fits_the_box() {
        let spec = CircleSpec::new((4.0, -3.0), 2.0, 6).unwrap();
        let view = Rect::new(pt(PLOT_BOX.x0), pt(PLOT_BOX.y0), pt(PLOT_BOX.x1), pt(PLOT_BOX.y1));
        let frame = Frame::fit(&spec, 0.1, view, false);
        for p in spec.generate().iter().chain([&Point::ORIGIN]) {
            let q = frame.map(*p);
            assert!(q.x >= view.x0 && q.x <= view.x1, "{q:?}");
            assert!(q.y >= view.y0 && q.y <= view.y1, "{q:?}");
        }
        // Y-up on the page: a higher point maps higher.
        assert!(frame.map(Point::new(4.0, -1.0)).y > frame.map(Point::new(4.0, -5.0)).y);
    }
}
