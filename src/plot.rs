// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of generated points.

use alloc::string::String;
use core::fmt::{self, Write};

use smallvec::SmallVec;

use crate::svg::{Escaped, Num};
use crate::{Affine, Circle, CircleSpec, Color, Point, PointSet, Rect};

/// Collection of values representing lengths in a dash pattern.
pub type Dashes = SmallVec<[f64; 4]>;

/// Appearance of a [`Plot`].
///
/// Lengths are in output pixels, except `margin`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotStyle {
    /// Fill of the point markers.
    pub point_color: Color,
    /// Radius of the point markers.
    pub point_radius: f64,
    /// Stroke of the circle outline.
    pub outline_color: Color,
    /// Stroke width of the circle outline.
    pub outline_width: f64,
    /// Alternating dash and gap lengths of the circle outline; empty for a
    /// solid line.
    pub outline_dashes: Dashes,
    /// Fill of the center marker.
    pub center_color: Color,
    /// Radius of the center marker.
    pub center_radius: f64,
    /// Space around the circle, as a fraction of the larger extent of the
    /// drawing.
    pub margin: f64,
    /// Font size for labels and legend.
    pub font_size: f64,
    /// Draw the horizontal and vertical lines through the origin.
    pub show_axes: bool,
    /// Label the points `P1`, `P2`, ... in order.
    pub show_labels: bool,
    /// Draw a legend in the top right corner.
    pub show_legend: bool,
    /// Caption of the horizontal axis.
    pub x_label: String,
    /// Caption of the vertical axis.
    pub y_label: String,
    /// Legend text for the point markers.
    pub points_legend: String,
    /// Legend text for the center marker.
    pub center_legend: String,
}

impl Default for PlotStyle {
    fn default() -> PlotStyle {
        PlotStyle {
            point_color: Color::RED,
            point_radius: 5.0,
            outline_color: Color::GRAY,
            outline_width: 1.5,
            outline_dashes: SmallVec::from_slice(&[6.0, 4.0]),
            center_color: Color::BLUE,
            center_radius: 4.0,
            margin: 0.1,
            font_size: 12.0,
            show_axes: true,
            show_labels: true,
            show_legend: true,
            x_label: "X [m]".into(),
            y_label: "Y [m]".into(),
            points_legend: "Points on circle".into(),
            center_legend: "Center".into(),
        }
    }
}

impl PlotStyle {
    /// Builder method for setting the point marker color.
    pub fn with_point_color(mut self, color: Color) -> PlotStyle {
        self.point_color = color;
        self
    }

    /// Builder method for setting the outline dash pattern.
    pub fn with_dashes<P>(mut self, pattern: P) -> PlotStyle
    where
        P: IntoIterator,
        P::Item: Into<f64>,
    {
        self.outline_dashes.clear();
        self.outline_dashes
            .extend(pattern.into_iter().map(Into::into));
        self
    }

    /// Builder method for setting the margin around the circle.
    pub fn with_margin(mut self, margin: f64) -> PlotStyle {
        self.margin = margin;
        self
    }

    /// Builder method for toggling the `P1..Pn` labels.
    pub fn with_labels(mut self, show: bool) -> PlotStyle {
        self.show_labels = show;
        self
    }

    /// Builder method for toggling the legend.
    pub fn with_legend(mut self, show: bool) -> PlotStyle {
        self.show_legend = show;
        self
    }

    /// Builder method for toggling the axis lines.
    pub fn with_axes(mut self, show: bool) -> PlotStyle {
        self.show_axes = show;
        self
    }
}

/// Placement of a circle's drawing inside a view rectangle.
///
/// Data points are first made relative to the circle, `(p - center) /
/// radius`, so the unit circle sits at the local origin whatever the radius.
/// Only that local space is scaled into the view, which keeps every mapped
/// coordinate finite for any valid [`CircleSpec`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    center: Point,
    radius: f64,
    local: Rect,
    scale: f64,
    xf: Affine,
}

impl Frame {
    /// Fit the circle of `spec`, and the origin when it can be shown, into
    /// `view` with `margin` around it.
    pub(crate) fn fit(spec: &CircleSpec, margin: f64, view: Rect, y_down: bool) -> Frame {
        let (center, radius) = (spec.center(), spec.radius());
        let margin = if margin.is_finite() {
            margin.max(0.0)
        } else {
            0.0
        };
        let pad = |r: Rect| {
            let d = margin * r.width().max(r.height());
            r.inflate(d, d)
        };
        let unit = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let origin = (Point::ORIGIN - center) / radius;
        let local = [pad(unit.union_pt(origin.to_point())), pad(unit)]
            .into_iter()
            .find(|r| r.width().is_finite() && r.height().is_finite())
            .unwrap_or(unit);
        let scale = (view.width().max(1.0) / local.width())
            .min(view.height().max(1.0) / local.height());
        let flip = if y_down {
            Affine::FLIP_Y
        } else {
            Affine::IDENTITY
        };
        let xf = Affine::translate(view.center().to_vec2())
            * flip
            * Affine::scale(scale)
            * Affine::translate(-local.center().to_vec2());
        Frame {
            center,
            radius,
            local,
            scale,
            xf,
        }
    }

    /// A data point in units of the radius, relative to the center.
    pub(crate) fn to_local(&self, p: Point) -> Point {
        ((p - self.center) / self.radius).to_point()
    }

    /// A data point in view coordinates.
    pub(crate) fn map(&self, p: Point) -> Point {
        self.xf * self.to_local(p)
    }

    /// View units per radius.
    pub(crate) fn scale(&self) -> f64 {
        self.scale
    }

    /// The transform from local space to the view.
    pub(crate) fn local_transform(&self) -> Affine {
        self.xf
    }

    /// The local region that fills a view of `width` by `height`.
    pub(crate) fn visible(&self, width: f64, height: f64) -> Rect {
        let s = self.scale();
        let (hw, hh) = (0.5 * width / s, 0.5 * height / s);
        let mid = self.local.center();
        Rect::new(mid.x - hw, mid.y - hh, mid.x + hw, mid.y + hh)
    }
}

/// A scatter plot of the points generated for a [`CircleSpec`], with the
/// dashed circle outline and the center marked.
///
/// Data coordinates are Y-up; the renderer flips them into SVG's Y-down
/// space with an equal aspect ratio. The origin is kept in view as long as
/// it is within finite reach of the circle at the plot's scale.
#[derive(Debug)]
pub struct Plot<'a> {
    spec: &'a CircleSpec,
    points: &'a PointSet,
    style: PlotStyle,
}

impl<'a> Plot<'a> {
    /// A plot of `points`, which should have been generated from `spec`.
    pub fn new(spec: &'a CircleSpec, points: &'a PointSet) -> Plot<'a> {
        Plot {
            spec,
            points,
            style: PlotStyle::default(),
        }
    }

    /// Builder method for setting the style.
    pub fn with_style(mut self, style: PlotStyle) -> Plot<'a> {
        self.style = style;
        self
    }

    /// The current style.
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Where the data point `p` lands on a `width` by `height` canvas, in
    /// SVG pixel coordinates.
    ///
    /// ```
    /// use circle_points::{CircleSpec, Plot, PlotStyle, Point};
    ///
    /// let spec = CircleSpec::new((0.0, 0.0), 1e308, 4).unwrap();
    /// let points = spec.generate();
    /// let plot = Plot::new(&spec, &points).with_style(PlotStyle::default().with_margin(0.0));
    /// assert_eq!(plot.to_pixel(points[0], 100.0, 100.0), Point::new(100.0, 50.0));
    /// ```
    pub fn to_pixel(&self, p: Point, width: f64, height: f64) -> Point {
        self.frame(width.max(1.0), height.max(1.0)).map(p)
    }

    fn frame(&self, width: f64, height: f64) -> Frame {
        let view = Rect::new(0.0, 0.0, width, height);
        Frame::fit(self.spec, self.style.margin, view, true)
    }

    /// Render a standalone SVG document of `width` by `height` pixels.
    ///
    /// Sizes below one pixel are raised to one.
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut buffer = String::new();
        self.write_svg(&mut buffer, width, height)
            .expect("writing to a String never fails");
        buffer
    }

    /// Write the SVG document to the provided writer.
    pub fn write_svg<W: Write>(&self, w: &mut W, width: f64, height: f64) -> fmt::Result {
        let (width, height) = (width.max(1.0), height.max(1.0));
        let frame = self.frame(width, height);
        let style = &self.style;

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
            Num(width),
            Num(height)
        )?;
        writeln!(
            w,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            Color::WHITE
        )?;
        if style.show_axes {
            self.write_axes(w, &frame, width, height)?;
        }
        self.write_outline(w, &frame)?;
        self.write_points(w, &frame)?;
        if style.show_labels {
            self.write_labels(w, &frame)?;
        }
        let c = frame.map(self.spec.center());
        writeln!(
            w,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            Num(c.x),
            Num(c.y),
            Num(style.center_radius),
            style.center_color
        )?;
        self.write_axis_captions(w, width, height)?;
        if style.show_legend {
            self.write_legend(w, width)?;
        }
        writeln!(w, "</svg>")
    }

    fn write_axes<W: Write>(&self, w: &mut W, frame: &Frame, width: f64, height: f64) -> fmt::Result {
        // Span the whole canvas.
        let seen = frame.visible(width, height);
        let origin = frame.to_local(Point::ORIGIN);
        let xf = frame.local_transform();
        writeln!(
            w,
            r#"<g stroke="{}" stroke-width="0.5">"#,
            Color::BLACK
        )?;
        for (a, b) in [
            (Point::new(seen.x0, origin.y), Point::new(seen.x1, origin.y)),
            (Point::new(origin.x, seen.y0), Point::new(origin.x, seen.y1)),
        ] {
            let (a, b) = (xf * a, xf * b);
            // An axis too far from the circle has no finite position.
            if !(a.is_finite() && b.is_finite()) {
                continue;
            }
            writeln!(
                w,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                Num(a.x),
                Num(a.y),
                Num(b.x),
                Num(b.y)
            )?;
        }
        writeln!(w, "</g>")
    }

    fn write_outline<W: Write>(&self, w: &mut W, frame: &Frame) -> fmt::Result {
        let style = &self.style;
        // A tenth of a pixel, in local units.
        let tolerance = 0.1 / frame.scale();
        let path = frame.local_transform() * Circle::new(Point::ORIGIN, 1.0).to_path(tolerance);
        write!(w, r#"<path d=""#)?;
        path.write_svg(w)?;
        write!(
            w,
            r#"" fill="none" stroke="{}" stroke-width="{}""#,
            style.outline_color,
            Num(style.outline_width)
        )?;
        if !style.outline_dashes.is_empty() {
            write!(w, r#" stroke-dasharray=""#)?;
            for (i, d) in style.outline_dashes.iter().enumerate() {
                if i > 0 {
                    w.write_char(' ')?;
                }
                write!(w, "{}", Num(*d))?;
            }
            w.write_char('"')?;
        }
        writeln!(w, "/>")
    }

    fn write_points<W: Write>(&self, w: &mut W, frame: &Frame) -> fmt::Result {
        writeln!(w, r#"<g fill="{}">"#, self.style.point_color)?;
        for &p in self.points {
            let p = frame.map(p);
            writeln!(
                w,
                r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                Num(p.x),
                Num(p.y),
                Num(self.style.point_radius)
            )?;
        }
        writeln!(w, "</g>")
    }

    fn write_labels<W: Write>(&self, w: &mut W, frame: &Frame) -> fmt::Result {
        let style = &self.style;
        // Push each label outward past its marker.
        let offset = (style.point_radius + 0.8 * style.font_size) / frame.scale();
        let xf = frame.local_transform();
        writeln!(
            w,
            r#"<g font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="middle">"#,
            Num(style.font_size)
        )?;
        for (i, &p) in self.points.iter().enumerate() {
            let dir = frame.to_local(p).to_vec2();
            let at = xf * (dir * (1.0 + offset)).to_point();
            writeln!(
                w,
                r#"<text x="{}" y="{}">P{}</text>"#,
                Num(at.x),
                Num(at.y),
                i + 1
            )?;
        }
        writeln!(w, "</g>")
    }

    fn write_axis_captions<W: Write>(&self, w: &mut W, width: f64, height: f64) -> fmt::Result {
        let style = &self.style;
        let fs = style.font_size;
        writeln!(
            w,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
            Num(0.5 * width),
            Num(height - 0.5 * fs),
            Num(fs),
            Escaped(&style.x_label)
        )?;
        writeln!(
            w,
            r#"<text transform="translate({},{}) rotate(-90)" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
            Num(fs),
            Num(0.5 * height),
            Num(fs),
            Escaped(&style.y_label)
        )
    }

    fn write_legend<W: Write>(&self, w: &mut W, width: f64) -> fmt::Result {
        let style = &self.style;
        let fs = style.font_size;
        let line = 1.6 * fs;
        let longest = style
            .points_legend
            .chars()
            .count()
            .max(style.center_legend.chars().count());
        // Rough text width; SVG has no text metrics without a font.
        let box_width = 0.6 * fs * longest as f64 + 2.5 * fs;
        let x0 = width - box_width - 0.5 * fs;
        let y0 = 0.5 * fs;
        writeln!(
            w,
            r#"<g font-family="sans-serif" font-size="{}" dominant-baseline="middle">"#,
            Num(fs)
        )?;
        writeln!(
            w,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="0.5"/>"#,
            Num(x0),
            Num(y0),
            Num(box_width),
            Num(2.0 * line),
            Color::WHITE,
            Color::GRAY
        )?;
        let entries = [
            (style.point_color, style.point_radius, &style.points_legend),
            (style.center_color, style.center_radius, &style.center_legend),
        ];
        for (i, (color, r, text)) in entries.into_iter().enumerate() {
            let y = y0 + line * (i as f64 + 0.5);
            writeln!(
                w,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                Num(x0 + fs),
                Num(y),
                Num(r),
                color
            )?;
            writeln!(
                w,
                r#"<text x="{}" y="{}">{}</text>"#,
                Num(x0 + 2.0 * fs),
                Num(y),
                Escaped(text)
            )?;
        }
        writeln!(w, "</g>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (CircleSpec, PointSet) {
        let spec = CircleSpec::new((0.0, 0.0), 5.0, 4).unwrap();
        let points = spec.generate();
        (spec, points)
    }

    #[test]
    fn one_marker_per_point() {
        let spec = CircleSpec::new((3.0, -2.0), 2.0, 7).unwrap();
        let points = spec.generate();
        let svg = Plot::new(&spec, &points).to_svg(300.0, 200.0);
        // Points, center, and the two legend swatches.
        assert_eq!(svg.matches("<circle").count(), 7 + 1 + 2);
        assert!(svg.contains("<text x=\""));
        assert!(svg.contains(">P7</text>"));
        assert!(!svg.contains(">P8</text>"));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn points_map_to_pixels() {
        let (spec, points) = square();
        let style = PlotStyle::default()
            .with_margin(0.0)
            .with_labels(false)
            .with_legend(false);
        let svg = Plot::new(&spec, &points)
            .with_style(style)
            .to_svg(100.0, 100.0);
        assert!(svg.contains(r#"<circle cx="100" cy="50" r="5"/>"#), "{svg}");
        assert!(svg.contains(r#"<circle cx="50" cy="0" r="5"/>"#), "{svg}");
        assert!(svg.contains(r#"<circle cx="0" cy="50" r="5"/>"#), "{svg}");
        assert!(svg.contains(r#"<circle cx="50" cy="100" r="5"/>"#), "{svg}");
        // Center marker.
        assert!(svg.contains(r##"<circle cx="50" cy="50" r="4" fill="#0000ff"/>"##));
    }

    #[test]
    fn outline_is_dashed_gray() {
        let (spec, points) = square();
        let svg = Plot::new(&spec, &points).to_svg(400.0, 400.0);
        assert!(svg.contains(r##"fill="none" stroke="#808080" stroke-width="1.5" stroke-dasharray="6 4"/>"##));

        let solid = PlotStyle::default().with_dashes(core::iter::empty::<f64>());
        let svg = Plot::new(&spec, &points).with_style(solid).to_svg(400.0, 400.0);
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn origin_stays_in_view() {
        let spec = CircleSpec::new((100.0, 100.0), 1.0, 3).unwrap();
        let points = spec.generate();
        let plot = Plot::new(&spec, &points);
        for p in [Point::ORIGIN, Point::new(101.0, 101.0)] {
            let px = plot.to_pixel(p, 640.0, 480.0);
            assert!(px.x >= 0.0 && px.x <= 640.0, "{p:?} -> {px:?}");
            assert!(px.y >= 0.0 && px.y <= 480.0, "{p:?} -> {px:?}");
        }
    }

    fn unadorned(spec: &CircleSpec, points: &PointSet) -> String {
        let style = PlotStyle::default()
            .with_margin(0.0)
            .with_labels(false)
            .with_legend(false);
        Plot::new(spec, points).with_style(style).to_svg(100.0, 100.0)
    }

    #[test]
    fn extreme_radii_render_finite() {
        for radius in [1e308, 1e-310, f64::MIN_POSITIVE] {
            let spec = CircleSpec::new((0.0, 0.0), radius, 4).unwrap();
            let points = spec.generate();
            let svg = unadorned(&spec, &points);
            assert!(!svg.contains("NaN") && !svg.contains("inf"), "{radius}: {svg}");
            assert!(svg.contains(r#"<circle cx="100" cy="50" r="5"/>"#), "{svg}");
            assert!(svg.contains(r#"<circle cx="50" cy="100" r="5"/>"#), "{svg}");
            // The outline keeps its curves.
            assert!(svg.matches(" C").count() >= 4, "{svg}");
        }
    }

    #[test]
    fn distant_origin_keeps_labels_finite() {
        // The origin is 1e200 radii away: in view, but at a tiny scale.
        let spec = CircleSpec::new((1.0, 0.0), 1e-200, 4).unwrap();
        let points = spec.generate();
        let svg = Plot::new(&spec, &points).to_svg(200.0, 200.0);
        assert!(!svg.contains("NaN") && !svg.contains("inf"), "{svg}");
        assert!(svg.contains(">P4</text>"));
    }

    #[test]
    fn unreachable_origin_is_left_out() {
        // The origin is 1e310 radii away, beyond any finite scale.
        let spec = CircleSpec::new((1.0, 0.0), 1e-310, 4).unwrap();
        let points = spec.generate();
        let svg = Plot::new(&spec, &points).to_svg(200.0, 200.0);
        assert!(!svg.contains("NaN") && !svg.contains("inf"), "{svg}");
        // Only the horizontal axis, through the center, is drawn.
        assert_eq!(svg.matches("<line ").count(), 1);
        assert!(svg.contains(r##"<circle cx="100" cy="100" r="4" fill="#0000ff"/>"##));
    }

    #[test]
    fn point_color_and_escaping() {
        let (spec, points) = square();
        let mut style = PlotStyle::default().with_point_color(Color::rgb8(0x12, 0x34, 0x56));
        style.x_label = "x < 1 & y".into();
        let svg = Plot::new(&spec, &points).with_style(style).to_svg(200.0, 200.0);
        assert!(svg.contains(r##"<g fill="#123456">"##));
        assert!(svg.contains(">x &lt; 1 &amp; y</text>"));
    }

    #[test]
    fn axes_toggle() {
        let (spec, points) = square();
        let with = Plot::new(&spec, &points).to_svg(200.0, 200.0);
        assert_eq!(with.matches("<line ").count(), 2);
        let without = Plot::new(&spec, &points)
            .with_style(PlotStyle::default().with_axes(false))
            .to_svg(200.0, 200.0);
        assert_eq!(without.matches("<line ").count(), 0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let (spec, points) = square();
        let a = Plot::new(&spec, &points).to_svg(320.0, 240.0);
        let b = Plot::new(&spec, &points).to_svg(320.0, 240.0);
        assert_eq!(a, b);
    }
}
