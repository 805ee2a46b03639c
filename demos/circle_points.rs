// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print an HTML page with the plot and report for points on a circle.
//!
//! Usage: `cargo run --example circle_points -- [x y radius count [color]]`
//!
//! The defaults are a circle of radius 5 around the origin with 8 red points.

use std::process::ExitCode;

use circle_points::{CircleSpec, Color, Plot, PlotStyle, Report};

fn arg(args: &[String], i: usize, default: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| default.to_owned())
}

fn number(args: &[String], i: usize, default: &str) -> Result<f64, String> {
    let text = arg(args, i, default);
    text.parse()
        .map_err(|_| format!("argument {}: \"{text}\" is not a number", i + 1))
}

fn parse_args(args: &[String]) -> Result<(CircleSpec, Color), String> {
    let x = number(args, 0, "0")?;
    let y = number(args, 1, "0")?;
    let radius = number(args, 2, "5")?;
    let count_text = arg(args, 3, "8");
    let count: i64 = count_text
        .parse()
        .map_err(|_| format!("argument 4: \"{count_text}\" is not an integer"))?;
    let color: Color = arg(args, 4, "#ff0000")
        .parse()
        .map_err(|e| format!("argument 5: {e}"))?;
    let spec = CircleSpec::new((x, y), radius, count).map_err(|e| e.to_string())?;
    Ok((spec, color))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (spec, color) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let points = spec.generate();
    let style = PlotStyle::default().with_point_color(color);
    let svg = Plot::new(&spec, &points)
        .with_style(style)
        .to_svg(640.0, 640.0);
    let report = Report::new(&spec, color);

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    print!("{svg}");
    println!("<pre>");
    print!("{report}");
    println!("</pre>");
    println!("</body>");
    println!("</html>");
    ExitCode::SUCCESS
}
