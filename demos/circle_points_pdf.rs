// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Write a PDF report with the plot of points on a circle.
//!
//! Usage: `cargo run --example circle_points_pdf --features pdf -- [out.pdf [author]]`
//!
//! The circle is the same default as the `circle_points` demo: radius 5
//! around the origin with 8 red points.

use std::process::ExitCode;

use circle_points::{CircleSpec, Color, PlotStyle, Report};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "report.pdf".to_owned());
    let author = args.next();

    let spec = match CircleSpec::new((0.0, 0.0), 5.0, 8) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut report = Report::new(&spec, Color::RED).with_title("Report: points on a circle");
    if let Some(author) = author {
        report = report.with_author(author);
    }

    let bytes = match report.to_pdf(&PlotStyle::default()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = std::fs::write(&path, bytes) {
        eprintln!("error: cannot write {path}: {e}");
        return ExitCode::FAILURE;
    }
    println!("wrote {path}");
    ExitCode::SUCCESS
}
