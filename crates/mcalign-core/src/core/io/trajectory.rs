//! Diagnostic output of the RMSD trajectory.
//!
//! Nothing here influences the alignment itself; the trace can be dumped as CSV
//! for downstream analysis or rendered as an SVG line chart.

use plotters::prelude::*;
use plotters_svg::SVGBackend;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

const PLOT_SIZE: (u32, u32) = (800, 500);

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("Trajectory is empty, nothing to report")]
    Empty,
    #[error("Step size history has {found} entries, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render plot '{path}': {message}")]
    Plot { path: String, message: String },
}

#[derive(Debug, Serialize)]
struct TrajectoryRow {
    iteration: usize,
    rmsd: f64,
    step_size: f64,
}

/// Writes one CSV row per iteration: `iteration,rmsd,step_size`.
///
/// Iterations are numbered from 1. `step_sizes` must have one entry per
/// trajectory point.
pub fn write_csv(
    trajectory: &[f64],
    step_sizes: &[f64],
    writer: impl Write,
) -> Result<(), TrajectoryError> {
    if trajectory.is_empty() {
        return Err(TrajectoryError::Empty);
    }
    if step_sizes.len() != trajectory.len() {
        return Err(TrajectoryError::LengthMismatch {
            expected: trajectory.len(),
            found: step_sizes.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, (&rmsd, &step_size)) in trajectory.iter().zip(step_sizes).enumerate() {
        csv_writer.serialize(TrajectoryRow {
            iteration: i + 1,
            rmsd,
            step_size,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_to_path(
    trajectory: &[f64],
    step_sizes: &[f64],
    path: &Path,
) -> Result<(), TrajectoryError> {
    let file = std::fs::File::create(path)?;
    write_csv(trajectory, step_sizes, file)
}

/// Renders RMSD against iteration as an SVG line chart with point markers.
///
/// A `.png` extension is swapped for `.svg`; the path actually written is
/// returned.
pub fn render_svg(trajectory: &[f64], path: &Path) -> Result<std::path::PathBuf, TrajectoryError> {
    if trajectory.is_empty() {
        return Err(TrajectoryError::Empty);
    }

    let svg_path = if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    };
    draw_trajectory(trajectory, &svg_path)?;
    Ok(svg_path)
}

fn draw_trajectory(trajectory: &[f64], svg_path: &Path) -> Result<(), TrajectoryError> {
    let plot_err = |e: &dyn std::fmt::Display| TrajectoryError::Plot {
        path: svg_path.display().to_string(),
        message: e.to_string(),
    };

    let (min_rmsd, max_rmsd) = trajectory
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &r| {
            (min.min(r), max.max(r))
        });
    let pad = ((max_rmsd - min_rmsd) * 0.05).max(1e-3);
    let x_max = trajectory.len().max(2) - 1;

    let root = SVGBackend::new(svg_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("RMSD vs steps", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, (min_rmsd - pad).max(0.0)..max_rmsd + pad)
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_mesh()
        .x_desc("steps")
        .y_desc("RMSD [Å]")
        .draw()
        .map_err(|e| plot_err(&e))?;

    chart
        .draw_series(LineSeries::new(trajectory.iter().copied().enumerate(), &BLUE))
        .map_err(|e| plot_err(&e))?;
    chart
        .draw_series(
            trajectory
                .iter()
                .enumerate()
                .map(|(i, &r)| Circle::new((i, r), 2, BLUE.filled())),
        )
        .map_err(|e| plot_err(&e))?;

    root.present().map_err(|e| plot_err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_emits_header_and_one_row_per_iteration() {
        let mut buf = Vec::new();
        write_csv(&[1.5, 1.0, 0.05], &[2.0, 2.0, 1.6], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "iteration,rmsd,step_size");
        assert_eq!(lines[1], "1,1.5,2.0");
        assert_eq!(lines[3], "3,0.05,1.6");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn write_csv_rejects_empty_trajectory() {
        let result = write_csv(&[], &[], Vec::new());
        assert!(matches!(result, Err(TrajectoryError::Empty)));
    }

    #[test]
    fn write_csv_rejects_mismatched_step_history() {
        let result = write_csv(&[1.0, 0.5], &[2.0], Vec::new());
        assert!(matches!(
            result,
            Err(TrajectoryError::LengthMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn render_svg_writes_a_chart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rmsd.svg");

        let written = render_svg(&[3.2, 2.0, 2.0, 0.7, 0.09], &path).unwrap();

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn render_svg_accepts_single_point_and_swaps_png_extension() {
        let dir = tempdir().unwrap();
        let written = render_svg(&[0.5], &dir.path().join("rmsd.png")).unwrap();

        assert_eq!(written.extension().unwrap(), "svg");
        assert!(written.exists());
    }

    #[test]
    fn render_svg_rejects_empty_trajectory() {
        let dir = tempdir().unwrap();
        let result = render_svg(&[], &dir.path().join("rmsd.svg"));
        assert!(matches!(result, Err(TrajectoryError::Empty)));
    }
}
