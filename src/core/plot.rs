use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::core::playback::KinematicPlayback;
use crate::core::projectile::ProjectileSolution;
use crate::core::window::{DISTANCE_TO_HEIGHT_RATIO, fixed_ratio_axis_window};
use crate::error::PlotError;

pub const CHART_SIZE: (u32, u32) = (1280, 720);

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub points: Vec<(f64, f64)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ChartData {
    pub fn projectile(solution: &ProjectileSolution, samples: usize) -> Self {
        let points = solution.sample_trajectory(samples);
        let (max_x, max_y) = fixed_ratio_axis_window(
            solution.range_m,
            solution.peak_height_m,
            DISTANCE_TO_HEIGHT_RATIO,
        );
        Self {
            title: format!(
                "Projectile: {:.1} m/s at {:.1} deg from {:.1} m",
                solution.inputs.speed_mps, solution.inputs.angle_deg, solution.inputs.height_m
            ),
            x_desc: "Distance (m)",
            y_desc: "Height (m)",
            points,
            x_range: (0.0, max_x),
            y_range: (0.0, max_y),
        }
    }

    pub fn kinematics(playback: &KinematicPlayback, samples: usize) -> Result<Self, PlotError> {
        let total = playback
            .total_time_s
            .filter(|t| *t > 0.0)
            .ok_or(PlotError::Empty("total time is unknown or not positive"))?;

        let sample_count = samples.max(2);
        let points: Vec<(f64, f64)> = (0..=sample_count)
            .map(|i| {
                let t = i as f64 * total / sample_count as f64;
                (t, playback.displacement_at(t))
            })
            .collect();

        let (lo, hi) = points
            .iter()
            .fold((0.0f64, 0.0f64), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));
        let pad = ((hi - lo) * 0.1).max(1.0);

        Ok(Self {
            title: format!(
                "Kinematics: v0 = {:.2} m/s, a = {:.2} m/s^2",
                playback.v0, playback.a
            ),
            x_desc: "Time (s)",
            y_desc: "Displacement (m)",
            points,
            x_range: (0.0, total * 1.05),
            y_range: (lo - pad, hi + pad),
        })
    }
}

pub fn default_plot_path(kind: &str) -> PathBuf {
    PathBuf::from(format!("{kind}-{}.png", Local::now().format("%Y%m%d-%H%M%S")))
}

pub fn render_chart(chart: &ChartData, path: &Path) -> Result<(), PlotError> {
    if chart.points.len() < 2 {
        return Err(PlotError::Empty("fewer than two points"));
    }

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        draw(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), chart)?;
    } else {
        draw(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), chart)?;
    }

    info!(path = %path.display(), points = chart.points.len(), "wrote chart");
    Ok(())
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, chart: &ChartData) -> Result<(), PlotError> {
    let draw_err = |e: DrawingAreaErrorKind<DB::ErrorType>| PlotError::Draw(e.to_string());

    root.fill(&WHITE).map_err(draw_err)?;
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 26))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(
            chart.x_range.0..chart.x_range.1,
            chart.y_range.0..chart.y_range.1,
        )
        .map_err(draw_err)?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .light_line_style(&RGBColor(227, 231, 236))
        .draw()
        .map_err(draw_err)?;

    ctx.draw_series(LineSeries::new(
        chart.points.iter().copied(),
        RGBColor(54, 123, 245).stroke_width(3),
    ))
    .map_err(draw_err)?;

    if let Some(&(x, y)) = chart.points.last() {
        ctx.draw_series(std::iter::once(Circle::new((x, y), 6, RED.filled())))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}
