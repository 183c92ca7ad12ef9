use crate::core::kinematics::KinematicSolution;
use crate::core::projectile::ProjectileSolution;

pub const STOP_TOLERANCE: f64 = 0.01;

pub const DEFAULT_TARGET_SECS: f64 = 4.0;
const MIN_TIME_SCALE: f64 = 0.1;
const MAX_TIME_SCALE: f64 = 10.0;
const VIEW_PADDING: f64 = 1.1;
const MIN_CANVAS_SCALE: f64 = 1.0;
const MAX_CANVAS_SCALE: f64 = 100.0;
const MIN_VIEW_HEIGHT_M: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    /// Simulated seconds since launch.
    pub time_s: f64,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicPlayback {
    pub v0: f64,
    pub a: f64,
    pub total_time_s: Option<f64>,
    pub total_displacement_m: Option<f64>,
}

impl KinematicPlayback {
    pub fn from_solution(solution: &KinematicSolution) -> Option<Self> {
        let state = solution.state;
        Some(Self {
            v0: state.v0?,
            a: state.a?,
            total_time_s: state.t,
            total_displacement_m: state.d,
        })
    }

    pub fn displacement_at(&self, time_s: f64) -> f64 {
        self.v0 * time_s + 0.5 * self.a * time_s * time_s
    }

    pub fn sample(&self, elapsed_s: f64) -> Frame {
        let x = self.displacement_at(elapsed_s);

        let time_done = self
            .total_time_s
            .is_some_and(|t| t != 0.0 && elapsed_s >= t - STOP_TOLERANCE);
        let distance_done = self.total_displacement_m.is_some_and(|d| {
            d != 0.0 && x.abs() >= d.abs() - STOP_TOLERANCE && x.signum() == d.signum()
        });

        if time_done || distance_done {
            return Frame {
                x: self.total_displacement_m.unwrap_or(x),
                y: 0.0,
                time_s: elapsed_s,
                finished: true,
            };
        }

        Frame {
            x,
            y: 0.0,
            time_s: elapsed_s,
            finished: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectilePlayback {
    pub solution: ProjectileSolution,
    pub time_scale: f64,
}

impl ProjectilePlayback {
    pub fn from_solution(solution: &ProjectileSolution, target_secs: f64) -> Self {
        Self {
            solution: *solution,
            time_scale: time_scale_for(solution.flight_time_s, target_secs),
        }
    }

    pub fn sample(&self, wall_elapsed_s: f64) -> Frame {
        let time_s = wall_elapsed_s * self.time_scale;
        let (x, y) = self.solution.position_at(time_s);

        if time_s >= self.solution.flight_time_s - STOP_TOLERANCE || y < -STOP_TOLERANCE {
            return Frame {
                x: self.solution.range_m,
                y: 0.0,
                time_s: self.solution.flight_time_s,
                finished: true,
            };
        }

        Frame {
            x,
            y,
            time_s,
            finished: false,
        }
    }
}

pub fn time_scale_for(flight_time_s: f64, target_secs: f64) -> f64 {
    let scale = if flight_time_s > 0.0 {
        target_secs / flight_time_s
    } else {
        1.0
    };
    scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
}

pub fn canvas_scale(range_m: f64, peak_height_m: f64, width_px: f64, height_px: f64) -> f64 {
    let peak = peak_height_m.max(MIN_VIEW_HEIGHT_M);
    let scale_x = width_px / (range_m * VIEW_PADDING);
    let scale_y = height_px / (peak * VIEW_PADDING);
    scale_x.min(scale_y).clamp(MIN_CANVAS_SCALE, MAX_CANVAS_SCALE)
}

pub fn tick_step(extent_m: f64) -> f64 {
    match extent_m {
        e if e > 500.0 => 100.0,
        e if e > 100.0 => 50.0,
        e if e > 50.0 => 20.0,
        e if e > 20.0 => 10.0,
        e if e > 5.0 => 5.0,
        _ => 1.0,
    }
}

/// Multiples of `tick_step(extent_m)` inside `[start_m, start_m + extent_m]`.
pub fn grid_ticks(start_m: f64, extent_m: f64) -> Vec<f64> {
    if !(start_m.is_finite() && extent_m.is_finite() && extent_m > 0.0) {
        return Vec::new();
    }
    let step = tick_step(extent_m);
    let first = (start_m / step).ceil() * step;
    let count = ((start_m + extent_m - first) / step + 1e-9).floor();
    if count < 0.0 {
        return Vec::new();
    }
    (0..=count as usize)
        .map(|i| first + i as f64 * step)
        .collect()
}
