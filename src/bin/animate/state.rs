use kinematics_rust::config::Config;
use kinematics_rust::core::kinematics::{KinematicInputs, solve_kinematics_with};
use kinematics_rust::core::playback::{
    Frame, KinematicPlayback, ProjectilePlayback, canvas_scale,
};
use kinematics_rust::core::projectile::{LaunchInputs, solve_projectile};
use kinematics_rust::core::readiness::{can_calculate_projectile, can_start_kinematic_simulation};
use kinematics_rust::core::report::Report;
use kinematics_rust::error::ProjectileError;
use tracing::{debug, info};

use crate::constants::{MAX_SIM_TIME_S, MAX_SPEED, MIN_SPEED, SPEED_STEP};

const KINEMATIC_REFUSAL: &str = "Please enter sufficient values to start the kinematic simulation. Generally, Initial Velocity and at least one of Acceleration, Time, or Displacement are needed.";

pub(crate) enum Mode {
    Motion(KinematicInputs),
    /// `None` when a launch value was missing on the command line.
    Projectile(Option<LaunchInputs>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Subject {
    Motion(KinematicPlayback),
    Flight(ProjectilePlayback),
}

impl Subject {
    fn sample(&self, elapsed_s: f64) -> Frame {
        match self {
            Subject::Motion(playback) => {
                let mut frame = playback.sample(elapsed_s);
                frame.finished |= elapsed_s >= MAX_SIM_TIME_S;
                frame
            }
            Subject::Flight(playback) => playback.sample(elapsed_s),
        }
    }

    fn preview(&self, samples: usize) -> Vec<(f64, f64)> {
        match self {
            Subject::Motion(playback) => match playback.total_displacement_m {
                Some(d) => vec![(0.0, 0.0), (d, 0.0)],
                None => Vec::new(),
            },
            Subject::Flight(playback) => playback.solution.sample_trajectory(samples),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WorldWindow {
    pub(crate) min_x: f64,
    pub(crate) span_x: f64,
    pub(crate) span_y: f64,
}

pub(crate) struct Viewer {
    pub(crate) title: &'static str,
    pub(crate) subject: Option<Subject>,
    pub(crate) refusal: Option<String>,
    pub(crate) report: Report,
    pub(crate) preview: Vec<(f64, f64)>,
    pub(crate) running: bool,
    pub(crate) elapsed_s: f64,
    pub(crate) speed: f64,
    pub(crate) frame: Option<Frame>,
    pub(crate) trail: Vec<(f64, f64)>,
    pub(crate) status_line: String,
}

impl Viewer {
    pub(crate) fn new(mode: &Mode, config: &Config) -> Self {
        let (title, subject, refusal, report) = match mode {
            Mode::Motion(inputs) => {
                let solution = solve_kinematics_with(inputs, config.max_passes);
                let report = Report::kinematics(&solution, config.decimals);
                let subject = if can_start_kinematic_simulation(inputs) {
                    KinematicPlayback::from_solution(&solution).map(Subject::Motion)
                } else {
                    None
                };
                let refusal = subject.is_none().then(|| KINEMATIC_REFUSAL.to_string());
                ("Straight-line motion", subject, refusal, report)
            }
            Mode::Projectile(launch) => {
                let result = match launch {
                    Some(inputs) if can_calculate_projectile(inputs) => solve_projectile(inputs),
                    _ => Err(ProjectileError::InvalidInput),
                };
                let report = Report::projectile(&result, config.decimals);
                let refusal = result.as_ref().err().map(ToString::to_string);
                let subject = result.ok().map(|solution| {
                    Subject::Flight(ProjectilePlayback::from_solution(
                        &solution,
                        config.animation_target_secs,
                    ))
                });
                ("Projectile motion", subject, refusal, report)
            }
        };

        let preview = subject
            .map(|s| s.preview(config.sample_count))
            .unwrap_or_default();

        Self {
            title,
            subject,
            refusal,
            report,
            preview,
            running: false,
            elapsed_s: 0.0,
            speed: 1.0,
            frame: None,
            trail: Vec::new(),
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn start(&mut self) -> bool {
        if self.subject.is_none() {
            self.status_line = self
                .refusal
                .clone()
                .unwrap_or_else(|| KINEMATIC_REFUSAL.to_string());
            info!(reason = %self.status_line, "start refused");
            return false;
        }
        self.elapsed_s = 0.0;
        self.frame = None;
        self.trail.clear();
        self.running = true;
        self.status_line = "Running".to_string();
        debug!(speed = self.speed, "playback started");
        true
    }

    pub(crate) fn reset(&mut self) {
        self.running = false;
        self.elapsed_s = 0.0;
        self.frame = None;
        self.trail.clear();
        self.status_line = "Reset".to_string();
    }

    pub(crate) fn adjust_speed(&mut self, steps: f64) {
        self.speed = (self.speed + steps * SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
        self.status_line = format!("Speed x{:.2}", self.speed);
    }

    pub(crate) fn advance(&mut self, wall_dt_s: f64) {
        let Some(subject) = self.subject.filter(|_| self.running) else {
            return;
        };
        self.elapsed_s += wall_dt_s * self.speed;
        let frame = subject.sample(self.elapsed_s);
        self.trail.push((frame.x, frame.y));
        self.frame = Some(frame);

        if frame.finished {
            self.running = false;
            self.status_line = format!("Finished at t = {:.2} s", frame.time_s);
            debug!(x = frame.x, time_s = frame.time_s, "playback finished");
        }
    }

    /// Metres visible in a plot of `width_px` by `height_px`, one scale for both axes.
    pub(crate) fn world_window(&self, width_px: f64, height_px: f64) -> WorldWindow {
        let (min_x, range_m, peak_m) = match self.subject {
            Some(Subject::Flight(playback)) => {
                (0.0, playback.solution.range_m, playback.solution.peak_height_m)
            }
            _ => {
                let (lo, hi) = self
                    .trail
                    .iter()
                    .map(|p| p.0)
                    .chain(self.preview.iter().map(|p| p.0))
                    .fold((0.0f64, 0.0f64), |(lo, hi), x| (lo.min(x), hi.max(x)));
                (lo, hi - lo, 0.0)
            }
        };
        let scale = canvas_scale(range_m, peak_m, width_px, height_px);
        WorldWindow {
            min_x,
            span_x: width_px / scale,
            span_y: height_px / scale,
        }
    }
}
