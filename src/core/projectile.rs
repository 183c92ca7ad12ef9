use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::quadratic::{quadratic_roots, smallest_root_where};
use crate::error::ProjectileError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    /// Magnitude only; gravity always pulls toward negative y.
    pub gravity_mps2: f64,
    pub height_m: f64,
    pub angle_deg: f64,
}

impl LaunchInputs {
    pub fn validate(&self) -> Result<(), ProjectileError> {
        let all_finite = [
            self.speed_mps,
            self.gravity_mps2,
            self.height_m,
            self.angle_deg,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !all_finite
            || self.speed_mps < 0.0
            || self.gravity_mps2 <= 0.0
            || self.height_m < 0.0
            || !(0.0..=90.0).contains(&self.angle_deg)
        {
            return Err(ProjectileError::InvalidInput);
        }
        Ok(())
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        let vx = self.speed_mps * theta.cos();
        let vy = self.speed_mps * theta.sin();
        (vx, vy)
    }

    pub fn effective_gravity(&self) -> f64 {
        -self.gravity_mps2
    }

    pub fn trajectory_at_time(&self, time_s: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        let x = vx * time_s;
        let y = self.height_m + (vy * time_s) + (0.5 * self.effective_gravity() * time_s * time_s);
        (x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectileSolution {
    pub inputs: LaunchInputs,
    pub v0x: f64,
    pub v0y: f64,
    pub acceleration: f64,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub impact_vy: f64,
    pub impact_speed: f64,
    pub time_to_peak_s: f64,
    pub peak_height_m: f64,
}

impl ProjectileSolution {
    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        self.inputs.trajectory_at_time(time_s)
    }

    pub fn sample_trajectory(&self, samples: usize) -> Vec<(f64, f64)> {
        let sample_count = samples.max(2);
        (0..=sample_count)
            .map(|i| {
                let t = (i as f64 * self.flight_time_s) / sample_count as f64;
                self.position_at(t)
            })
            .collect()
    }

    pub fn complementary(&self) -> Option<Result<ProjectileSolution, ProjectileError>> {
        let angle_deg = 90.0 - self.inputs.angle_deg;
        (angle_deg > 0.0).then(|| {
            solve_projectile(&LaunchInputs {
                angle_deg,
                ..self.inputs
            })
        })
    }
}

/// Flight time is the smallest strictly positive root of
/// `½·g·t² + v0y·t + h0 = 0` with signed `g`.
pub fn solve_projectile(inputs: &LaunchInputs) -> Result<ProjectileSolution, ProjectileError> {
    inputs.validate()?;

    let g_eff = inputs.effective_gravity();
    let (v0x, v0y) = inputs.velocity_components();

    let roots = quadratic_roots(0.5 * g_eff, v0y, inputs.height_m);
    let flight_time_s = smallest_root_where(&roots, |t| t > 0.0 && t.is_finite())
        .ok_or(ProjectileError::NoFlightTime)?;
    debug!(?roots, flight_time_s, "selected flight time");

    let range_m = v0x * flight_time_s;
    let impact_vy = v0y + g_eff * flight_time_s;
    let impact_speed = (impact_vy * impact_vy + v0x * v0x).sqrt();
    if !(range_m.is_finite() && impact_speed.is_finite()) {
        return Err(ProjectileError::NoFlightTime);
    }

    let (time_to_peak_s, peak_height_m) = if v0y > 0.0 {
        let g = inputs.gravity_mps2;
        (v0y / g, inputs.height_m + (v0y * v0y) / (2.0 * g))
    } else {
        (0.0, inputs.height_m)
    };

    Ok(ProjectileSolution {
        inputs: *inputs,
        v0x,
        v0y,
        acceleration: g_eff,
        flight_time_s,
        range_m,
        impact_vy,
        impact_speed,
        time_to_peak_s,
        peak_height_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn launch(speed_mps: f64, gravity_mps2: f64, height_m: f64, angle_deg: f64) -> LaunchInputs {
        LaunchInputs {
            speed_mps,
            gravity_mps2,
            height_m,
            angle_deg,
        }
    }

    #[test]
    fn computes_known_range_for_flat_ground() {
        let solution = solve_projectile(&launch(10.0, 9.8, 0.0, 45.0)).expect("should solve");

        assert_close(solution.flight_time_s, 1.4431, 0.001);
        assert_close(solution.range_m, 10.2041, 0.001);
        assert_close(solution.acceleration, -9.8, 1e-12);
    }

    #[test]
    fn zero_velocity_drops_straight_down() {
        let solution = solve_projectile(&launch(0.0, 9.8, 2.0, 10.0)).expect("should solve");

        assert_close(solution.flight_time_s, 0.6389, 0.001);
        assert_close(solution.range_m, 0.0, 0.0001);
        assert_close(solution.peak_height_m, 2.0, 1e-12);
    }

    #[test]
    fn flat_launch_from_ground_has_no_flight_time() {
        let err = solve_projectile(&launch(15.0, 9.81, 0.0, 0.0)).expect_err("should fail");
        assert_eq!(err, ProjectileError::NoFlightTime);
    }

    #[test]
    fn overflowing_launch_has_no_flight_time() {
        let err = solve_projectile(&launch(1e200, 9.81, 0.0, 45.0)).expect_err("should fail");
        assert_eq!(err, ProjectileError::NoFlightTime);
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        for bad in [
            launch(-1.0, 9.81, 0.0, 45.0),
            launch(10.0, 0.0, 0.0, 45.0),
            launch(10.0, 9.81, -1.0, 45.0),
            launch(10.0, 9.81, 0.0, 90.5),
            launch(10.0, 9.81, 0.0, -0.1),
            launch(f64::NAN, 9.81, 0.0, 45.0),
        ] {
            assert_eq!(solve_projectile(&bad), Err(ProjectileError::InvalidInput));
        }
    }

    #[test]
    fn impact_speed_matches_energy_conservation() {
        let inputs = launch(12.0, 9.81, 30.0, 25.0);
        let solution = solve_projectile(&inputs).expect("should solve");
        let expected = (12.0f64.powi(2) + 2.0 * 9.81 * 30.0).sqrt();
        assert_close(solution.impact_speed, expected, 1e-9);
        assert!(solution.impact_vy < 0.0);
    }

    #[test]
    fn trajectory_lands_at_range() {
        let solution = solve_projectile(&launch(20.0, 9.81, 5.0, 60.0)).expect("should solve");
        let points = solution.sample_trajectory(50);
        assert_eq!(points.len(), 51);
        let (x, y) = points[points.len() - 1];
        assert_close(x, solution.range_m, 1e-9);
        assert_close(y, 0.0, 1e-9);
        let highest = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
        assert!(highest <= solution.peak_height_m + 1e-9);
    }

    #[test]
    fn complementary_angle_shares_range_on_flat_ground() {
        let solution = solve_projectile(&launch(20.0, 9.81, 0.0, 30.0)).expect("should solve");
        let other = solution
            .complementary()
            .expect("60 degrees is positive")
            .expect("should solve");
        assert_close(other.inputs.angle_deg, 60.0, 1e-12);
        assert_close(other.range_m, solution.range_m, 1e-9);

        let vertical = solve_projectile(&launch(20.0, 9.81, 0.0, 90.0)).expect("should solve");
        assert!(vertical.complementary().is_none());
    }
}
