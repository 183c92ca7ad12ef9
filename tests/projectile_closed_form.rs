use approx::{assert_abs_diff_eq, assert_relative_eq};
use kinematics_rust::core::projectile::{LaunchInputs, solve_projectile};
use kinematics_rust::core::report::Report;
use kinematics_rust::error::ProjectileError;
use proptest::prelude::*;

fn ground_launch(speed_mps: f64, gravity_mps2: f64, angle_deg: f64) -> LaunchInputs {
    LaunchInputs {
        speed_mps,
        gravity_mps2,
        height_m: 0.0,
        angle_deg,
    }
}

proptest! {
    #[test]
    fn level_ground_matches_textbook_formulas(
        speed in 1.0f64..150.0,
        gravity in 0.5f64..25.0,
        angle in 1.0f64..89.0,
    ) {
        let solution = solve_projectile(&ground_launch(speed, gravity, angle))
            .expect("level launch above horizontal lands");
        let theta = angle.to_radians();

        let flight = 2.0 * speed * theta.sin() / gravity;
        let range = speed * speed * (2.0 * theta).sin() / gravity;
        prop_assert!((solution.flight_time_s - flight).abs() <= 1e-9 * flight.max(1.0));
        prop_assert!((solution.range_m - range).abs() <= 1e-9 * range.max(1.0));
        // Landing speed equals launch speed on level ground.
        prop_assert!((solution.impact_speed - speed).abs() <= 1e-9 * speed);
    }

    #[test]
    fn raised_launch_lands_later_and_farther(
        speed in 1.0f64..80.0,
        angle in 0.0f64..=90.0,
        height in 0.5f64..200.0,
    ) {
        let raised = solve_projectile(&LaunchInputs {
            speed_mps: speed,
            gravity_mps2: 9.81,
            height_m: height,
            angle_deg: angle,
        })
        .expect("raised launch always lands");
        prop_assert!(raised.flight_time_s > 0.0);
        prop_assert!(raised.impact_vy < 0.0);
        let (_, y) = raised.position_at(raised.flight_time_s);
        prop_assert!(y.abs() <= 1e-6 * (height + raised.peak_height_m));

        if angle > 0.0 && angle < 90.0 {
            let level = solve_projectile(&ground_launch(speed, 9.81, angle))
                .expect("level launch above horizontal lands");
            prop_assert!(raised.flight_time_s > level.flight_time_s);
            prop_assert!(raised.range_m > level.range_m);
        }
    }
}

#[test]
fn complementary_angles_share_a_range() {
    let low = solve_projectile(&ground_launch(25.0, 9.81, 30.0)).expect("lands");
    let high = low
        .complementary()
        .expect("60 degrees is above zero")
        .expect("lands");
    assert_relative_eq!(high.inputs.angle_deg, 60.0);
    assert_relative_eq!(low.range_m, high.range_m, max_relative = 1e-12);
    assert!(high.peak_height_m > low.peak_height_m);
}

#[test]
fn straight_up_returns_to_the_launch_point() {
    let solution = solve_projectile(&ground_launch(19.62, 9.81, 90.0)).expect("lands");
    assert_abs_diff_eq!(solution.flight_time_s, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.range_m, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.peak_height_m, 19.62, epsilon = 1e-9);
    assert!(solution.complementary().is_none());
}

#[test]
fn zero_gravity_is_rejected_and_reported() {
    let result = solve_projectile(&ground_launch(10.0, 0.0, 45.0));
    assert_eq!(result, Err(ProjectileError::InvalidInput));

    let report = Report::projectile(&result, 2);
    assert!(report.rows.iter().all(|row| row.text == "-"));
    assert!(report.to_string().contains("Error: Please enter valid positive numbers"));
}

#[test]
fn flat_launch_from_the_ground_never_flies() {
    assert_eq!(
        solve_projectile(&ground_launch(10.0, 9.81, 0.0)),
        Err(ProjectileError::NoFlightTime)
    );
}
