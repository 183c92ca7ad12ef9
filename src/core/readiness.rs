use crate::core::kinematics::KinematicInputs;
use crate::core::projectile::LaunchInputs;
use crate::error::KinematicsError;

pub const MIN_KINEMATIC_KNOWNS: usize = 3;

fn given(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}

/// Known values counted toward the three needed to calculate.
///
/// In constant-velocity mode acceleration and final velocity are not counted
/// as entered, but a known `v0` also stands for the implied `a = 0`.
pub fn kinematic_known_count(inputs: &KinematicInputs) -> usize {
    let mut fields = vec![inputs.v0, inputs.t, inputs.d];
    if !inputs.constant_velocity {
        fields.push(inputs.vf);
        fields.push(inputs.a);
    }
    let mut count = fields.into_iter().filter(|v| given(*v)).count();
    if inputs.constant_velocity && given(inputs.v0) {
        count += 1;
    }
    count
}

pub fn can_calculate_kinematics(inputs: &KinematicInputs) -> bool {
    kinematic_known_count(inputs) >= MIN_KINEMATIC_KNOWNS
}

pub fn require_kinematic_knowns(inputs: &KinematicInputs) -> Result<(), KinematicsError> {
    if can_calculate_kinematics(inputs) {
        return Ok(());
    }
    Err(KinematicsError::NotEnoughKnowns {
        known: kinematic_known_count(inputs),
    })
}

pub fn can_start_kinematic_simulation(inputs: &KinematicInputs) -> bool {
    let (v0, vf, a, t, d) = (
        given(inputs.v0),
        given(inputs.vf),
        given(inputs.a),
        given(inputs.t),
        given(inputs.d),
    );

    if inputs.constant_velocity {
        return v0 && (t || d);
    }
    if v0 {
        return a || t || d;
    }
    vf && [vf, a, t, d].iter().filter(|known| **known).count() >= 3
}

pub fn can_calculate_projectile(inputs: &LaunchInputs) -> bool {
    inputs.validate().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_entered_values_enable_calculation() {
        let inputs = KinematicInputs {
            v0: Some(1.0),
            a: Some(2.0),
            d: Some(3.0),
            ..Default::default()
        };
        assert_eq!(kinematic_known_count(&inputs), 3);
        assert!(can_calculate_kinematics(&inputs));

        let two = KinematicInputs {
            v0: Some(1.0),
            a: Some(f64::NAN),
            d: Some(3.0),
            ..Default::default()
        };
        assert!(!can_calculate_kinematics(&two));
    }

    #[test]
    fn fewer_than_three_values_are_refused_with_the_count() {
        let one = KinematicInputs {
            v0: Some(1.0),
            ..Default::default()
        };
        let err = require_kinematic_knowns(&one).expect_err("one value is not enough");
        assert_eq!(err, KinematicsError::NotEnoughKnowns { known: 1 });
        assert!(err.to_string().starts_with("Enter at least three values"));

        let three = KinematicInputs {
            t: Some(2.0),
            d: Some(5.0),
            ..one
        };
        assert!(require_kinematic_knowns(&three).is_ok());
    }

    #[test]
    fn constant_velocity_counts_implied_acceleration() {
        let inputs = KinematicInputs {
            v0: Some(4.0),
            vf: Some(99.0),
            a: Some(99.0),
            t: Some(2.0),
            constant_velocity: true,
            ..Default::default()
        };
        assert_eq!(kinematic_known_count(&inputs), 3);
        assert!(can_calculate_kinematics(&inputs));
        assert!(can_start_kinematic_simulation(&inputs));

        let no_v0 = KinematicInputs {
            t: Some(2.0),
            d: Some(8.0),
            constant_velocity: true,
            ..Default::default()
        };
        assert!(!can_calculate_kinematics(&no_v0));
        assert!(!can_start_kinematic_simulation(&no_v0));
    }

    #[test]
    fn start_needs_v0_plus_one_or_vf_plus_two() {
        let v0_only = KinematicInputs {
            v0: Some(1.0),
            ..Default::default()
        };
        assert!(!can_start_kinematic_simulation(&v0_only));

        let v0_and_t = KinematicInputs {
            v0: Some(1.0),
            t: Some(1.0),
            ..Default::default()
        };
        assert!(can_start_kinematic_simulation(&v0_and_t));

        let vf_two_more = KinematicInputs {
            vf: Some(1.0),
            a: Some(1.0),
            d: Some(1.0),
            ..Default::default()
        };
        assert!(can_start_kinematic_simulation(&vf_two_more));

        let vf_one_more = KinematicInputs {
            vf: Some(1.0),
            t: Some(1.0),
            ..Default::default()
        };
        assert!(!can_start_kinematic_simulation(&vf_one_more));
    }

    #[test]
    fn projectile_needs_all_four_in_range() {
        let ok = LaunchInputs {
            speed_mps: 10.0,
            gravity_mps2: 9.81,
            height_m: 0.0,
            angle_deg: 90.0,
        };
        assert!(can_calculate_projectile(&ok));
        assert!(!can_calculate_projectile(&LaunchInputs {
            gravity_mps2: -9.81,
            ..ok
        }));
    }
}
