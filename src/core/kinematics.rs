use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::quadratic::{quadratic_roots, smallest_root_where};
use crate::error::KinematicsError;

pub const MAX_PASSES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    InitialVelocity,
    FinalVelocity,
    Acceleration,
    Time,
    Displacement,
}

impl Variable {
    pub const ALL: [Variable; 5] = [
        Variable::InitialVelocity,
        Variable::FinalVelocity,
        Variable::Acceleration,
        Variable::Time,
        Variable::Displacement,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Variable::InitialVelocity => "v0",
            Variable::FinalVelocity => "vf",
            Variable::Acceleration => "a",
            Variable::Time => "t",
            Variable::Displacement => "d",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variable::InitialVelocity => "Initial velocity",
            Variable::FinalVelocity => "Final velocity",
            Variable::Acceleration => "Acceleration",
            Variable::Time => "Time",
            Variable::Displacement => "Displacement",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Variable::InitialVelocity | Variable::FinalVelocity => "m/s",
            Variable::Acceleration => "m/s^2",
            Variable::Time => "s",
            Variable::Displacement => "m",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equation {
    VelocityTime,
    Displacement,
    TimeFree,
    AverageVelocity,
}

impl Equation {
    pub const ALL: [Equation; 4] = [
        Equation::VelocityTime,
        Equation::Displacement,
        Equation::TimeFree,
        Equation::AverageVelocity,
    ];

    pub fn formula(self) -> &'static str {
        match self {
            Equation::VelocityTime => "vf = v0 + a*t",
            Equation::Displacement => "d = v0*t + 0.5*a*t^2",
            Equation::TimeFree => "vf^2 = v0^2 + 2*a*d",
            Equation::AverageVelocity => "d = 0.5*(v0 + vf)*t",
        }
    }

    pub fn variables(self) -> [Variable; 4] {
        use Variable::{Acceleration, Displacement, FinalVelocity, InitialVelocity, Time};
        match self {
            Equation::VelocityTime => [FinalVelocity, InitialVelocity, Acceleration, Time],
            Equation::Displacement => [Displacement, InitialVelocity, Acceleration, Time],
            Equation::TimeFree => [FinalVelocity, InitialVelocity, Acceleration, Displacement],
            Equation::AverageVelocity => [Displacement, InitialVelocity, FinalVelocity, Time],
        }
    }

    pub fn residual(self, state: &KinematicState) -> Option<f64> {
        let (v0, vf, a, t, d) = (state.v0?, state.vf?, state.a?, state.t?, state.d?);
        Some(match self {
            Equation::VelocityTime => vf - (v0 + a * t),
            Equation::Displacement => d - (v0 * t + 0.5 * a * t * t),
            Equation::TimeFree => vf * vf - (v0 * v0 + 2.0 * a * d),
            Equation::AverageVelocity => d - 0.5 * (v0 + vf) * t,
        })
    }

    fn solve(self, state: &KinematicState) -> Option<(Variable, f64)> {
        let mut unknowns = self
            .variables()
            .into_iter()
            .filter(|var| state.get(*var).is_none());
        let target = unknowns.next()?;
        if unknowns.next().is_some() {
            return None;
        }

        let KinematicState { v0, vf, a, t, d } = *state;
        let value = match (self, target) {
            (Equation::VelocityTime, Variable::FinalVelocity) => v0? + a? * t?,
            (Equation::VelocityTime, Variable::InitialVelocity) => vf? - a? * t?,
            (Equation::VelocityTime, Variable::Acceleration) => {
                let t = nonzero(t?)?;
                (vf? - v0?) / t
            }
            (Equation::VelocityTime, Variable::Time) => {
                let a = nonzero(a?)?;
                (vf? - v0?) / a
            }

            (Equation::Displacement, Variable::Displacement) => {
                let (v0, a, t) = (v0?, a?, t?);
                v0 * t + 0.5 * a * t * t
            }
            (Equation::Displacement, Variable::InitialVelocity) => {
                let (a, t) = (a?, nonzero(t?)?);
                (d? - 0.5 * a * t * t) / t
            }
            (Equation::Displacement, Variable::Acceleration) => {
                let t = nonzero(t?)?;
                2.0 * (d? - v0? * t) / (t * t)
            }
            (Equation::Displacement, Variable::Time) => time_from_displacement(v0?, a?, d?)?,

            (Equation::TimeFree, Variable::FinalVelocity) => {
                principal_root(v0? * v0? + 2.0 * a? * d?)?
            }
            (Equation::TimeFree, Variable::InitialVelocity) => {
                principal_root(vf? * vf? - 2.0 * a? * d?)?
            }
            (Equation::TimeFree, Variable::Acceleration) => {
                let d = nonzero(d?)?;
                (vf? * vf? - v0? * v0?) / (2.0 * d)
            }
            (Equation::TimeFree, Variable::Displacement) => {
                let a = nonzero(a?)?;
                (vf? * vf? - v0? * v0?) / (2.0 * a)
            }

            (Equation::AverageVelocity, Variable::Displacement) => 0.5 * (v0? + vf?) * t?,
            (Equation::AverageVelocity, Variable::InitialVelocity) => {
                let t = nonzero(t?)?;
                2.0 * d? / t - vf?
            }
            (Equation::AverageVelocity, Variable::FinalVelocity) => {
                let t = nonzero(t?)?;
                2.0 * d? / t - v0?
            }
            (Equation::AverageVelocity, Variable::Time) => {
                let sum = nonzero(v0? + vf?)?;
                2.0 * d? / sum
            }

            _ => return None,
        };

        value.is_finite().then_some((target, value))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

fn nonzero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

/// Non-negative square root; negative-velocity solutions are discarded.
fn principal_root(radicand: f64) -> Option<f64> {
    (radicand >= 0.0).then(|| radicand.sqrt())
}

/// Earliest non-negative `t` with `d = v0·t + ½·a·t²`.
///
/// Zero acceleration leaves the linear `d = v0·t`, which the quadratic formula
/// cannot handle.
fn time_from_displacement(v0: f64, a: f64, d: f64) -> Option<f64> {
    if a == 0.0 {
        let v0 = nonzero(v0)?;
        let t = d / v0;
        return (t >= 0.0).then_some(t);
    }
    let roots = quadratic_roots(0.5 * a, v0, -d);
    smallest_root_where(&roots, |root| root >= 0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub v0: Option<f64>,
    pub vf: Option<f64>,
    pub a: Option<f64>,
    pub t: Option<f64>,
    pub d: Option<f64>,
}

impl KinematicState {
    pub fn get(&self, var: Variable) -> Option<f64> {
        match var {
            Variable::InitialVelocity => self.v0,
            Variable::FinalVelocity => self.vf,
            Variable::Acceleration => self.a,
            Variable::Time => self.t,
            Variable::Displacement => self.d,
        }
    }

    fn slot(&mut self, var: Variable) -> &mut Option<f64> {
        match var {
            Variable::InitialVelocity => &mut self.v0,
            Variable::FinalVelocity => &mut self.vf,
            Variable::Acceleration => &mut self.a,
            Variable::Time => &mut self.t,
            Variable::Displacement => &mut self.d,
        }
    }

    /// Assigns `value` only if `var` is still unknown.
    fn learn(&mut self, var: Variable, value: f64) -> bool {
        let slot = self.slot(var);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn known_count(&self) -> usize {
        Variable::ALL
            .iter()
            .filter(|var| self.get(**var).is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.known_count() == Variable::ALL.len()
    }

    pub fn unknowns(&self) -> Vec<Variable> {
        Variable::ALL
            .into_iter()
            .filter(|var| self.get(*var).is_none())
            .collect()
    }

    pub fn propagate_once(&mut self) -> Vec<Derivation> {
        let mut derived = Vec::new();
        for equation in Equation::ALL {
            if let Some((variable, value)) = equation.solve(self) {
                if self.learn(variable, value) {
                    derived.push(Derivation {
                        variable,
                        equation,
                        value,
                    });
                }
            }
        }
        derived
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derivation {
    pub variable: Variable,
    pub equation: Equation,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicInputs {
    pub v0: Option<f64>,
    pub vf: Option<f64>,
    pub a: Option<f64>,
    pub t: Option<f64>,
    pub d: Option<f64>,
    /// Forces `a = 0` regardless of the supplied acceleration.
    #[serde(default)]
    pub constant_velocity: bool,
}

impl KinematicInputs {
    pub fn to_state(&self) -> KinematicState {
        let known = |value: Option<f64>| value.filter(|v| v.is_finite());
        KinematicState {
            v0: known(self.v0),
            vf: known(self.vf),
            a: if self.constant_velocity {
                Some(0.0)
            } else {
                known(self.a)
            },
            t: known(self.t),
            d: known(self.d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KinematicSolution {
    pub state: KinematicState,
    pub solved_count: usize,
    pub passes: usize,
    pub derivations: Vec<Derivation>,
    #[serde(skip)]
    pub error: Option<KinematicsError>,
}

impl KinematicSolution {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }
}

pub fn solve_kinematics(inputs: &KinematicInputs) -> KinematicSolution {
    solve_kinematics_with(inputs, MAX_PASSES)
}

pub fn solve_kinematics_with(inputs: &KinematicInputs, max_passes: usize) -> KinematicSolution {
    let mut state = inputs.to_state();
    let mut derivations = Vec::new();
    let mut passes = 0;
    let mut converged = false;

    while passes < max_passes {
        passes += 1;
        let derived = state.propagate_once();
        for step in &derived {
            debug!(
                pass = passes,
                variable = step.variable.symbol(),
                equation = step.equation.formula(),
                value = step.value,
                "derived"
            );
        }
        if derived.is_empty() {
            converged = true;
            break;
        }
        derivations.extend(derived);
        if state.is_complete() {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(passes, "kinematics propagation hit the pass limit");
    }

    let solved_count = state.known_count();
    let error = (solved_count < Variable::ALL.len())
        .then_some(KinematicsError::Underdetermined {
            solved: solved_count,
        });
    debug!(solved_count, passes, "kinematics solve finished");

    KinematicSolution {
        state,
        solved_count,
        passes,
        derivations,
        error,
    }
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

    fn inputs(
        v0: Option<f64>,
        vf: Option<f64>,
        a: Option<f64>,
        t: Option<f64>,
        d: Option<f64>,
    ) -> KinematicInputs {
        KinematicInputs {
            v0,
            vf,
            a,
            t,
            d,
            constant_velocity: false,
        }
    }

    #[test]
    fn derives_final_velocity_and_displacement() {
        let solution = solve_kinematics(&inputs(Some(10.0), None, Some(2.0), Some(5.0), None));

        assert!(solution.is_complete());
        assert_close(solution.state.vf.unwrap(), 20.0, 1e-12);
        assert_close(solution.state.d.unwrap(), 75.0, 1e-12);
    }

    #[test]
    fn derives_time_before_displacement() {
        let solution = solve_kinematics(&inputs(Some(0.0), Some(20.0), Some(4.0), None, None));

        assert_eq!(solution.solved_count, 5);
        assert_close(solution.state.t.unwrap(), 5.0, 1e-12);
        assert_close(solution.state.d.unwrap(), 50.0, 1e-12);
    }

    #[test]
    fn fully_known_input_reports_five_solved() {
        let solution = solve_kinematics(&inputs(
            Some(0.0),
            Some(20.0),
            Some(4.0),
            Some(5.0),
            Some(50.0),
        ));

        assert_eq!(solution.solved_count, 5);
        assert!(solution.error.is_none());
        assert_eq!(solution.passes, 1);
        assert!(solution.derivations.is_empty());
    }

    #[test]
    fn too_few_knowns_is_reported_not_raised() {
        let solution = solve_kinematics(&inputs(Some(3.0), None, Some(1.0), None, None));

        assert_eq!(solution.solved_count, 2);
        assert_eq!(
            solution.error,
            Some(KinematicsError::Underdetermined { solved: 2 })
        );
        assert!(solution.error_message().unwrap().contains("Could not solve"));
    }

    #[test]
    fn constant_velocity_overrides_acceleration() {
        let mut raw = inputs(Some(4.0), None, Some(9.0), Some(3.0), None);
        raw.constant_velocity = true;
        let solution = solve_kinematics(&raw);

        assert_eq!(solution.state.a, Some(0.0));
        assert_close(solution.state.vf.unwrap(), 4.0, 1e-12);
        assert_close(solution.state.d.unwrap(), 12.0, 1e-12);
    }

    #[test]
    fn non_finite_inputs_are_unknown() {
        let state = inputs(Some(f64::NAN), Some(f64::INFINITY), Some(1.0), None, None).to_state();
        assert_eq!(state.v0, None);
        assert_eq!(state.vf, None);
        assert_eq!(state.known_count(), 1);
    }

    #[test]
    fn negative_radicand_leaves_final_velocity_unknown() {
        // v0² + 2ad = 4 - 40 < 0 and no other equation has a single unknown.
        let solution = solve_kinematics(&inputs(Some(2.0), None, Some(-2.0), None, Some(10.0)));

        assert_eq!(solution.state.vf, None);
        assert_eq!(solution.state.t, None);
        assert!(solution.error.is_some());
    }

    #[test]
    fn square_root_branch_keeps_principal_root() {
        // With t known, vf = v0 + a·t keeps the sign.
        let solution = solve_kinematics(&inputs(Some(0.0), None, Some(-2.0), Some(3.0), None));
        assert_close(solution.state.vf.unwrap(), -6.0, 1e-12);

        // Without t, vf comes from vf² = v0² + 2ad and loses it.
        let solution = solve_kinematics(&inputs(Some(0.0), None, Some(-2.0), None, Some(-9.0)));
        assert_close(solution.state.vf.unwrap(), 6.0, 1e-12);
    }

    #[test]
    fn time_from_displacement_picks_earliest_root() {
        // 12 = 10t - t² at t = 5 ± √13; the earlier crossing wins.
        let solution = solve_kinematics(&inputs(Some(10.0), None, Some(-2.0), None, Some(12.0)));
        let t = solution.state.t.unwrap();
        assert_close(t, 5.0 - 13f64.sqrt(), 1e-12);
    }

    #[test]
    fn zero_acceleration_time_uses_linear_form() {
        let solution = solve_kinematics(&inputs(Some(5.0), None, Some(0.0), None, Some(10.0)));
        assert_close(solution.state.t.unwrap(), 2.0, 1e-12);
        assert_close(solution.state.vf.unwrap(), 5.0, 1e-12);
    }

    #[test]
    fn zero_time_guards_skip_division() {
        let solution = solve_kinematics(&inputs(Some(1.0), Some(3.0), None, Some(0.0), None));
        assert_eq!(solution.state.a, None);
        assert_close(solution.state.d.unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn propagation_never_unsolves() {
        let mut state = inputs(None, Some(20.0), Some(4.0), None, Some(50.0)).to_state();
        let mut previous = state;
        for _ in 0..MAX_PASSES {
            state.propagate_once();
            for var in Variable::ALL {
                if let Some(before) = previous.get(var) {
                    assert_eq!(state.get(var), Some(before));
                }
            }
            previous = state;
        }
        assert!(state.is_complete());
    }

    #[test]
    fn solving_is_idempotent() {
        let raw = inputs(None, Some(7.0), None, Some(2.0), Some(9.0));
        assert_eq!(solve_kinematics(&raw), solve_kinematics(&raw));
    }

    #[test]
    fn pass_limit_of_one_stops_early() {
        // a needs v0 from a previous equation; v0 comes from Eq4 which runs last.
        let raw = inputs(None, Some(10.0), None, Some(2.0), Some(12.0));
        let capped = solve_kinematics_with(&raw, 1);
        assert_eq!(capped.passes, 1);

        let full = solve_kinematics(&raw);
        assert!(full.is_complete());
        assert!(full.passes >= capped.passes);
    }

    #[test]
    fn residuals_vanish_for_complete_solution() {
        let solution = solve_kinematics(&inputs(Some(3.0), None, Some(1.5), None, Some(20.0)));
        for equation in Equation::ALL {
            let residual = equation.residual(&solution.state).unwrap();
            assert!(residual.abs() < 1e-9, "{equation}: {residual}");
        }
    }

    #[test]
    fn zero_displacement_leaves_acceleration_unknown() {
        // vf² = v0² + 2ad cannot give a when d = 0; the average-velocity
        // equation yields t = 0, which blocks the other two routes to a.
        let solution = solve_kinematics(&inputs(Some(3.0), Some(5.0), None, None, Some(0.0)));
        assert_eq!(solution.state.t, Some(0.0));
        assert_eq!(solution.state.a, None);
        assert_eq!(solution.solved_count, 4);
        assert!(!solution.is_complete());
    }

    #[test]
    fn opposite_velocities_need_acceleration_for_time() {
        let stuck = solve_kinematics(&inputs(Some(4.0), Some(-4.0), None, None, Some(0.0)));
        assert_eq!(stuck.state.t, None);
        assert_eq!(stuck.solved_count, 3);

        let solved = solve_kinematics(&inputs(Some(4.0), Some(-4.0), Some(-2.0), None, None));
        assert_close(solved.state.t.unwrap(), 4.0, 1e-12);
        assert_close(solved.state.d.unwrap(), 0.0, 1e-12);
        assert!(solved.is_complete());
    }
}
