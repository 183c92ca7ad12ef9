use std::fmt;

use serde::Serialize;

use crate::core::kinematics::{KinematicSolution, Variable};
use crate::core::projectile::ProjectileSolution;
use crate::error::ProjectileError;

pub const DEFAULT_DECIMALS: usize = 2;
const UNKNOWN: &str = "-";

pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.decimals$}"),
        _ => UNKNOWN.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub symbol: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub value: Option<f64>,
    pub text: String,
}

impl ReportRow {
    fn new(
        symbol: &'static str,
        label: &'static str,
        unit: &'static str,
        value: Option<f64>,
        decimals: usize,
    ) -> Self {
        Self {
            symbol,
            label,
            unit,
            value,
            text: format_value(value, decimals),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub error: Option<String>,
}

impl Report {
    pub fn kinematics(solution: &KinematicSolution, decimals: usize) -> Self {
        let rows = Variable::ALL
            .into_iter()
            .map(|var| {
                ReportRow::new(
                    var.symbol(),
                    var.label(),
                    var.unit(),
                    solution.state.get(var),
                    decimals,
                )
            })
            .collect();

        Self {
            title: format!("Kinematics ({} of 5 solved)", solution.solved_count),
            rows,
            error: solution.error_message(),
        }
    }

    /// On error every numeric row is blank and only the message is set.
    pub fn projectile(
        result: &Result<ProjectileSolution, ProjectileError>,
        decimals: usize,
    ) -> Self {
        let solution = result.as_ref().ok();
        let field = |pick: fn(&ProjectileSolution) -> f64| solution.map(pick);

        let rows = vec![
            ReportRow::new("v0", "Launch speed", "m/s", field(|s| s.inputs.speed_mps), decimals),
            ReportRow::new("vf", "Impact speed", "m/s", field(|s| s.impact_speed), decimals),
            ReportRow::new("a", "Acceleration", "m/s^2", field(|s| s.acceleration), decimals),
            ReportRow::new("t", "Flight time", "s", field(|s| s.flight_time_s), decimals),
            ReportRow::new("d", "Range", "m", field(|s| s.range_m), decimals),
            ReportRow::new("h0", "Initial height", "m", field(|s| s.inputs.height_m), decimals),
            ReportRow::new("angle", "Launch angle", "deg", field(|s| s.inputs.angle_deg), decimals),
            ReportRow::new("hmax", "Peak height", "m", field(|s| s.peak_height_m), decimals),
        ];

        let title = match solution {
            Some(s) => format!("Projectile at {} deg", format_value(Some(s.inputs.angle_deg), decimals)),
            None => "Projectile".to_string(),
        };

        Self {
            title,
            rows,
            error: result.as_ref().err().map(ToString::to_string),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let label_width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let value_width = self.rows.iter().map(|r| r.text.len()).max().unwrap_or(0);
        for row in &self.rows {
            writeln!(
                f,
                "  {:<label_width$}  {:>5}  {:>value_width$} {}",
                row.label, row.symbol, row.text, row.unit
            )?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {error}")?;
        }
        Ok(())
    }
}
