use std::io::{BufRead, Write};

use clap::Args;

use crate::core::kinematics::KinematicInputs;
use crate::core::projectile::LaunchInputs;
use crate::error::InputError;

#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct MotionArgs {
    /// Initial velocity (m/s)
    #[arg(long, allow_negative_numbers = true)]
    pub v0: Option<f64>,

    /// Final velocity (m/s)
    #[arg(long, allow_negative_numbers = true)]
    pub vf: Option<f64>,

    /// Acceleration (m/s^2)
    #[arg(short = 'a', long = "accel", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Elapsed time (s)
    #[arg(short = 't', long = "time", allow_negative_numbers = true)]
    pub t: Option<f64>,

    /// Displacement (m)
    #[arg(short = 'd', long = "disp", allow_negative_numbers = true)]
    pub d: Option<f64>,

    /// Hold acceleration at zero
    #[arg(long)]
    pub constant_velocity: bool,
}

impl MotionArgs {
    pub fn is_empty(&self) -> bool {
        [self.v0, self.vf, self.a, self.t, self.d]
            .iter()
            .all(Option::is_none)
    }

    pub fn to_inputs(&self) -> KinematicInputs {
        KinematicInputs {
            v0: self.v0,
            vf: self.vf,
            a: self.a,
            t: self.t,
            d: self.d,
            constant_velocity: self.constant_velocity,
        }
    }
}

#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct LaunchArgs {
    /// Launch speed (m/s)
    #[arg(long, visible_alias = "v0")]
    pub speed: Option<f64>,

    /// Gravity magnitude (m/s^2); falls back to the configured default
    #[arg(long, short = 'g')]
    pub gravity: Option<f64>,

    /// Launch height above the ground (m)
    #[arg(long)]
    pub height: Option<f64>,

    /// Launch angle above horizontal (deg)
    #[arg(long)]
    pub angle: Option<f64>,
}

impl LaunchArgs {
    pub fn complete(&self, default_gravity: f64) -> Option<LaunchInputs> {
        Some(LaunchInputs {
            speed_mps: self.speed?,
            gravity_mps2: self.gravity.unwrap_or(default_gravity),
            height_m: self.height?,
            angle_deg: self.angle?,
        })
    }

    pub fn resolve<R: BufRead, W: Write>(
        &self,
        default_gravity: f64,
        input: &mut R,
        output: &mut W,
    ) -> Result<LaunchInputs, InputError> {
        let mut ask = |given: Option<f64>, prompt: &str| match given {
            Some(value) => Ok(value),
            None => read_f64(prompt, input, output),
        };
        Ok(LaunchInputs {
            angle_deg: ask(self.angle, "Angle (degrees): ")?,
            speed_mps: ask(self.speed, "Velocity (m/s): ")?,
            height_m: ask(self.height, "Height (m): ")?,
            gravity_mps2: self.gravity.unwrap_or(default_gravity),
        })
    }
}

pub fn parse_known(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_f64(value: &str, label: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            label: label.to_string(),
            value: value.to_string(),
        })
}

fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, InputError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line)
}

pub fn read_f64<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<f64, InputError> {
    loop {
        let line = read_line(prompt, input, output)?;
        match parse_f64(&line, prompt.trim_end_matches([':', ' '])) {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => writeln!(output, "Please enter a valid number (e.g., 45 or 12.5).")?,
        }
    }
}

pub fn read_known<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<f64>, InputError> {
    Ok(parse_known(&read_line(prompt, input, output)?))
}

pub fn prompt_motion<R: BufRead, W: Write>(
    constant_velocity: bool,
    input: &mut R,
    output: &mut W,
) -> Result<KinematicInputs, InputError> {
    writeln!(output, "Enter known values; leave blank for unknowns.")?;
    let v0 = read_known("Initial velocity (m/s): ", input, output)?;
    let (vf, a) = if constant_velocity {
        (None, None)
    } else {
        (
            read_known("Final velocity (m/s): ", input, output)?,
            read_known("Acceleration (m/s^2): ", input, output)?,
        )
    };
    Ok(KinematicInputs {
        v0,
        vf,
        a,
        t: read_known("Time (s): ", input, output)?,
        d: read_known("Displacement (m): ", input, output)?,
        constant_velocity,
    })
}
