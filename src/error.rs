use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KinematicsError {
    #[error("Could not solve for all unknowns with the given inputs. Check your values.")]
    Underdetermined { solved: usize },
    #[error("Enter at least three values to calculate (got {known}).")]
    NotEnoughKnowns { known: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectileError {
    #[error(
        "Please enter valid positive numbers for Initial Velocity, Gravity, Initial Height, and a Launch Angle between 0-90 degrees."
    )]
    InvalidInput,
    #[error(
        "No valid flight time found for given parameters. Projectile might not hit the ground or inputs are invalid."
    )]
    NoFlightTime,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid {label}: '{value}'. Expected a number.")]
    NotANumber { label: String, value: String },
    #[error("Input ended unexpectedly (EOF).")]
    UnexpectedEof,
    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max passes must be at least 1, got {0}")]
    NoPasses(usize),
    #[error("decimals must be at most 10, got {0}")]
    TooManyDecimals(usize),
    #[error("animation target must be a positive number of seconds, got {0}")]
    AnimationTarget(f64),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: {0}")]
    Empty(&'static str),
    #[error("drawing failed: {0}")]
    Draw(String),
}
