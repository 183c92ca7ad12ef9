use clap::Args;
use serde::{Deserialize, Serialize};

use crate::core::kinematics::MAX_PASSES;
use crate::core::playback::DEFAULT_TARGET_SECS;
use crate::core::projectile::EARTH_GRAVITY_MPS2;
use crate::core::report::DEFAULT_DECIMALS;
use crate::error::ConfigError;

pub const DEFAULT_SAMPLES: usize = 320;
const MAX_DECIMALS: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_gravity: f64,
    pub decimals: usize,
    pub max_passes: usize,
    pub animation_target_secs: f64,
    pub sample_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_gravity: EARTH_GRAVITY_MPS2,
            decimals: DEFAULT_DECIMALS,
            max_passes: MAX_PASSES,
            animation_target_secs: DEFAULT_TARGET_SECS,
            sample_count: DEFAULT_SAMPLES,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passes == 0 {
            return Err(ConfigError::NoPasses(self.max_passes));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals(self.decimals));
        }
        if !(self.animation_target_secs.is_finite() && self.animation_target_secs > 0.0) {
            return Err(ConfigError::AnimationTarget(self.animation_target_secs));
        }
        Ok(())
    }
}

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    /// Gravity magnitude used when none is given (m/s^2)
    #[arg(long, env = "KINEMATICS_GRAVITY", default_value_t = EARTH_GRAVITY_MPS2, global = true)]
    pub default_gravity: f64,

    /// Decimal places in printed results
    #[arg(long, env = "KINEMATICS_DECIMALS", default_value_t = DEFAULT_DECIMALS, global = true)]
    pub decimals: usize,

    /// Upper bound on equation propagation passes
    #[arg(long, env = "KINEMATICS_MAX_PASSES", default_value_t = MAX_PASSES, global = true)]
    pub max_passes: usize,

    /// Wall-clock seconds a projectile animation should take
    #[arg(long, env = "KINEMATICS_ANIMATION_SECS", default_value_t = DEFAULT_TARGET_SECS, global = true)]
    pub animation_secs: f64,

    /// Points sampled along a trajectory for plots and previews
    #[arg(long, env = "KINEMATICS_SAMPLES", default_value_t = DEFAULT_SAMPLES, global = true)]
    pub samples: usize,
}

impl TryFrom<ConfigArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: ConfigArgs) -> Result<Self, Self::Error> {
        let config = Config {
            default_gravity: args.default_gravity,
            decimals: args.decimals,
            max_passes: args.max_passes,
            animation_target_secs: args.animation_secs,
            sample_count: args.samples,
        };
        config.validate()?;
        Ok(config)
    }
}
