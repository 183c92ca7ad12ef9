pub mod kinematics;
pub mod playback;
pub mod plot;
pub mod projectile;
pub mod quadratic;
pub mod readiness;
pub mod report;
pub mod window;
