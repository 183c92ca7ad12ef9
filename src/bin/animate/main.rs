use clap::{ArgAction, Parser, Subcommand};
use kinematics_rust::cli::{LaunchArgs, MotionArgs};
use kinematics_rust::config::{Config, ConfigArgs};
use kinematics_rust::logging::init_tracing;
use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod hud;
mod render;
mod state;

use state::Mode;

#[derive(Parser)]
#[command(name = "animate", version)]
#[command(about = "Animate a solved motion in a window", long_about = None)]
struct AnimateArgs {
    #[command(subcommand)]
    mode: ModeArgs,

    #[command(flatten)]
    config: ConfigArgs,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum ModeArgs {
    /// Straight-line motion from any known kinematic values
    Motion(MotionArgs),
    /// Launch at an angle from a height
    Projectile(LaunchArgs),
}

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = AnimateArgs::parse();
    init_tracing(args.verbose);

    let config = match Config::try_from(args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let mode = match args.mode {
        ModeArgs::Motion(motion) => Mode::Motion(motion.to_inputs()),
        ModeArgs::Projectile(launch) => Mode::Projectile(launch.complete(config.default_gravity)),
    };

    app::run(mode, config).await;
}
