use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use kinematics_rust::cli::{LaunchArgs, MotionArgs, prompt_motion};
use kinematics_rust::config::{Config, ConfigArgs};
use kinematics_rust::core::kinematics::solve_kinematics_with;
use kinematics_rust::core::playback::KinematicPlayback;
use kinematics_rust::core::plot::{ChartData, default_plot_path, render_chart};
use kinematics_rust::core::projectile::solve_projectile;
use kinematics_rust::core::readiness::require_kinematic_knowns;
use kinematics_rust::core::report::Report;
use kinematics_rust::error::PlotError;
use kinematics_rust::logging::init_tracing;

#[derive(Parser)]
#[command(name = "kinematics", version)]
#[command(about = "Solve uniformly-accelerated and projectile motion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: ConfigArgs,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Solve v0, vf, a, t and d from any three of them
    Solve {
        #[command(flatten)]
        motion: MotionArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Flight time, range and impact speed of a launch
    Projectile {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Also solve the complementary angle (90 - angle)
        #[arg(long)]
        complementary: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write a chart of the solved motion
    Plot {
        #[command(subcommand)]
        target: PlotTarget,
    },
}

#[derive(Subcommand)]
enum PlotTarget {
    /// Displacement against time
    Solve {
        #[command(flatten)]
        motion: MotionArgs,

        /// Output file (.png or .svg)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Height against distance
    Projectile {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output file (.png or .svg)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn emit(reports: &[Report], json: bool) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();
    if json {
        let text = match reports {
            [single] => single.to_json()?,
            many => serde_json::to_string_pretty(many)?,
        };
        writeln!(stdout, "{text}")?;
    } else {
        for report in reports {
            writeln!(stdout, "{report}")?;
        }
    }
    Ok(())
}

fn run() -> Result<bool, Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::try_from(cli.config)?;

    let mut input = io::stdin().lock();
    let mut prompt_out = io::stdout();

    match cli.command {
        Command::Solve { motion, json } => {
            let inputs = if motion.is_empty() {
                prompt_motion(motion.constant_velocity, &mut input, &mut prompt_out)?
            } else {
                motion.to_inputs()
            };
            require_kinematic_knowns(&inputs)?;
            let solution = solve_kinematics_with(&inputs, config.max_passes);
            let report = Report::kinematics(&solution, config.decimals);
            emit(&[report], json)?;
            Ok(solution.is_complete())
        }
        Command::Projectile {
            launch,
            complementary,
            json,
        } => {
            let inputs = launch.resolve(config.default_gravity, &mut input, &mut prompt_out)?;
            let result = solve_projectile(&inputs);
            let mut reports = vec![Report::projectile(&result, config.decimals)];
            if complementary {
                if let Some(other) = result.as_ref().ok().and_then(|s| s.complementary()) {
                    reports.push(Report::projectile(&other, config.decimals));
                }
            }
            emit(&reports, json)?;
            Ok(result.is_ok())
        }
        Command::Plot { target } => {
            let (chart, path) = match target {
                PlotTarget::Solve { motion, out } => {
                    let inputs = motion.to_inputs();
                    require_kinematic_knowns(&inputs)?;
                    let solution = solve_kinematics_with(&inputs, config.max_passes);
                    let playback = KinematicPlayback::from_solution(&solution).ok_or(
                        PlotError::Empty("initial velocity and acceleration could not be solved"),
                    )?;
                    let chart = ChartData::kinematics(&playback, config.sample_count)?;
                    (chart, out.unwrap_or_else(|| default_plot_path("kinematics")))
                }
                PlotTarget::Projectile { launch, out } => {
                    let inputs =
                        launch.resolve(config.default_gravity, &mut input, &mut prompt_out)?;
                    let solution = solve_projectile(&inputs)?;
                    let chart = ChartData::projectile(&solution, config.sample_count);
                    (chart, out.unwrap_or_else(|| default_plot_path("projectile")))
                }
            };
            render_chart(&chart, &path)?;
            println!("Wrote {}", path.display());
            Ok(true)
        }
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
