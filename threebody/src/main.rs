use threebody::{parse_body_edit, BodyEdit, ScenarioConfig, SimulationController, TrajectoryRecorder};
use threebody::run_2d;
use threebody::{bench_gravity, bench_step_curve};
use threebody::logger::Logger;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use std::io;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// Three unit masses, untagged
    Classic,
    /// Unequal red/green/blue masses with short trails
    Colored,
}

#[derive(Parser, Debug)]
#[command(about = "Three-body gravitational simulation")]
struct Args {
    /// Scenario file under `scenarios/`; overrides --preset
    #[arg(short)]
    file_name: Option<String>,

    #[arg(long, value_enum, default_value_t = Preset::Colored)]
    preset: Preset,

    /// Clamp each velocity component to [-MAX_SPEED, MAX_SPEED]
    #[arg(long)]
    max_speed: Option<f64>,

    /// Edit a body's initial state as I:m,x,y,vx,vy (empty fields unchanged); repeatable
    #[arg(long = "body", value_name = "EDIT", value_parser = parse_body_edit)]
    bodies: Vec<(usize, BodyEdit)>,

    /// Run without a window and print the trajectory as CSV
    #[arg(long)]
    headless: bool,

    /// Step count for --headless (defaults to the scenario's num_steps)
    #[arg(long)]
    steps: Option<usize>,

    /// Time the force computation and integrator instead of simulating
    #[arg(long)]
    bench: bool,

    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            ScenarioConfig::load(&config_path)
                .with_context(|| format!("failed to load scenario {}", config_path.display()))?
        }
        None => match args.preset {
            Preset::Classic => ScenarioConfig::classic(),
            Preset::Colored => ScenarioConfig::colored(),
        },
    };

    if args.max_speed.is_some() {
        cfg.engine.max_speed = args.max_speed;
    }

    Ok(cfg)
}

// edits only land on the next run, so rebuild once they are all in
fn build_controller(cfg: ScenarioConfig, edits: &[(usize, BodyEdit)]) -> Result<SimulationController> {
    let mut controller = SimulationController::new(cfg).context("invalid scenario")?;
    for (index, edit) in edits {
        controller
            .edit_body(*index, edit)
            .with_context(|| format!("cannot edit body {}", index))?;
    }
    if !edits.is_empty() {
        controller.reset();
    }
    Ok(controller)
}

fn run_headless(mut controller: SimulationController, steps: usize) -> Result<()> {
    // every step goes to the CSV, regardless of the trail length
    let mut recorder = TrajectoryRecorder::unbounded(controller.bodies().len());

    let taken = controller.run(steps, &mut recorder);
    let com = controller.center_of_mass();
    info!(
        "ran {} steps, t = {:.4}, center of mass = ({:.6}, {:.6}), energy = {:.6}",
        taken,
        controller.system().t,
        com.x,
        com.y,
        controller.total_energy()
    );

    recorder.write_csv(io::stdout().lock()).context("failed to write trajectory")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };

    if args.bench {
        Logger::init(level)?;
        bench_gravity();
        bench_step_curve();
        return Ok(());
    }

    let cfg = load_scenario(&args)?;

    if args.headless {
        Logger::init(level)?;
        let steps = args.steps.unwrap_or(cfg.parameters.num_steps);
        let controller = build_controller(cfg, &args.bodies)?;
        run_headless(controller, steps)
    } else {
        let controller = build_controller(cfg, &args.bodies)?;
        run_2d(controller);
        Ok(())
    }
}
