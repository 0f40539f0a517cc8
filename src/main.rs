use solsim::{bench_step, CancelToken, ConsoleSink, Scenario, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::BufRead;
use std::path::PathBuf;
use std::thread;

#[derive(Parser, Debug)]
#[command(name = "solsim")]
#[command(about = "Attractor/orbiter gravity simulation")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Use the built-in Sol/Earth/Mars system instead of a file
    #[arg(long)]
    builtin: bool,

    /// Override the number of steps (default: duration / tick)
    #[arg(long)]
    steps: Option<usize>,

    /// Print positions every N steps
    #[arg(long, default_value = "10")]
    every: usize,

    /// Time the step function instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    if args.builtin {
        return Ok(Scenario::sol_earth_mars()?);
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(Scenario::build_scenario(cfg)?)
}

/// Typing `q` + enter stops the run between steps
fn spawn_quit_listener(token: CancelToken) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) if l.trim() == "q" => {
                    token.cancel();
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let scenario = load_scenario(&args)?;
    let mut simulation = Simulation::new(scenario)?;
    spawn_quit_listener(simulation.cancel_token());

    let mut sink = ConsoleSink::stdout(args.every);
    let summary = match args.steps {
        Some(n) => simulation.run_steps(n, &mut sink)?,
        None => simulation.run(&mut sink)?,
    };

    tracing::info!(
        steps = summary.steps,
        cancelled = summary.cancelled,
        sim_days = summary.sim_time / 86400.0,
        "run finished"
    );

    Ok(())
}
