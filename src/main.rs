use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arena_sim::io::{export_simulation, load_config, load_names};
use arena_sim::run_simulation;

#[derive(Parser, Debug)]
#[command(name = "arena-sim")]
#[command(about = "Generate a day-by-day arena elimination narrative as JSON")]
struct Args {
    /// Tribute names, one per line
    #[arg(short, long, default_value = "tribute_names.txt")]
    names: PathBuf,

    /// Probabilities, pacing bounds and template pools
    #[arg(short, long, default_value = "arena_events.json")]
    config: PathBuf,

    /// Where to write the simulation result
    #[arg(short, long, default_value = "simulation.json")]
    output: PathBuf,

    /// Random seed (overrides the config file; random if neither sets one)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(days) => {
            println!(
                "Generated {} with {} day(s).",
                args.output.display(),
                days
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> std::io::Result<usize> {
    let names = load_names(&args.names)?;
    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let result = run_simulation(&names, &config);
    export_simulation(&result, &args.output)?;
    Ok(result.days.len())
}
