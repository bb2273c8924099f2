use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gridlife::Outcome;
use gridlife::Simulation;
use gridlife::render::TerminalRenderer;
use gridlife::seed;

use cli::Args;

mod cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let size = args.board_size as usize;

    let grid = match args.random {
        Some(p) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            seed::random(size, size, p, &mut rng).context("Failed to seed random board")?
        }
        None => seed::blinker(size).context("Failed to create board")?,
    };

    let sim = Simulation::new(args.generations as usize)
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_rule(args.rule);

    let mut renderer = TerminalRenderer::stdout().with_clear(args.clear);

    match sim.run(grid, &mut renderer).context("Failed to draw board")? {
        Outcome::Completed { generations } => debug!(generations, "ran every generation"),
        Outcome::Stabilized { generation } => debug!(generation, "stopped early"),
    }

    Ok(())
}
