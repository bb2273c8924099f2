use std::time::Duration;

use gridlife::Simulation;
use gridlife::render::TerminalRenderer;
use gridlife::seed;

const BOARD_SIZE: usize = 5;
const GENERATIONS: usize = 10;

fn main() -> anyhow::Result<()> {
    let grid = seed::blinker(BOARD_SIZE)?;

    let sim = Simulation::new(GENERATIONS).with_delay(Duration::from_millis(250));
    let outcome = sim.run(grid, &mut TerminalRenderer::stdout())?;

    println!("{outcome:?}");

    Ok(())
}
