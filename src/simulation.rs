use std::io;
use std::thread;
use std::time::Duration;

use tracing::debug;
use tracing::info;

use crate::cycle::History;
use crate::grid::Grid;
use crate::life::next_generation_with;
use crate::render::Renderer;
use crate::rule_set::RuleSet;

/// Pause between two generations when none is given
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// How a run came to an end
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Every requested generation was shown
    Completed { generations: usize },

    /// Generation `generation` matched the one two steps before it, so the run stopped there
    Stabilized { generation: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Simulation {
    /// Upper bound on the number of generations shown, the initial grid included
    pub generations: usize,

    /// Sleep between generations. Zero skips the sleep entirely.
    pub delay: Duration,

    pub rule: RuleSet,
}

impl Simulation {
    pub fn new(generations: usize) -> Self {
        Self {
            generations,
            delay: DEFAULT_DELAY,
            rule: RuleSet::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    /// Runs the simulation from `initial`, handing each generation to `renderer`.
    ///
    /// Generation `i` is drawn first, then compared against generation `i - 2`. A match ends the
    /// run; otherwise the grid is stepped and the history shifts by one.
    pub fn run<R>(&self, initial: Grid, renderer: &mut R) -> io::Result<Outcome>
    where
        R: Renderer,
    {
        let mut grid = initial;
        let mut history = History::new();

        info!(
            height = grid.height(),
            width = grid.width(),
            generations = self.generations,
            rule = %self.rule,
            "starting simulation"
        );

        for i in 0..self.generations {
            renderer.generation(i, &grid)?;

            if history.stabilized(&grid) {
                info!(generation = i, "board stabilized");
                renderer.stabilized(i)?;

                return Ok(Outcome::Stabilized { generation: i });
            }

            let next = next_generation_with(&grid, self.rule);
            debug!(
                generation = i + 1,
                population = next.population(),
                "stepped"
            );

            history.push(grid);
            grid = next;

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        info!(generations = self.generations, "simulation completed");

        Ok(Outcome::Completed {
            generations: self.generations,
        })
    }
}
