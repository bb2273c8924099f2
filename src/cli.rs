use clap::Parser;

use gridlife::rule_set::RuleSet;

/// Conway's Game of Life on a square board with hard edges.
///
/// Prints each generation and stops early once the board repeats the one from two generations
/// before.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Side length of the board
    #[arg(value_parser = clap::value_parser!(u32).range(3..))]
    pub board_size: u32,

    /// Number of generations to show, the starting board included
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub generations: u32,

    /// Pause between generations, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Seed the board randomly, each cell alive with this probability, instead of a blinker
    #[arg(long, value_name = "P", value_parser = parse_probability)]
    pub random: Option<f64>,

    /// Seed for the random board
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Life-like rule, e.g. B3/S23 or b36s23
    #[arg(long, default_value_t = RuleSet::default())]
    pub rule: RuleSet,

    /// Clear the screen before each generation
    #[arg(long)]
    pub clear: bool,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("\"{s}\" is not a number"))?;

    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not between 0 and 1"))
    }
}
