pub mod cycle;
pub mod grid;
pub mod life;
pub mod render;
pub mod rule_set;
pub mod seed;
pub mod simulation;

pub use grid::Grid;
pub use simulation::Outcome;
pub use simulation::Simulation;
