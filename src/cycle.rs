use crate::grid::Grid;

/// Returns true when `current` matches the grid from two generations back.
///
/// This catches still lifes (period 1) and period 2 oscillators such as the blinker. Longer
/// periods go unnoticed.
pub fn is_stabilized(current: &Grid, two_back: Option<&Grid>) -> bool {
    two_back.is_some_and(|prev| prev == current)
}

/// The two snapshots preceding the current generation. Anything older is dropped.
#[derive(Default, Debug)]
pub struct History {
    one_back: Option<Grid>,
    two_back: Option<Grid>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `grid` as the generation just left behind.
    pub fn push(&mut self, grid: Grid) {
        self.two_back = self.one_back.replace(grid);
    }

    pub fn two_back(&self) -> Option<&Grid> {
        self.two_back.as_ref()
    }

    /// Whether `current` repeats the grid from two generations back
    pub fn stabilized(&self, current: &Grid) -> bool {
        is_stabilized(current, self.two_back())
    }
}
