use crate::grid::Grid;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Counts the live cells among the 8 cells surrounding `(row, col)`.
///
/// The grid has a hard edge: coordinates past it are skipped, never wrapped. Corner cells
/// therefore only ever see 3 neighbors and edge cells 5.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    assert!(row < grid.height(), "row is out of bounds");
    assert!(col < grid.width(), "col is out of bounds");

    let mut n = 0;

    for r in row.saturating_sub(1)..=row + 1 {
        for c in col.saturating_sub(1)..=col + 1 {
            if (r, c) == (row, col) {
                continue;
            }

            if let Some(true) = grid.get(r, c) {
                n += 1;
            }
        }
    }

    n
}

/// Advance `grid` by one generation under Conway's rules.
pub fn next_generation(grid: &Grid) -> Grid {
    next_generation_with(grid, B3S23)
}

/// Advance `grid` by one generation under `rule`.
///
/// Every cell of the result is computed from `grid` alone, which is never written to, so no cell
/// can observe a neighbor that was already updated in the same step.
pub fn next_generation_with(grid: &Grid, rule: RuleSet) -> Grid {
    let mut next = grid.clone();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let neighbors = count_neighbors(grid, row, col);
            next.set(row, col, rule.next_state(grid.is_alive(row, col), neighbors));
        }
    }

    next
}
