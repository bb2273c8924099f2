use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::grid::Grid;
use crate::grid::GridError;

#[derive(Error, Debug, PartialEq)]
pub enum SeedError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Probability {0} is outside of [0, 1]")]
    InvalidProbability(f64),
}

/// A `size` by `size` grid with a vertical blinker through its center.
///
/// Boards too small to hold the blinker away from the edge come back empty.
pub fn blinker(size: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::square(size)?;

    let center = size / 2;
    if center > 0 && center < size - 1 {
        grid.set(center - 1, center, true);
        grid.set(center, center, true);
        grid.set(center + 1, center, true);
    } else {
        debug!(size, "board too small for a blinker, leaving it empty");
    }

    Ok(grid)
}

/// A `height` by `width` grid where every cell is alive with the given `probability`.
pub fn random<R>(
    height: usize,
    width: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Grid, SeedError>
where
    R: Rng,
{
    if !(0.0..=1.0).contains(&probability) {
        return Err(SeedError::InvalidProbability(probability));
    }

    let mut grid = Grid::new(height, width)?;

    for row in 0..height {
        for col in 0..width {
            grid.set(row, col, rng.gen_bool(probability));
        }
    }

    debug!(
        height,
        width,
        probability,
        population = grid.population(),
        "seeded random grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::SeedError;
    use super::blinker;
    use super::random;
    use crate::grid::GridError;

    #[test]
    fn blinker_in_the_middle() {
        let grid = blinker(3).unwrap();

        assert_eq!(grid.population(), 3);
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 1));
        assert!(grid.is_alive(2, 1));
    }

    #[test]
    fn blinker_even_board() {
        let grid = blinker(6).unwrap();

        assert_eq!(grid.population(), 3);
        assert!(grid.is_alive(2, 3));
        assert!(grid.is_alive(3, 3));
        assert!(grid.is_alive(4, 3));
    }

    #[test]
    fn blinker_too_small() {
        assert_eq!(blinker(1).unwrap().population(), 0);
        assert_eq!(blinker(2).unwrap().population(), 0);
        assert_eq!(blinker(0), Err(GridError::Empty));
    }

    #[test]
    fn random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);

        let empty = random(10, 10, 0.0, &mut rng).unwrap();
        assert_eq!(empty.population(), 0);

        let full = random(10, 10, 1.0, &mut rng).unwrap();
        assert_eq!(full.population(), 100);
    }

    #[test]
    fn random_is_reproducible() {
        let a = random(8, 12, 0.4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random(8, 12, 0.4, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.height(), 8);
        assert_eq!(a.width(), 12);
    }

    #[test]
    fn random_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            random(3, 3, 1.5, &mut rng),
            Err(SeedError::InvalidProbability(1.5))
        );
        assert!(matches!(
            random(3, 3, f64::NAN, &mut rng),
            Err(SeedError::InvalidProbability(_))
        ));
        assert_eq!(
            random(0, 3, 0.5, &mut rng),
            Err(SeedError::Grid(GridError::Empty))
        );
    }
}
