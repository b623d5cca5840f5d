use super::geometry::{Cell, Field};
use super::obstacle::ObstacleField;
use rand::Rng;

/// Pick a grid-aligned cell for a new food item.
///
/// Candidates are sampled uniformly at random and rejected only when their
/// coordinates exactly match an obstacle's center; the snake's own body is
/// not considered, so food can appear underneath it.  The loop terminates as
/// long as at least one cell is free of obstacles.
pub(crate) fn place<R: Rng>(rng: &mut R, field: Field, obstacles: &ObstacleField) -> Cell {
    loop {
        let cell = field.random_cell(rng);
        if !obstacles.occupies(cell) {
            return cell;
        }
    }
}
