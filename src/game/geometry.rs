use crate::consts;
use rand::Rng;

/// A grid square of the playing field, identified by the pixel coordinates of
/// its top-left corner.
///
/// Coordinates are always multiples of [`BLOCK_SIZE`][consts::BLOCK_SIZE];
/// equality is by value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// The square of pixels covered by this cell
    pub(crate) fn bounding_box(self) -> BoundingBox {
        BoundingBox {
            x: self.x,
            y: self.y,
            width: consts::BLOCK_SIZE,
            height: consts::BLOCK_SIZE,
        }
    }
}

/// An axis-aligned rectangle of pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BoundingBox {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl BoundingBox {
    /// Whether two boxes share any pixel.
    ///
    /// Pixel ranges are half-open: boxes that merely share an edge coordinate
    /// do not overlap.  Every box comparison in the game goes through this
    /// one predicate.
    pub(crate) fn overlaps(self, other: BoundingBox) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// The bounded rectangular playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Field {
    pub(crate) fn new(width: i32, height: i32) -> Field {
        Field { width, height }
    }

    /// Whether `cell` lies entirely inside the field
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..=self.width - consts::BLOCK_SIZE).contains(&cell.x)
            && (0..=self.height - consts::BLOCK_SIZE).contains(&cell.y)
    }

    /// The grid cell at the field's midpoint, snapped down to the grid
    pub(crate) fn center(self) -> Cell {
        Cell::new(snap(self.width / 2), snap(self.height / 2))
    }

    /// A uniformly random in-bounds grid cell
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let cols = (self.width - consts::BLOCK_SIZE) / consts::BLOCK_SIZE + 1;
        let rows = (self.height - consts::BLOCK_SIZE) / consts::BLOCK_SIZE + 1;
        Cell::new(
            rng.random_range(0..cols) * consts::BLOCK_SIZE,
            rng.random_range(0..rows) * consts::BLOCK_SIZE,
        )
    }
}

fn snap(coord: i32) -> i32 {
    coord - coord.rem_euclid(consts::BLOCK_SIZE)
}
