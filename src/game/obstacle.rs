use super::geometry::{BoundingBox, Cell};
use crate::config::ObstacleConfig;
use crate::consts;
use ratatui::style::Color;

/// A fixed circular obstruction on the field.
///
/// `(x, y)` is the circle's center, in pixel units; the radius is always
/// [`OBSTACLE_RADIUS`][consts::OBSTACLE_RADIUS].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Obstacle {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) color: Color,
}

impl Obstacle {
    /// The square circumscribing the obstacle's circle
    pub(crate) fn bounding_box(self) -> BoundingBox {
        BoundingBox {
            x: self.x - consts::OBSTACLE_RADIUS,
            y: self.y - consts::OBSTACLE_RADIUS,
            width: 2 * consts::OBSTACLE_RADIUS,
            height: 2 * consts::OBSTACLE_RADIUS,
        }
    }
}

impl From<&ObstacleConfig> for Obstacle {
    fn from(cfg: &ObstacleConfig) -> Obstacle {
        Obstacle {
            x: cfg.x,
            y: cfg.y,
            color: cfg.color.clone().into(),
        }
    }
}

/// The obstacles loaded at session start.  Immutable for the lifetime of the
/// session.
///
/// The set answers two different questions for two different callers: food
/// placement asks for exact coordinate coincidence ([`occupies`]
/// [ObstacleField::occupies]), collision detection asks for bounding-box
/// overlap ([`blocks`][ObstacleField::blocks]).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ObstacleField(Vec<Obstacle>);

impl ObstacleField {
    pub(crate) fn new(obstacles: Vec<Obstacle>) -> ObstacleField {
        ObstacleField(obstacles)
    }

    /// Whether `cell`'s coordinates exactly equal some obstacle's center
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.0.iter().any(|ob| ob.x == cell.x && ob.y == cell.y)
    }

    /// Whether `bbox` overlaps some obstacle's bounding square
    pub(crate) fn blocks(&self, bbox: BoundingBox) -> bool {
        self.0.iter().any(|ob| ob.bounding_box().overlaps(bbox))
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.0.iter()
    }
}
