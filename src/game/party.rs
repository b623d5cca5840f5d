use super::direction::{Direction, Steer};
use super::food;
use super::geometry::{Cell, Field};
use super::obstacle::ObstacleField;
use super::snake::Snake;
use rand::Rng;

/// Score and liveness for a single party
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Party {
    pub(crate) score: u32,
    pub(crate) is_playing: bool,
}

impl Party {
    fn new() -> Party {
        Party {
            score: 0,
            is_playing: true,
        }
    }
}

/// What the snake's head ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Body,
    Obstacle,
}

/// The outcome of advancing the simulation one tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The snake moved; `ate` is whether it consumed the food
    Moved { ate: bool },

    /// The party is over
    Fatal(Collision),
}

/// Everything owned by one party: the snake, the food, and the score record.
/// Dropped and rebuilt whole when the next party starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Round {
    pub(super) snake: Snake,
    pub(super) food: Cell,
    pub(super) party: Party,
}

impl Round {
    /// Start a fresh party: a single-cell snake at the field center facing
    /// left, food placed clear of the obstacles, score zero.
    pub(crate) fn start<R: Rng>(rng: &mut R, field: Field, obstacles: &ObstacleField) -> Round {
        Round {
            snake: Snake::new(field.center(), Direction::Left),
            food: food::place(rng, field, obstacles),
            party: Party::new(),
        }
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Cell {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.party.score
    }

    /// Whether this round's party is still live.  Goes false on the fatal
    /// tick and never comes back.
    pub(crate) fn is_playing(&self) -> bool {
        self.party.is_playing
    }

    /// Advance the simulation one tick.
    ///
    /// The commanded steer (if any) is resolved to a concrete direction
    /// first; the new head is then prepended unconditionally, and the
    /// terminal-collision checks run in fixed precedence: wall, then body,
    /// then obstacle.  The first hit ends the party with the score frozen,
    /// the tail unpopped, and no food logic run.  On a clean move the snake
    /// either eats (score up, new food, no tail pop) or the tail is popped to
    /// keep its length.
    pub(crate) fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        field: Field,
        obstacles: &ObstacleField,
        steer: Option<Steer>,
    ) -> Step {
        if let Some(steer) = steer {
            self.snake.turn(steer.resolve(rng));
        }
        let head = self.snake.push_head();
        let collision = if !field.contains(head) {
            Some(Collision::Wall)
        } else if self.snake.bites_itself() {
            Some(Collision::Body)
        } else if obstacles.blocks(head.bounding_box()) {
            Some(Collision::Obstacle)
        } else {
            None
        };
        if let Some(collision) = collision {
            self.party.is_playing = false;
            return Step::Fatal(collision);
        }
        if head.bounding_box().overlaps(self.food.bounding_box()) {
            self.party.score += 1;
            self.food = food::place(rng, field, obstacles);
            Step::Moved { ate: true }
        } else {
            self.snake.pop_tail();
            Step::Moved { ate: false }
        }
    }
}
