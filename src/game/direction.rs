use crate::consts;
use rand::Rng;

/// The four ways the snake can travel
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// One grid step in this direction, in pixel units
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-consts::BLOCK_SIZE, 0),
            Direction::Right => (consts::BLOCK_SIZE, 0),
            Direction::Up => (0, -consts::BLOCK_SIZE),
            Direction::Down => (0, consts::BLOCK_SIZE),
        }
    }
}

/// A steering input for one tick.
///
/// `Random` stands in for "pick one of the four for me"; it resolves to a
/// concrete cardinal direction exactly once, at the moment the input is
/// consumed, and never re-randomizes within a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Steer {
    Fixed(Direction),
    Random,
}

impl Steer {
    pub(crate) fn resolve<R: Rng>(self, rng: &mut R) -> Direction {
        match self {
            Steer::Fixed(d) => d,
            Steer::Random => match rng.random_range(0..4) {
                0 => Direction::Left,
                1 => Direction::Right,
                2 => Direction::Up,
                _ => Direction::Down,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[rstest]
    #[case(Direction::Left, (-20, 0))]
    #[case(Direction::Right, (20, 0))]
    #[case(Direction::Up, (0, -20))]
    #[case(Direction::Down, (0, 20))]
    fn test_delta(#[case] d: Direction, #[case] delta: (i32, i32)) {
        assert_eq!(d.delta(), delta);
    }

    #[rstest]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    fn fixed_resolves_to_itself(#[case] d: Direction) {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(Steer::Fixed(d).resolve(&mut rng), d);
    }

    #[test]
    fn random_covers_all_cardinals() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(Steer::Random.resolve(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
