use super::direction::Steer;
use super::geometry::Field;
use super::obstacle::{Obstacle, ObstacleField};
use super::party::{Collision, Round, Step};
use super::session::{Decision, Session};
use crate::config::GameConfig;
use rand::Rng;

/// The full game-state engine: the active round plus the session that
/// outlives it.
///
/// The engine does no IO of its own.  The UI layer feeds it at most one
/// steering input per tick and reads the state back out to draw; between
/// rounds it relays the player's continue/decline answer.
#[derive(Clone, Debug)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) field: Field,
    pub(super) obstacles: ObstacleField,
    pub(super) session: Session,
    pub(super) round: Round,
    pub(super) phase: Phase,
}

/// Where the session currently stands
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// A party is in progress; ticks advance the simulation
    Running,

    /// A party just ended; the simulation is suspended on the
    /// continue/decline prompt
    RoundOver { score: u32, collision: Collision },

    /// The session is finished; no further party can start
    SessionOver { score: u32, high_score: u32 },
}

impl<R: Rng> Engine<R> {
    pub(crate) fn with_rng(config: &GameConfig, mut rng: R) -> Engine<R> {
        let field = Field::new(config.width, config.height);
        let obstacles = ObstacleField::new(config.obstacles.iter().map(Obstacle::from).collect());
        let session = Session::new(config.parties);
        let round = Round::start(&mut rng, field, &obstacles);
        Engine {
            rng,
            field,
            obstacles,
            session,
            round,
            phase: Phase::Running,
        }
    }

    /// Advance the simulation one tick.  Once the party has ended this does
    /// nothing; an ended party is never resurrected.
    pub(crate) fn tick(&mut self, steer: Option<Steer>) {
        if !self.round.is_playing() {
            return;
        }
        if let Step::Fatal(collision) =
            self.round
                .step(&mut self.rng, self.field, &self.obstacles, steer)
        {
            let score = self.round.score();
            self.session.record(score);
            self.phase = if self.session.exhausted() {
                Phase::SessionOver {
                    score,
                    high_score: self.recorded_high_score(),
                }
            } else {
                Phase::RoundOver { score, collision }
            };
        }
    }

    /// Answer the end-of-round prompt; `wants_continue` is false on a
    /// decline.  Outside of the prompt this does nothing.
    pub(crate) fn choose(&mut self, wants_continue: bool) {
        let Phase::RoundOver { score, .. } = self.phase else {
            return;
        };
        match self.session.decide(wants_continue) {
            Decision::Continue => {
                self.round = Round::start(&mut self.rng, self.field, &self.obstacles);
                self.phase = Phase::Running;
            }
            Decision::SessionOver => {
                self.phase = Phase::SessionOver {
                    score,
                    high_score: self.recorded_high_score(),
                };
            }
        }
    }

    fn recorded_high_score(&self) -> u32 {
        self.session
            .high_score()
            .expect("a party has completed before the high score is read")
    }
}

impl<R> Engine<R> {
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn field(&self) -> Field {
        self.field
    }

    pub(crate) fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub(crate) fn round(&self) -> &Round {
        &self.round
    }

    pub(crate) fn party_index(&self) -> u32 {
        self.session.party_index()
    }

    pub(crate) fn party_budget(&self) -> u32 {
        self.session.budget()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::geometry::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn test_config(parties: u32) -> GameConfig {
        GameConfig {
            width: 400,
            height: 400,
            obstacles: Vec::new(),
            parties,
        }
    }

    fn test_engine(parties: u32) -> Engine<ChaCha12Rng> {
        let mut engine =
            Engine::with_rng(&test_config(parties), ChaCha12Rng::seed_from_u64(RNG_SEED));
        park_food(&mut engine);
        engine
    }

    /// Move the food off the snake's row so a leftward march never eats
    fn park_food(engine: &mut Engine<ChaCha12Rng>) {
        engine.round.food = Cell::new(380, 0);
    }

    /// Drive the current party into the left wall
    fn crash(engine: &mut Engine<ChaCha12Rng>) {
        for _ in 0..11 {
            engine.tick(Some(Steer::Fixed(Direction::Left)));
        }
    }

    #[test]
    fn first_party_starts_at_center() {
        let engine = test_engine(6);
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.round().snake().head(), Cell::new(200, 200));
        assert_eq!(engine.round().snake().heading(), Direction::Left);
        assert_eq!(engine.party_index(), 1);
        assert_eq!(engine.party_budget(), 6);
    }

    #[test]
    fn crash_suspends_on_the_prompt() {
        let mut engine = test_engine(6);
        crash(&mut engine);
        assert_eq!(
            engine.phase(),
            Phase::RoundOver {
                score: 0,
                collision: Collision::Wall
            }
        );
        // Further ticks are ignored while suspended.
        let frozen = engine.round.clone();
        engine.tick(Some(Steer::Fixed(Direction::Down)));
        assert_eq!(engine.round, frozen);
    }

    #[test]
    fn continue_starts_a_fresh_party() {
        let mut engine = test_engine(6);
        crash(&mut engine);
        engine.choose(true);
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.round().snake().head(), Cell::new(200, 200));
        assert_eq!(engine.round().snake().len(), 1);
        assert_eq!(engine.round().score(), 0);
        assert_eq!(engine.party_index(), 2);
    }

    #[test]
    fn decline_ends_the_session() {
        let mut engine = test_engine(6);
        crash(&mut engine);
        engine.choose(false);
        assert_eq!(
            engine.phase(),
            Phase::SessionOver {
                score: 0,
                high_score: 0
            }
        );
        // Session termination is terminal.
        engine.choose(true);
        engine.tick(Some(Steer::Fixed(Direction::Down)));
        assert!(matches!(engine.phase(), Phase::SessionOver { .. }));
    }

    #[test]
    fn exhausted_budget_skips_the_prompt() {
        let mut engine = test_engine(1);
        crash(&mut engine);
        assert_eq!(
            engine.phase(),
            Phase::SessionOver {
                score: 0,
                high_score: 0
            }
        );
    }

    #[test]
    fn six_party_session_reports_the_high_score() {
        let mut engine = test_engine(6);
        for party in 1..=6 {
            // Stand in for a played-out party: force the score the party
            // would have earned, then crash it.
            engine.round.party.score = if party == 6 { 10 } else { 3 };
            crash(&mut engine);
            if party < 6 {
                engine.choose(true);
                park_food(&mut engine);
            }
        }
        assert_eq!(
            engine.phase(),
            Phase::SessionOver {
                score: 10,
                high_score: 10
            }
        );
    }

    #[test]
    fn high_score_outlives_its_party() {
        let mut engine = test_engine(3);
        engine.round.party.score = 7;
        crash(&mut engine);
        engine.choose(true);
        park_food(&mut engine);
        crash(&mut engine);
        engine.choose(false);
        assert_eq!(
            engine.phase(),
            Phase::SessionOver {
                score: 0,
                high_score: 7
            }
        );
    }
}
