/// Completed-party history and the round budget for one sitting.
///
/// The session outlives every party: scores only accumulate, and the budget
/// is fixed when the session is created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    scores: Vec<u32>,
    budget: u32,
}

/// Whether another party may start
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Decision {
    Continue,
    SessionOver,
}

impl Session {
    pub(crate) fn new(budget: u32) -> Session {
        Session {
            scores: Vec::new(),
            budget,
        }
    }

    /// 1-based index of the party currently being played.  Saturates at the
    /// budget once the last party has finished.
    pub(crate) fn party_index(&self) -> u32 {
        let finished = u32::try_from(self.scores.len()).unwrap_or(u32::MAX);
        finished.saturating_add(1).min(self.budget)
    }

    pub(crate) fn budget(&self) -> u32 {
        self.budget
    }

    /// Record a finished party's final score
    pub(crate) fn record(&mut self, score: u32) {
        self.scores.push(score);
    }

    /// Whether the round budget is used up
    pub(crate) fn exhausted(&self) -> bool {
        u32::try_from(self.scores.len()).unwrap_or(u32::MAX) >= self.budget
    }

    /// The highest score over the completed parties, if any have completed.
    /// Callers consult this only once at least one score is recorded.
    pub(crate) fn high_score(&self) -> Option<u32> {
        self.scores.iter().copied().max()
    }

    /// Combine the player's answer to the continue prompt with the remaining
    /// budget
    pub(crate) fn decide(&self, wants_continue: bool) -> Decision {
        if wants_continue && !self.exhausted() {
            Decision::Continue
        } else {
            Decision::SessionOver
        }
    }
}
