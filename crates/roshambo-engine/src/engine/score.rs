use serde::{Deserialize, Serialize};

use crate::Gesture;

/// First to this many round wins takes the match (best of three).
pub const DEFAULT_WIN_THRESHOLD: u32 = 2;

/// A side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Side {
    #[display("user")]
    User,
    #[display("CPU")]
    Cpu,
}

/// Scores and round counter for one match.
///
/// Tracks the only mutable numbers in the game:
///
/// - **User / CPU score**: round wins per side, each incremented by at most
///   one per round
/// - **Round number**: starts at 1, advances after every resolved
///   non-terminal round (draws included)
/// - **Win threshold**: fixed at construction; the first side to reach it
///   wins the match
///
/// The outcome rule lives here too: a side scores iff its gesture beats the
/// other's under [`Gesture::beats`]. Ties and rounds involving `Unknown` are
/// draws and change no score.
///
/// # Example
///
/// ```
/// use roshambo_engine::{Gesture, MatchScore, Side};
///
/// let mut score = MatchScore::new(2);
/// let scorer = score.record_round(Gesture::Rock, Gesture::Scissors);
///
/// assert_eq!(scorer, Some(Side::User));
/// assert_eq!(score.user(), 1);
/// assert_eq!(score.winner(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MatchScore {
    user: u32,
    cpu: u32,
    round: u32,
    win_threshold: u32,
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_THRESHOLD)
    }
}

impl MatchScore {
    /// Creates a fresh score sheet: both sides at zero, round 1.
    #[must_use]
    pub const fn new(win_threshold: u32) -> Self {
        Self {
            user: 0,
            cpu: 0,
            round: 1,
            win_threshold,
        }
    }

    /// Returns the user's round wins.
    #[must_use]
    pub const fn user(&self) -> u32 {
        self.user
    }

    /// Returns the CPU's round wins.
    #[must_use]
    pub const fn cpu(&self) -> u32 {
        self.cpu
    }

    /// Returns the current round number (1-based).
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    /// Applies the outcome rule for one round and credits the scoring side.
    ///
    /// Returns which side scored, or `None` for a draw. The round counter is
    /// not advanced here; the session does that only for non-terminal rounds.
    pub const fn record_round(&mut self, user: Gesture, cpu: Gesture) -> Option<Side> {
        if user.beats(cpu) {
            self.user += 1;
            Some(Side::User)
        } else if cpu.beats(user) {
            self.cpu += 1;
            Some(Side::Cpu)
        } else {
            None
        }
    }

    /// Returns the winning side once a score has reached the threshold.
    ///
    /// Both sides cannot reach it in the same round (scores move by single
    /// increments and the check fires immediately), so at most one side ever
    /// qualifies.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        if self.user >= self.win_threshold {
            Some(Side::User)
        } else if self.cpu >= self.win_threshold {
            Some(Side::Cpu)
        } else {
            None
        }
    }

    /// Advances to the next round.
    pub const fn advance_round(&mut self) {
        self.round += 1;
    }

    /// Reinitializes to construction-time defaults, keeping the threshold.
    pub const fn reset(&mut self) {
        self.user = 0;
        self.cpu = 0;
        self.round = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Gesture::{Paper, Rock, Scissors, Unknown};

    #[test]
    fn outcome_table_is_exhaustive() {
        let all = [Rock, Paper, Scissors, Unknown];
        for user in all {
            for cpu in all {
                let mut score = MatchScore::default();
                let scorer = score.record_round(user, cpu);

                let expected = if user.beats(cpu) {
                    Some(Side::User)
                } else if cpu.beats(user) {
                    Some(Side::Cpu)
                } else {
                    None
                };
                assert_eq!(scorer, expected, "user={user:?} cpu={cpu:?}");

                // Spot-check the relation itself against the classic table.
                match (user, cpu) {
                    (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => {
                        assert_eq!(scorer, Some(Side::User));
                    }
                    (Scissors, Rock) | (Paper, Scissors) | (Rock, Paper) => {
                        assert_eq!(scorer, Some(Side::Cpu));
                    }
                    _ => assert_eq!(scorer, None),
                }
            }
        }
    }

    #[test]
    fn unknown_rounds_are_always_draws() {
        let mut score = MatchScore::default();
        for other in [Rock, Paper, Scissors, Unknown] {
            assert_eq!(score.record_round(Unknown, other), None);
            assert_eq!(score.record_round(other, Unknown), None);
        }
        assert_eq!(score.user(), 0);
        assert_eq!(score.cpu(), 0);
    }

    #[test]
    fn scores_move_by_at_most_one_per_round() {
        let mut score = MatchScore::new(100);
        let mut prev = (0, 0);
        let plays = [
            (Rock, Scissors),
            (Paper, Paper),
            (Scissors, Rock),
            (Unknown, Rock),
            (Paper, Rock),
        ];
        for (user, cpu) in plays {
            let _ = score.record_round(user, cpu);
            let now = (score.user(), score.cpu());
            assert!(now.0 >= prev.0 && now.1 >= prev.1);
            assert!(now.0 - prev.0 + now.1 - prev.1 <= 1);
            prev = now;
            score.advance_round();
        }
        assert_eq!(score.round(), 6);
    }

    #[test]
    fn winner_appears_exactly_at_threshold() {
        let mut score = MatchScore::new(2);
        assert_eq!(score.winner(), None);

        let _ = score.record_round(Rock, Scissors);
        assert_eq!(score.winner(), None);

        let _ = score.record_round(Rock, Scissors);
        assert_eq!(score.winner(), Some(Side::User));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut score = MatchScore::new(2);
        let _ = score.record_round(Scissors, Paper);
        score.advance_round();
        score.reset();

        assert_eq!(score.user(), 0);
        assert_eq!(score.cpu(), 0);
        assert_eq!(score.round(), 1);
        assert_eq!(score.win_threshold(), 2);
    }
}
