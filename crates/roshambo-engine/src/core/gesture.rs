use serde::{Deserialize, Serialize};

/// Classified hand shape.
///
/// `Unknown` is a first-class outcome, not an error: it means no heuristic
/// rule matched. The match state machine treats it as a valid round value
/// that can draw but never win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Gesture {
    #[display("Rock")]
    Rock,
    #[display("Paper")]
    Paper,
    #[display("Scissors")]
    Scissors,
    #[display("Unknown")]
    Unknown,
}

impl Gesture {
    /// The three throwable gestures, i.e. everything a CPU opponent may pick.
    pub const THROWS: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Classic dominance relation: rock beats scissors, scissors beats
    /// paper, paper beats rock. `Unknown` beats nothing and nothing beats
    /// `Unknown`, so any round involving it is a draw.
    #[must_use]
    pub const fn beats(self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_is_cyclic() {
        assert!(Gesture::Rock.beats(Gesture::Scissors));
        assert!(Gesture::Scissors.beats(Gesture::Paper));
        assert!(Gesture::Paper.beats(Gesture::Rock));

        assert!(!Gesture::Scissors.beats(Gesture::Rock));
        assert!(!Gesture::Paper.beats(Gesture::Scissors));
        assert!(!Gesture::Rock.beats(Gesture::Paper));
    }

    #[test]
    fn ties_beat_nothing() {
        for gesture in [
            Gesture::Rock,
            Gesture::Paper,
            Gesture::Scissors,
            Gesture::Unknown,
        ] {
            assert!(!gesture.beats(gesture));
        }
    }

    #[test]
    fn unknown_never_wins_and_never_loses() {
        for throw in Gesture::THROWS {
            assert!(!Gesture::Unknown.beats(throw));
            assert!(!throw.beats(Gesture::Unknown));
        }
    }
}
