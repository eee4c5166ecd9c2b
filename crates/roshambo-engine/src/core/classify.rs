use crate::core::{Gesture, HandSnapshot};

/// Empirical thresholds for the wrist-to-fingertip distance heuristic.
///
/// These constants are tuned against the normalized coordinate space of the
/// upstream pose detector and are reproduced verbatim; changing any of them
/// changes game behavior. Note the rules are not a partition of the distance
/// space: values between `ROCK_CURL_MAX` and `PAPER_EXTEND_MIN` (say 0.22)
/// match nothing and classify as `Unknown`.
const ROCK_CURL_MAX: f64 = 0.2;
const PAPER_EXTEND_MIN: f64 = 0.25;
const SCISSORS_EXTEND_MIN: f64 = 0.3;
const SCISSORS_CURL_MAX: f64 = 0.25;

/// Classifies a hand snapshot into a gesture.
///
/// Pure, total, and deterministic: every input maps to exactly one of the
/// four labels and there is no failure mode. The caller is responsible for
/// the confidence gate ([`HandSnapshot::clears_confidence_floor`]); this
/// function assumes the snapshot was already cleared.
///
/// Rules are checked in order (Rock, Paper, Scissors, then `Unknown`) and
/// the first match wins. The order is significant: the predicates are not
/// mutually exclusive for pathological inputs, so reordering them could
/// change the label.
///
/// No smoothing happens across frames. Each call is fully independent, which
/// is why borderline poses are expected to flicker to `Unknown` now and then.
#[must_use]
pub fn classify(snapshot: &HandSnapshot) -> Gesture {
    let wrist = snapshot.wrist.position;
    let d_index = wrist.distance_to(snapshot.index_tip.position);
    let d_middle = wrist.distance_to(snapshot.middle_tip.position);
    let d_ring = wrist.distance_to(snapshot.ring_tip.position);
    let d_little = wrist.distance_to(snapshot.little_tip.position);

    if d_index < ROCK_CURL_MAX
        && d_middle < ROCK_CURL_MAX
        && d_ring < ROCK_CURL_MAX
        && d_little < ROCK_CURL_MAX
    {
        // All fingertips close to the palm.
        Gesture::Rock
    } else if d_index > PAPER_EXTEND_MIN
        && d_middle > PAPER_EXTEND_MIN
        && d_ring > PAPER_EXTEND_MIN
        && d_little > PAPER_EXTEND_MIN
    {
        // All fingers extended, or mostly extended.
        Gesture::Paper
    } else if d_index > SCISSORS_EXTEND_MIN
        && d_middle > SCISSORS_EXTEND_MIN
        && d_ring < SCISSORS_CURL_MAX
        && d_little < SCISSORS_CURL_MAX
    {
        // Index and middle extended, ring and little curled.
        Gesture::Scissors
    } else {
        Gesture::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Landmark, Point};

    /// Builds a snapshot whose four wrist-to-tip distances are exactly the
    /// given values, by placing each tip along an axis from a wrist at the
    /// origin. The wrist must sit at (0, 0): offsetting an exact-threshold
    /// distance like 0.3 from any other coordinate rounds in f64 and can
    /// land the distance on the wrong side of a strict bound.
    fn snapshot_with_distances(index: f64, middle: f64, ring: f64, little: f64) -> HandSnapshot {
        let wrist = Point::new(0.0, 0.0);
        let tip = |d: f64, dx: f64, dy: f64| {
            Landmark::new(Point::new(wrist.x + d * dx, wrist.y + d * dy), 0.9)
        };
        HandSnapshot::new(
            Landmark::new(wrist, 0.9),
            tip(index, 1.0, 0.0),
            tip(middle, 0.0, 1.0),
            tip(ring, -1.0, 0.0),
            tip(little, 0.0, -1.0),
        )
    }

    #[test]
    fn all_curled_is_rock() {
        let snapshot = snapshot_with_distances(0.1, 0.12, 0.08, 0.15);
        assert_eq!(classify(&snapshot), Gesture::Rock);
    }

    #[test]
    fn all_extended_is_paper() {
        let snapshot = snapshot_with_distances(0.3, 0.35, 0.28, 0.26);
        assert_eq!(classify(&snapshot), Gesture::Paper);
    }

    #[test]
    fn index_and_middle_extended_is_scissors() {
        let snapshot = snapshot_with_distances(0.35, 0.32, 0.1, 0.12);
        assert_eq!(classify(&snapshot), Gesture::Scissors);
    }

    #[test]
    fn gap_distances_are_unknown() {
        // 0.22 sits between the rock and paper thresholds and matches no rule.
        let snapshot = snapshot_with_distances(0.22, 0.22, 0.22, 0.22);
        assert_eq!(classify(&snapshot), Gesture::Unknown);
    }

    #[test]
    fn threshold_boundaries_are_exclusive() {
        // Exactly 0.2 everywhere: not < 0.2, not > 0.25. Unknown.
        assert_eq!(
            classify(&snapshot_with_distances(0.2, 0.2, 0.2, 0.2)),
            Gesture::Unknown
        );
        // Exactly 0.25 everywhere: not > 0.25. Unknown.
        assert_eq!(
            classify(&snapshot_with_distances(0.25, 0.25, 0.25, 0.25)),
            Gesture::Unknown
        );
    }

    #[test]
    fn near_scissors_with_lazy_middle_is_unknown() {
        // Middle at 0.3 fails the strict scissors bound and the pose matches
        // neither rock nor paper.
        let snapshot = snapshot_with_distances(0.35, 0.3, 0.1, 0.1);
        assert_eq!(classify(&snapshot), Gesture::Unknown);
    }

    #[test]
    fn one_straggler_finger_breaks_paper() {
        let snapshot = snapshot_with_distances(0.3, 0.3, 0.3, 0.2);
        assert_eq!(classify(&snapshot), Gesture::Unknown);
    }

    #[test]
    fn classification_is_deterministic() {
        let snapshot = snapshot_with_distances(0.35, 0.32, 0.1, 0.12);
        let first = classify(&snapshot);
        for _ in 0..100 {
            assert_eq!(classify(&snapshot), first);
        }
    }

    #[test]
    fn distances_use_true_geometry_not_components() {
        // A tip offset diagonally by (0.18, 0.18) is ~0.255 from the wrist,
        // which is outside the rock bound even though each component is inside.
        let wrist = Landmark::new(Point::new(0.5, 0.5), 0.9);
        let diagonal = Landmark::new(Point::new(0.68, 0.68), 0.9);
        let snapshot = HandSnapshot::new(wrist, diagonal, diagonal, diagonal, diagonal);
        assert_eq!(classify(&snapshot), Gesture::Paper);
    }
}
