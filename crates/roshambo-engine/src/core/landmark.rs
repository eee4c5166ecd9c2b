use serde::{Deserialize, Serialize};

/// Minimum confidence required on the gated landmarks before a snapshot may
/// be classified. Frames at or below the floor are dropped at the capture
/// boundary; the classifier itself never re-checks confidence.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// A 2D coordinate in the normalized unit square supplied by the upstream
/// pose detector.
///
/// The x axis increases to the right; the y axis keeps whatever sign
/// convention the detector uses. Flipping for display is a presentation
/// concern and happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance, in the same normalized space as the
    /// coordinates themselves.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One tracked anatomical point: a position plus the detector's certainty
/// for that point in that frame.
///
/// Landmarks are immutable values. The pose pipeline constructs a fresh set
/// per frame; nothing in this crate mutates or retains them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub position: Point,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Landmark {
    #[must_use]
    pub const fn new(position: Point, confidence: f64) -> Self {
        Self {
            position,
            confidence,
        }
    }
}

/// The minimal set of landmarks the classifier needs for one decision.
///
/// A snapshot is a value object, fully determined by its five landmarks. One
/// is built per detection cycle and discarded after classification; no
/// history is kept.
///
/// # Example
///
/// ```
/// use roshambo_engine::{Gesture, HandSnapshot, Landmark, Point, classify};
///
/// let wrist = Landmark::new(Point::new(0.5, 0.5), 0.9);
/// let tip = |d: f64| Landmark::new(Point::new(0.5 + d, 0.5), 0.9);
/// let snapshot = HandSnapshot::new(wrist, tip(0.1), tip(0.1), tip(0.1), tip(0.1));
///
/// assert!(snapshot.clears_confidence_floor());
/// assert_eq!(classify(&snapshot), Gesture::Rock);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub wrist: Landmark,
    pub index_tip: Landmark,
    pub middle_tip: Landmark,
    pub ring_tip: Landmark,
    pub little_tip: Landmark,
}

impl HandSnapshot {
    #[must_use]
    pub const fn new(
        wrist: Landmark,
        index_tip: Landmark,
        middle_tip: Landmark,
        ring_tip: Landmark,
        little_tip: Landmark,
    ) -> Self {
        Self {
            wrist,
            index_tip,
            middle_tip,
            ring_tip,
            little_tip,
        }
    }

    /// Capture-boundary confidence gate.
    ///
    /// True iff the wrist, index tip, and little tip each carry confidence
    /// strictly above [`CONFIDENCE_FLOOR`]. The middle and ring tips are not
    /// gated; the upstream detector scores them less reliably and the
    /// classifier tolerates their noise.
    #[must_use]
    pub fn clears_confidence_floor(&self) -> bool {
        self.wrist.confidence > CONFIDENCE_FLOOR
            && self.index_tip.confidence > CONFIDENCE_FLOOR
            && self.little_tip.confidence > CONFIDENCE_FLOOR
    }
}
