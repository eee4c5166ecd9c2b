use std::collections::VecDeque;

use rand::Rng as _;

use crate::{
    CpuPlayer, DEFAULT_WIN_THRESHOLD, Gesture, GestureFeed, MatchScore, Side, ThrowSeed,
};

/// Display steps of the pre-round countdown, in order. Each step is shown
/// for one time unit; the round captures one unit after the final step
/// appears, giving the player time to finish the gesture.
pub const COUNTDOWN_STEPS: [&str; 4] = ["Rock", "Paper", "Scissors", "Shoot!"];

/// Current stage of the match state machine.
///
/// `Resolved` is transient: resolution evaluates the termination condition
/// in the same call, so by the time control returns to the host the phase is
/// already `Countdown` (next round) or `MatchOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchPhase {
    Idle,
    Countdown,
    AwaitingCapture,
    Resolved,
    MatchOver,
}

/// Everything the presentation layer needs to announce one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub user_gesture: Gesture,
    pub cpu_gesture: Gesture,
    /// Which side scored, or `None` for a draw.
    pub scorer: Option<Side>,
    /// Cumulative scores after this round.
    pub user_score: u32,
    pub cpu_score: u32,
    /// The round that was just resolved (1-based).
    pub round_number: u32,
}

/// Event emitted toward the presentation layer.
///
/// The session never renders, plays sound, or touches UI state; it only
/// queues these values. Hosts drain them with [`MatchSession::poll_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    RoundResolved(RoundOutcome),
    MatchOver { winner: Side },
}

/// Frame-driven match state machine for a best-of-N gesture match.
///
/// The host calls [`increment_frame`] once per frame; one countdown time
/// unit is `fps` frames. All transitions run on the caller's single thread,
/// so two capture or reset requests can never race. The only state shared
/// with other threads is the [`GestureFeed`], which the asynchronous pose
/// path writes through its own cloned handle.
///
/// Because the countdown is phase state rather than scheduled callbacks, a
/// reset cancels any pending step structurally: there is no timer left to
/// fire into the new match.
///
/// # Example
///
/// ```
/// use roshambo_engine::MatchSession;
///
/// let mut session = MatchSession::new(60);
/// assert!(session.phase().is_idle());
///
/// session.start();
/// assert_eq!(session.countdown_label(), Some("Rock"));
///
/// // The pose pipeline would write through this handle from its own thread.
/// let feed = session.feed();
/// ```
///
/// [`increment_frame`]: Self::increment_frame
#[derive(Debug, Clone)]
pub struct MatchSession {
    score: MatchScore,
    phase: MatchPhase,
    cpu: CpuPlayer,
    feed: GestureFeed,
    events: VecDeque<MatchEvent>,
    last_outcome: Option<RoundOutcome>,
    fps: u64,
    countdown_step: usize,
    step_frames: u64,
}

impl MatchSession {
    /// Creates an idle session with a random CPU seed and the default
    /// best-of-three threshold.
    #[must_use]
    pub fn new(fps: u64) -> Self {
        Self::with_rules(fps, rand::rng().random(), DEFAULT_WIN_THRESHOLD)
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible CPU.
    #[must_use]
    pub fn with_seed(fps: u64, seed: ThrowSeed) -> Self {
        Self::with_rules(fps, seed, DEFAULT_WIN_THRESHOLD)
    }

    /// Fully configured constructor: seed and win threshold.
    #[must_use]
    pub fn with_rules(fps: u64, seed: ThrowSeed, win_threshold: u32) -> Self {
        Self {
            score: MatchScore::new(win_threshold),
            phase: MatchPhase::Idle,
            cpu: CpuPlayer::with_seed(seed),
            feed: GestureFeed::new(),
            events: VecDeque::new(),
            last_outcome: None,
            fps,
            countdown_step: 0,
            step_frames: 0,
        }
    }

    /// Returns a handle onto the shared gesture slot for the pose path.
    #[must_use]
    pub fn feed(&self) -> GestureFeed {
        self.feed.clone()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    #[must_use]
    pub fn user_score(&self) -> u32 {
        self.score.user()
    }

    #[must_use]
    pub fn cpu_score(&self) -> u32 {
        self.score.cpu()
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.score.round()
    }

    #[must_use]
    pub fn win_threshold(&self) -> u32 {
        self.score.win_threshold()
    }

    /// The countdown step currently on display, if the countdown is running.
    #[must_use]
    pub fn countdown_label(&self) -> Option<&'static str> {
        self.phase
            .is_countdown()
            .then(|| COUNTDOWN_STEPS[self.countdown_step])
    }

    /// The most recently resolved round, for display between rounds.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// Drains the next queued presentation event, oldest first.
    pub fn poll_event(&mut self) -> Option<MatchEvent> {
        self.events.pop_front()
    }

    /// Starts the match: `Idle` to `Countdown`. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase.is_idle() {
            self.begin_countdown();
        }
    }

    /// Starts a brand-new match from any phase.
    ///
    /// Scores and round number return to their construction-time defaults,
    /// pending countdown state and queued events are discarded, the gesture
    /// slot is emptied, and the phase goes to `Countdown`. Nothing from the
    /// previous match can leak into the new one.
    pub fn reset(&mut self) {
        self.score.reset();
        self.events.clear();
        self.last_outcome = None;
        self.begin_countdown();
    }

    /// Advances time by one frame.
    ///
    /// During `Countdown`, each elapsed time unit (`fps` frames) advances one
    /// display step; one unit after the final step the round captures. In
    /// `Idle` and `MatchOver` frames pass with no effect.
    pub fn increment_frame(&mut self) {
        if self.phase.is_awaiting_capture() {
            self.capture();
            return;
        }
        if !self.phase.is_countdown() {
            return;
        }

        self.step_frames = self.step_frames.saturating_sub(1);
        if self.step_frames > 0 {
            return;
        }

        if self.countdown_step + 1 < COUNTDOWN_STEPS.len() {
            self.countdown_step += 1;
            self.step_frames = self.fps;
        } else {
            // "Shoot!" has been on screen for a full unit; capture now.
            self.phase = MatchPhase::AwaitingCapture;
            self.capture();
        }
    }

    /// Resolves the current round from whatever the feed holds right now.
    ///
    /// Reads the latest classified gesture as of this moment (`Unknown` if
    /// no frame classified this round) and draws the CPU throw at the same
    /// instant. A capture request in any phase other than `AwaitingCapture`
    /// is a no-op, not a fault.
    pub fn capture(&mut self) {
        if !self.phase.is_awaiting_capture() {
            return;
        }
        let user = self.feed.take().unwrap_or(Gesture::Unknown);
        let cpu = self.cpu.throw();
        self.resolve(user, cpu);
    }

    fn resolve(&mut self, user: Gesture, cpu: Gesture) {
        self.phase = MatchPhase::Resolved;
        let scorer = self.score.record_round(user, cpu);
        let outcome = RoundOutcome {
            user_gesture: user,
            cpu_gesture: cpu,
            scorer,
            user_score: self.score.user(),
            cpu_score: self.score.cpu(),
            round_number: self.score.round(),
        };
        self.events.push_back(MatchEvent::RoundResolved(outcome.clone()));
        self.last_outcome = Some(outcome);

        if let Some(winner) = self.score.winner() {
            self.phase = MatchPhase::MatchOver;
            self.events.push_back(MatchEvent::MatchOver { winner });
        } else {
            self.score.advance_round();
            self.begin_countdown();
        }
    }

    fn begin_countdown(&mut self) {
        self.feed.clear();
        self.countdown_step = 0;
        self.step_frames = self.fps;
        self.phase = MatchPhase::Countdown;
    }
}
