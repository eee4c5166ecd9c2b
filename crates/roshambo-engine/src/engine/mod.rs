//! Match logic and state management.
//!
//! This module provides the high-level game logic that sequences classified
//! gestures into a best-of-N match:
//!
//! - [`MatchSession`] - Frame-driven match state machine (countdown, capture,
//!   resolution, termination)
//! - [`MatchScore`] - Scores, round counter, and the round outcome rule
//! - [`GestureFeed`] - Synchronized "latest classified gesture" slot shared
//!   with the asynchronous pose path
//! - [`CpuPlayer`] - Uniformly random CPU opponent
//! - [`ThrowSeed`] - Seed for deterministic CPU throws
//!
//! # Match Flow
//!
//! A typical match progresses as follows:
//!
//! 1. Construct a [`MatchSession`] and call [`MatchSession::start`]
//! 2. The pose pipeline pushes snapshots into the session's [`GestureFeed`]
//!    as frames arrive; each valid snapshot overwrites the slot
//! 3. The countdown steps through `Rock, Paper, Scissors, Shoot!`, one step
//!    per time unit, driven by [`MatchSession::increment_frame`]
//! 4. One time unit after the final step, the round captures whatever the
//!    feed holds (or `Unknown`), draws the CPU throw, and resolves
//! 5. Rounds repeat until a side reaches the win threshold; the presentation
//!    layer drains [`MatchEvent`]s to update labels and sounds
//!
//! Resetting at any point discards pending countdown state and starts a
//! brand-new match.

pub use self::{cpu_player::*, feed::*, score::*, session::*};

mod cpu_player;
mod feed;
mod score;
mod session;
