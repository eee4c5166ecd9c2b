use crossterm::event::{Event, KeyCode};
use rand::Rng as _;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use roshambo_engine::{
    Gesture, GestureFeed, HandSnapshot, Landmark, MatchEvent, MatchSession, Point, Side, ThrowSeed,
};

use crate::{
    tui::{App, Tui},
    ui::widgets::{MatchDisplay, outcome_line},
};

const DEFAULT_FPS: u64 = 60;
const HISTORY_LINES: usize = 4;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Round wins needed to take the match
    #[clap(long, default_value_t = 2)]
    first_to: u32,
    /// Seed for a reproducible CPU opponent (32 hex characters)
    #[clap(long)]
    seed: Option<ThrowSeed>,
    /// Frames per second; one countdown step lasts this many frames
    #[clap(long, default_value_t = DEFAULT_FPS)]
    fps: u64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            first_to: 2,
            seed: None,
            fps: DEFAULT_FPS,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut app = PlayApp::new(arg.fps, seed, arg.first_to);
    Tui::new().run(&mut app)
}

/// The play screen: keys stand in for the camera pipeline by synthesizing
/// hand snapshots that run through the real classifier path.
#[derive(Debug)]
struct PlayApp {
    session: MatchSession,
    feed: GestureFeed,
    history: Vec<String>,
    fps: u64,
    is_exiting: bool,
}

impl PlayApp {
    fn new(fps: u64, seed: ThrowSeed, first_to: u32) -> Self {
        let session = MatchSession::with_rules(fps, seed, first_to);
        let feed = session.feed();
        Self {
            session,
            feed,
            history: Vec::new(),
            fps,
            is_exiting: false,
        }
    }

    fn observe(&mut self, gesture: Gesture) {
        // Synthetic frames always clear the confidence floor, so this
        // cannot fail; a real pose pipeline would just drop the frame.
        let _ = self.feed.observe(&synthetic_snapshot(gesture));
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.session.poll_event() {
            let entry = match event {
                MatchEvent::RoundResolved(outcome) => outcome_line(&outcome),
                MatchEvent::MatchOver { winner } => match winner {
                    Side::User => "Match over: you win".to_string(),
                    Side::Cpu => "Match over: CPU wins".to_string(),
                },
            };
            self.history.insert(0, entry);
            self.history.truncate(HISTORY_LINES);
        }
    }
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(self.fps as f64);
        self.session.start();
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('r') => self.observe(Gesture::Rock),
                KeyCode::Char('p') => self.observe(Gesture::Paper),
                KeyCode::Char('s') => self.observe(Gesture::Scissors),
                KeyCode::Char('n') => {
                    self.history.clear();
                    self.session.reset();
                }
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let display = MatchDisplay::new(&self.session).history(&self.history);
        let help_text =
            Text::from("Controls: R P S (Throw) | N (New Match) | Q (Quit)")
                .style(Style::default().fg(Color::DarkGray))
                .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(13), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.session.increment_frame();
        self.drain_events();
    }
}

/// Builds a plausible snapshot for a throwable gesture: wrist at the palm
/// center, fingertips fanned at distances inside the gesture's threshold
/// band, with a little jitter so consecutive frames differ like real
/// detections do.
fn synthetic_snapshot(gesture: Gesture) -> HandSnapshot {
    let mut rng = rand::rng();
    let wrist = Point::new(0.5, 0.55);

    let (extended, curled) = (0.28..0.38, 0.08..0.17);
    let (index, middle, ring, little) = match gesture {
        Gesture::Paper => (
            rng.random_range(extended.clone()),
            rng.random_range(extended.clone()),
            rng.random_range(extended.clone()),
            rng.random_range(extended),
        ),
        Gesture::Scissors => (
            rng.random_range(0.32..0.40),
            rng.random_range(0.32..0.40),
            rng.random_range(curled.clone()),
            rng.random_range(curled),
        ),
        // Rock for everything else; Unknown is never synthesized.
        _ => (
            rng.random_range(curled.clone()),
            rng.random_range(curled.clone()),
            rng.random_range(curled.clone()),
            rng.random_range(curled),
        ),
    };

    // Fan the fingers across the top of the palm.
    let angles = [1.9_f64, 1.7, 1.4, 1.1];
    let mut tip = |d: f64, angle: f64| {
        Landmark::new(
            Point::new(wrist.x + d * angle.cos(), wrist.y - d * angle.sin()),
            rng.random_range(0.6..0.99),
        )
    };
    let index_tip = tip(index, angles[0]);
    let middle_tip = tip(middle, angles[1]);
    let ring_tip = tip(ring, angles[2]);
    let little_tip = tip(little, angles[3]);

    HandSnapshot::new(
        Landmark::new(wrist, 0.95),
        index_tip,
        middle_tip,
        ring_tip,
        little_tip,
    )
}
