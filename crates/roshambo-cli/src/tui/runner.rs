use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

use crate::tui::App;

/// Event produced by the runtime loop.
#[derive(Debug)]
enum TuiEvent {
    Tick,
    Render,
    Crossterm(Event),
}

/// TUI application runtime.
///
/// Interleaves fixed-rate ticks with renders and crossterm input. A render
/// is emitted whenever state may have changed (after a tick or an input
/// event), so an idle screen costs nothing.
#[derive(Debug)]
pub struct Tui {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    pub fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the tick rate (Hz, ticks per second).
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.tick_interval = Some(Duration::from_secs_f64(1.0 / rate));
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick is due, a render is pending, or a crossterm
    /// event arrives.
    fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = self
                .tick_interval
                .map_or(Duration::from_millis(100), |interval| {
                    (self.last_tick + interval).saturating_duration_since(now)
                });
            if !event::poll(timeout)? {
                continue;
            }

            self.dirty = true;
            return Ok(TuiEvent::Crossterm(event::read()?));
        }
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `TuiEvent::Tick`: calls `app.update()`
    ///    - `TuiEvent::Render`: calls `app.draw()`
    ///    - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
