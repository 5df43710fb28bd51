use crate::clock::TickClock;
use crate::{CellObserver, Grid, GridError, DEFAULT_TICK_INTERVAL};
use std::time::{Duration, Instant};

/// Drives the generational clock of a single [`Grid`] and mediates between
/// manual input, the board and the display observer.
///
/// The clock is cooperative: the host event loop calls [`Engine::poll`]
/// regularly and a tick fires once its armed deadline has passed, so the
/// grid is never mutated from more than one logical thread of control.
pub struct Engine<O> {
    grid: Grid,
    observer: O,
    running: bool,
    clock: TickClock,
}

impl<O: CellObserver> Engine<O> {
    /// Builds a stopped engine around a blank `height x width` board,
    /// ticking at [`DEFAULT_TICK_INTERVAL`] once started.
    pub fn new(height: usize, width: usize, observer: O) -> Result<Self, GridError> {
        Self::with_interval(height, width, DEFAULT_TICK_INTERVAL, observer)
    }

    /// Same as [`Engine::new`] with a custom tick interval.
    pub fn with_interval(
        height: usize,
        width: usize,
        interval: Duration,
        observer: O,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(height, width)?,
            observer,
            running: false,
            clock: TickClock::new(interval),
        })
    }

    /// Flips a cell and reports the resulting state to the observer.
    ///
    /// Unlike generational steps, which report deltas only, a manual toggle
    /// is always reported: a click is a user-visible change by definition.
    pub fn toggle_cell(&mut self, row: i64, col: i64) -> Result<(), GridError> {
        let alive = self.grid.toggle(row, col)?;
        self.observer
            .on_cell_changed(row as usize, col as usize, alive);
        Ok(())
    }

    /// Starts the generational clock: runs one tick immediately and arms
    /// the next. No effect while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        log::debug!("engine started");
        self.running = true;
        self.tick();
        self.clock.arm();
    }

    /// Stops the clock and cancels the pending tick, so an armed but
    /// not-yet-fired tick never runs. No effect while already stopped.
    /// The engine can be restarted afterwards.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        log::debug!("engine stopped");
        self.running = false;
        self.clock.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clock entry point, to be called from the host event loop.
    ///
    /// `running` is checked here as well as at arming time, so a deadline
    /// that was already armed when `stop` was called never fires.
    pub fn poll(&mut self) {
        if !self.running || !self.clock.due(Instant::now()) {
            return;
        }
        self.tick();
        if self.running {
            self.clock.arm();
        }
    }

    fn tick(&mut self) {
        let changes = self.grid.step();
        log::trace!("tick: {} cells changed", changes.len());
        for change in &changes {
            self.observer
                .on_cell_changed(change.row, change.col, change.alive);
        }
    }
}
