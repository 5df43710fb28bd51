#![warn(clippy::all, clippy::cargo)]

mod clock;
mod engine;
mod error;
mod grid;
mod observer;

pub use engine::Engine;
pub use error::GridError;
pub use grid::{CellChange, Grid};
pub use observer::CellObserver;

use std::time::Duration;

/// Nominal period of the generational clock.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
