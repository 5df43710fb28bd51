mod gui;

pub use gui::{App, Config};
