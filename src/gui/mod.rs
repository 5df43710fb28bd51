mod app;
mod board_view;
mod config;
mod draw;
mod fps_limit;

pub use app::App;
use board_view::{BoardView, SharedBoard};
pub use config::Config;
use fps_limit::FpsLimiter;
