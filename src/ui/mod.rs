//! TUI module for the board generator.

mod app;
pub mod theme;
mod widgets;

pub use app::App;
