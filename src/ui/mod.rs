//! Terminal UI: a full-screen board with mouse placement and keyboard
//! cursor play.

mod app;
mod game_view;

pub use app::App;
