//! Terminal UI: board rendering, column selection, and mouse input for
//! playing Connect Four.

mod app;
mod game_view;

pub use app::App;
