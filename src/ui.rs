//! Text menu front-end. The loop lives in `terminal`, per-entry behavior in
//! `app`, and the menu entries plus prompt text in `forms`.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use forms::MenuChoice;
pub use terminal::{run_app, run_with, Console};
