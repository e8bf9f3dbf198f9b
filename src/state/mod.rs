//! Application state module

mod app_state;
pub mod catalog;
mod forms;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use splash_state::*;
