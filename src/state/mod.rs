//! Application state module

mod app_state;
mod forms;
mod notifications;
mod wizard;

pub use app_state::*;
pub use forms::*;
pub use notifications::*;
