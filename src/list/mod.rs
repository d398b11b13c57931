pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{ListController, ListSnapshot};
pub use state::ListState;
