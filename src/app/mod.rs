//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod state;

pub use command_log::CommandLog;
pub use controller::MarkerController;
pub use events::{MarkerCommand, MarkerEvent, MarkerIntent};
pub use state::{MarkerState, RuntimeBinding};
