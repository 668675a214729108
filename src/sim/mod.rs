//! In-Memory-Engine und Content-Host für Tests und Demos.

pub mod content;
pub mod engine;

pub use content::SimContentHost;
pub use engine::{SimInfoWindow, SimListener, SimMapEngine, SimMarker};
