//! Feature-Handler für Marker- und Popup-Lifecycle.

pub mod marker;
pub mod popup;
