//! Deklarative Marker-Synchronisation für externe Karten-Engines.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod sim;

pub use app::{
    CommandLog, MarkerCommand, MarkerController, MarkerEvent, MarkerIntent, MarkerState,
    RuntimeBinding,
};
pub use core::{
    ContentHost, EventKind, EventTarget, IconDescriptor, IconStyleSet, IconStyles, InfoWindowId,
    LabelDescriptor, LatLng, ListenerId, MapEngine, MapId, MarkerId, MarkerOptions, MarkerSpec,
    Size, WatchId,
};
pub use sim::{SimContentHost, SimMapEngine};
