//! Core-Domänentypen und Boundaries: MarkerSpec, Engine- und Content-Schnittstelle.

pub mod content;
pub mod engine;
pub mod geometry;
pub mod marker_spec;

pub use content::{ContentHost, WatchId};
pub use engine::{
    EventKind, EventTarget, IconDescriptor, IconStyleSet, InfoWindowId, LabelDescriptor,
    ListenerId, MapEngine, MapId, MarkerId, MarkerOptions,
};
pub use geometry::{LatLng, Size};
pub use marker_spec::{Dimensions, IconStyles, MarkerSpec, PointSpec};
