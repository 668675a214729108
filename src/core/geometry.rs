//! Geometrie-Grundtypen für Marker-Position und Icon-Maße.

use serde::{Deserialize, Serialize};

/// Geografische Position eines Markers (Breiten-/Längengrad).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Position aus Breiten- und Längengrad.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Pixelmaße eines Icons (Breite × Höhe).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Erstellt ein Maß aus Breite und Höhe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
