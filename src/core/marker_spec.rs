//! Deklarativer Marker-Zustand und Icon-Style-Records.

use super::engine::IconStyleSet;
use super::geometry::{LatLng, Size};
use glam::Vec2;
use indexmap::IndexMap;
use serde::Deserialize;

/// Deklarative Beschreibung eines Map-Markers.
///
/// Wird vom Attribut-Layer beschrieben; die Engine-Objekte werden diesem
/// Soll-Zustand nachgezogen. Alle Felder sind jederzeit extern setzbar.
#[derive(Debug, Clone, Default)]
pub struct MarkerSpec {
    /// Breitengrad
    pub latitude: f64,
    /// Längengrad
    pub longitude: f64,
    /// Label-Text (None = kein Label)
    pub label: Option<String>,
    /// Label-Style-Overrides (z.B. color, fontSize)
    pub label_styles: IndexMap<String, String>,
    /// Stapelreihenfolge auf der Karte
    pub z_index: i64,
    /// Soll-Zustand des Info-Fensters (offen/geschlossen)
    pub open: bool,
    /// Icon-URL (None = Engine-Standard)
    pub icon: Option<String>,
    /// Icon-Style-Overrides, roh wie vom Attribut-Layer geliefert.
    /// Wird erst beim Marker-Bau expandiert; unvollständige Records
    /// schlagen dort als Konstruktionsfehler durch.
    pub icon_styles: Option<serde_json::Value>,
}

impl MarkerSpec {
    /// Erstellt einen Spec mit Standardwerten (Position 0/0, alles leer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Soll-Position.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Typisierte Icon-Style-Overrides im Attribut-Format.
#[derive(Debug, Clone, Deserialize)]
pub struct IconStyles {
    /// Natürliche Icon-Größe
    pub size: Dimensions,
    /// Skalierte Darstellungsgröße
    #[serde(rename = "scaledSize")]
    pub scaled_size: Dimensions,
    /// Ankerpunkt
    pub anchor: PointSpec,
    /// Ursprung des Label-Texts
    #[serde(rename = "labelOrigin")]
    pub label_origin: PointSpec,
}

/// Breite/Höhe-Paar im Attribut-Format.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

/// x/y-Paar im Attribut-Format.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointSpec {
    pub x: f32,
    pub y: f32,
}

impl IconStyles {
    /// Expandiert die Attribut-Records in die Engine-Substrukturen.
    pub fn expand(&self) -> IconStyleSet {
        IconStyleSet {
            size: Size::new(self.size.width, self.size.height),
            scaled_size: Size::new(self.scaled_size.width, self.scaled_size.height),
            anchor: Vec2::new(self.anchor.x, self.anchor.y),
            label_origin: Vec2::new(self.label_origin.x, self.label_origin.y),
        }
    }
}
