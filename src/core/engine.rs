//! Boundary zur externen Karten-Engine: Handles, Deskriptoren und Trait.

use super::geometry::{LatLng, Size};
use glam::Vec2;
use indexmap::IndexMap;

/// Handle auf eine Host-Karte der Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapId(pub u64);

/// Handle auf ein Marker-Objekt der Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Handle auf ein Info-Fenster der Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoWindowId(pub u64);

/// Disposables Handle auf eine Event-Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Ziel-Objekt einer Event-Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// Registrierung auf einem Marker-Objekt
    Marker(MarkerId),
    /// Registrierung auf einem Info-Fenster
    InfoWindow(InfoWindowId),
}

/// Event-Art einer Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Klick auf den Marker
    Click,
    /// Klick auf das Schließen-Kreuz des Info-Fensters
    CloseClick,
}

/// Icon-Deskriptor für den Marker-Bau: URL plus optionale Style-Substrukturen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconDescriptor {
    /// Icon-URL (None = Engine-Standard)
    pub url: Option<String>,
    /// Expandierte Style-Overrides (None = keine Overrides)
    pub styles: Option<IconStyleSet>,
}

/// Expandierte Icon-Styles im Engine-Format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyleSet {
    /// Natürliche Icon-Größe
    pub size: Size,
    /// Skalierte Darstellungsgröße
    pub scaled_size: Size,
    /// Ankerpunkt relativ zur Icon-Fläche
    pub anchor: Vec2,
    /// Ursprung des Label-Texts auf dem Icon
    pub label_origin: Vec2,
}

/// Label-Deskriptor für den Marker-Bau: Text plus Style-Overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDescriptor {
    /// Label-Text (None = kein Label)
    pub text: Option<String>,
    /// Key-Value-Style-Overrides (z.B. color, fontSize)
    pub styles: IndexMap<String, String>,
}

/// Konstruktionsparameter für ein Marker-Objekt.
#[derive(Debug, Clone)]
pub struct MarkerOptions {
    /// Host-Karte, an die der Marker gehängt wird
    pub map: MapId,
    /// Startposition
    pub position: LatLng,
    /// Icon-Deskriptor
    pub icon: IconDescriptor,
    /// Label-Deskriptor
    pub label: LabelDescriptor,
    /// Stapelreihenfolge
    pub z_index: i64,
}

/// Schnittstelle zur externen Karten-Engine.
///
/// Alle Aufrufe sind synchron und deterministisch. `remove_listener`,
/// `clear_marker_listeners` und `discard_info_window` müssen auf bereits
/// freigegebenen Handles idempotent sein.
pub trait MapEngine {
    /// Prüft, ob das Handle auf eine gültige Karten-Instanz zeigt.
    fn is_valid_map(&self, map: MapId) -> bool;

    /// Baut ein Marker-Objekt und hängt es an die Host-Karte.
    ///
    /// Konstruktionsfehler der Engine werden nicht geschluckt, sondern an
    /// den Aufrufer durchgereicht.
    fn create_marker(&mut self, options: MarkerOptions) -> anyhow::Result<MarkerId>;

    /// Setzt die Position eines bestehenden Markers in place.
    fn set_marker_position(&mut self, marker: MarkerId, position: LatLng);

    /// Setzt den Label-Text eines bestehenden Markers in place.
    fn set_marker_label(&mut self, marker: MarkerId, label: Option<&str>);

    /// Setzt die Stapelreihenfolge eines bestehenden Markers in place.
    fn set_marker_z_index(&mut self, marker: MarkerId, z_index: i64);

    /// Löst den Marker von seiner Karte (das Objekt selbst bleibt bestehen).
    fn detach_marker(&mut self, marker: MarkerId);

    /// Entfernt alle Event-Registrierungen eines Markers.
    fn clear_marker_listeners(&mut self, marker: MarkerId);

    /// Baut ein leeres Info-Fenster.
    fn create_info_window(&mut self) -> InfoWindowId;

    /// Setzt den Inhalt eines Info-Fensters.
    fn set_info_content(&mut self, info: InfoWindowId, content: &str);

    /// Öffnet das Info-Fenster verankert am Marker.
    fn open_info(&mut self, info: InfoWindowId, map: MapId, marker: MarkerId);

    /// Schließt das Info-Fenster.
    fn close_info(&mut self, info: InfoWindowId);

    /// Gibt das Info-Fenster-Objekt endgültig frei.
    fn discard_info_window(&mut self, info: InfoWindowId);

    /// Registriert einen Event-Listener und liefert ein disposables Handle.
    fn add_listener(&mut self, target: EventTarget, event: EventKind) -> ListenerId;

    /// Entfernt eine Registrierung.
    fn remove_listener(&mut self, listener: ListenerId);
}
