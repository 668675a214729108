//! MarkerIntent- und MarkerCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{MapId, WatchId};
use indexmap::IndexMap;
use serde_json::Value;

/// Eingaben aus Attribut-Layer, Karten-Container und Engine-Events.
/// Intents enthalten keine Mutationslogik.
#[derive(Debug, Clone)]
pub enum MarkerIntent {
    /// Ein deklaratives Attribut wurde geschrieben (Roh-Wert vom Reflection-Layer)
    AttributeChanged { name: String, value: Value },
    /// Komponente wurde in einen Karten-Kontext eingefügt
    MapAttached { map: MapId },
    /// Komponente wurde aus dem Karten-Kontext entfernt
    MapDetached,
    /// Engine-Event: Marker wurde angeklickt
    MarkerClicked,
    /// Engine-Event: Schließen-Kreuz des Info-Fensters wurde angeklickt
    InfoWindowCloseClicked,
    /// Content-Watch meldet eine Mutation im Inhalts-Teilbaum
    ContentMutated { watch: WatchId },
    /// Komponente wird zerstört, Controller abbauen
    TeardownRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum MarkerCommand {
    /// Breitengrad im Soll-Zustand setzen
    SetLatitude { value: f64 },
    /// Längengrad im Soll-Zustand setzen
    SetLongitude { value: f64 },
    /// Marker-Position in place nachziehen (kein Rebuild)
    UpdatePosition,
    /// Label-Text im Soll-Zustand setzen
    SetLabel { value: Option<String> },
    /// Label-Text in place nachziehen
    UpdateLabel,
    /// Stapelreihenfolge im Soll-Zustand setzen
    SetZIndex { value: i64 },
    /// Stapelreihenfolge in place nachziehen
    UpdateZIndex,
    /// Label-Style-Overrides setzen (wirksam beim nächsten Rebuild)
    SetLabelStyles { styles: IndexMap<String, String> },
    /// Icon-URL setzen (wirksam beim nächsten Rebuild)
    SetIcon { url: Option<String> },
    /// Rohe Icon-Style-Overrides setzen (wirksam beim nächsten Rebuild)
    SetIconStyles { value: Option<Value> },
    /// Open-Flag im Soll-Zustand setzen
    SetOpen { value: bool },
    /// Open-Flag auf das Info-Fenster anwenden
    ApplyOpenState,
    /// Host-Karte wechseln (None = Detach) und Marker neu bauen
    AttachMap { map: Option<MapId> },
    /// Marker gegen die aktuell hinterlegte Karte neu bauen
    RebuildMarker,
    /// Info-Fenster gegen den aktuellen Inhalt synchronisieren
    SyncContent,
    /// Vollständiger Abbau: Marker, Listener, Info-Fenster, Watch
    Teardown,
}

/// Nach außen sichtbare Benachrichtigungen des Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEvent {
    /// Info-Fenster wurde geöffnet (`marker-open`)
    Opened,
    /// Info-Fenster wurde geschlossen (`marker-close`)
    Closed,
}
