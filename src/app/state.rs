//! Marker State — deklarativer Soll-Zustand plus Runtime-Binding.

use super::events::MarkerEvent;
use super::CommandLog;
use crate::core::{InfoWindowId, ListenerId, MapId, MarkerId, MarkerSpec, WatchId};

/// Live-Referenzen auf Engine-Objekte.
///
/// Exklusiv im Besitz genau eines Controllers; wird bei jedem Rebuild
/// abgeräumt und neu befüllt, nie von außen mutiert.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeBinding {
    /// Host-Karte (None = detached)
    pub map: Option<MapId>,
    /// Marker-Objekt (existiert nur bei gültiger Host-Karte)
    pub marker: Option<MarkerId>,
    /// Info-Fenster (existiert nur bei Marker plus nicht-leerem Inhalt)
    pub info: Option<InfoWindowId>,
    /// Aktive Content-Watch (wird bei jedem Sync neu registriert)
    pub content_watch: Option<WatchId>,
    /// Listener "Marker-Klick → open"
    pub open_listener: Option<ListenerId>,
    /// Listener "Info-Fenster geschlossen → close"
    pub close_listener: Option<ListenerId>,
}

/// Gesamtzustand eines Marker-Controllers.
#[derive(Default)]
pub struct MarkerState {
    /// Deklarativer Soll-Zustand
    pub spec: MarkerSpec,
    /// Live-Engine-Referenzen
    pub binding: RuntimeBinding,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
    /// Ausstehende Benachrichtigungen an den Host
    pending_events: Vec<MarkerEvent>,
}

impl MarkerState {
    /// Erstellt einen detachten Zustand mit Standard-Spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen detachten Zustand mit vorgegebenem Spec.
    pub fn with_spec(spec: MarkerSpec) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    /// Stellt eine Benachrichtigung für den Host ein.
    pub fn push_event(&mut self, event: MarkerEvent) {
        self.pending_events.push(event);
    }

    /// Entnimmt alle ausstehenden Benachrichtigungen in Reihenfolge.
    pub fn drain_events(&mut self) -> Vec<MarkerEvent> {
        self.pending_events.drain(..).collect()
    }

    /// Read-only Sicht auf die ausstehenden Benachrichtigungen.
    pub fn pending_events(&self) -> &[MarkerEvent] {
        &self.pending_events
    }
}
