//! Inspektierbare In-Memory-Implementierung der Engine-Boundary.

use crate::core::{
    EventKind, EventTarget, InfoWindowId, LatLng, ListenerId, MapEngine, MapId, MarkerId,
    MarkerOptions,
};
use crate::core::{IconDescriptor, LabelDescriptor};
use indexmap::IndexMap;

/// Aufgezeichneter Zustand eines Marker-Objekts.
#[derive(Debug, Clone)]
pub struct SimMarker {
    /// Karte, an der der Marker hängt (None nach Detach)
    pub map: Option<MapId>,
    /// Aktuelle Position
    pub position: LatLng,
    /// Icon-Deskriptor aus dem Bau
    pub icon: IconDescriptor,
    /// Label-Deskriptor (Text wird von `set_marker_label` überschrieben)
    pub label: LabelDescriptor,
    /// Stapelreihenfolge
    pub z_index: i64,
}

/// Aufgezeichneter Zustand eines Info-Fensters.
#[derive(Debug, Clone, Default)]
pub struct SimInfoWindow {
    /// Aktueller Inhalt
    pub content: String,
    /// Sichtbarkeit
    pub is_open: bool,
    /// Marker, an dem das Fenster zuletzt geöffnet wurde
    pub anchor: Option<MarkerId>,
    /// true nach `discard_info_window`
    pub discarded: bool,
}

/// Eine aktive Event-Registrierung.
#[derive(Debug, Clone, Copy)]
pub struct SimListener {
    /// Ziel-Objekt
    pub target: EventTarget,
    /// Event-Art
    pub event: EventKind,
}

/// In-Memory-Karten-Engine für Tests und Demos.
///
/// Objekte bleiben nach Detach/Discard inspektierbar; Identitätsprüfungen
/// laufen über die fortlaufend vergebenen Handles.
#[derive(Default)]
pub struct SimMapEngine {
    next_id: u64,
    maps: Vec<MapId>,
    markers: IndexMap<u64, SimMarker>,
    infos: IndexMap<u64, SimInfoWindow>,
    listeners: IndexMap<u64, SimListener>,
}

impl SimMapEngine {
    /// Erstellt eine leere Engine ohne registrierte Karten.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registriert eine neue Host-Karte und liefert ihr Handle.
    pub fn register_map(&mut self) -> MapId {
        let map = MapId(self.bump());
        self.maps.push(map);
        map
    }

    /// Anzahl jemals gebauter Marker (für Identitätsprüfungen).
    pub fn created_marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl jemals gebauter Info-Fenster.
    pub fn created_info_count(&self) -> usize {
        self.infos.len()
    }

    /// Aufgezeichneter Marker-Zustand.
    pub fn marker(&self, marker: MarkerId) -> Option<&SimMarker> {
        self.markers.get(&marker.0)
    }

    /// Aufgezeichneter Info-Fenster-Zustand.
    pub fn info(&self, info: InfoWindowId) -> Option<&SimInfoWindow> {
        self.infos.get(&info.0)
    }

    /// Anzahl aktuell aktiver Event-Registrierungen.
    pub fn active_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Aktive Registrierungen auf einem Ziel-Objekt.
    pub fn listeners_on(&self, target: EventTarget) -> Vec<SimListener> {
        self.listeners
            .values()
            .filter(|l| l.target == target)
            .copied()
            .collect()
    }
}

impl MapEngine for SimMapEngine {
    fn is_valid_map(&self, map: MapId) -> bool {
        self.maps.contains(&map)
    }

    fn create_marker(&mut self, options: MarkerOptions) -> anyhow::Result<MarkerId> {
        let id = self.bump();
        self.markers.insert(
            id,
            SimMarker {
                map: Some(options.map),
                position: options.position,
                icon: options.icon,
                label: options.label,
                z_index: options.z_index,
            },
        );
        Ok(MarkerId(id))
    }

    fn set_marker_position(&mut self, marker: MarkerId, position: LatLng) {
        if let Some(m) = self.markers.get_mut(&marker.0) {
            m.position = position;
        }
    }

    fn set_marker_label(&mut self, marker: MarkerId, label: Option<&str>) {
        if let Some(m) = self.markers.get_mut(&marker.0) {
            m.label.text = label.map(str::to_owned);
        }
    }

    fn set_marker_z_index(&mut self, marker: MarkerId, z_index: i64) {
        if let Some(m) = self.markers.get_mut(&marker.0) {
            m.z_index = z_index;
        }
    }

    fn detach_marker(&mut self, marker: MarkerId) {
        if let Some(m) = self.markers.get_mut(&marker.0) {
            m.map = None;
        }
    }

    fn clear_marker_listeners(&mut self, marker: MarkerId) {
        self.listeners
            .retain(|_, l| l.target != EventTarget::Marker(marker));
    }

    fn create_info_window(&mut self) -> InfoWindowId {
        let id = self.bump();
        self.infos.insert(id, SimInfoWindow::default());
        InfoWindowId(id)
    }

    fn set_info_content(&mut self, info: InfoWindowId, content: &str) {
        if let Some(i) = self.infos.get_mut(&info.0) {
            i.content = content.to_owned();
        }
    }

    fn open_info(&mut self, info: InfoWindowId, _map: MapId, marker: MarkerId) {
        if let Some(i) = self.infos.get_mut(&info.0) {
            i.is_open = true;
            i.anchor = Some(marker);
        }
    }

    fn close_info(&mut self, info: InfoWindowId) {
        if let Some(i) = self.infos.get_mut(&info.0) {
            i.is_open = false;
        }
    }

    fn discard_info_window(&mut self, info: InfoWindowId) {
        if let Some(i) = self.infos.get_mut(&info.0) {
            i.is_open = false;
            i.discarded = true;
        }
    }

    fn add_listener(&mut self, target: EventTarget, event: EventKind) -> ListenerId {
        let id = self.bump();
        self.listeners.insert(id, SimListener { target, event });
        ListenerId(id)
    }

    fn remove_listener(&mut self, listener: ListenerId) {
        // Idempotent: unbekannte Handles werden ignoriert
        self.listeners.shift_remove(&listener.0);
    }
}
