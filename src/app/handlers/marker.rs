//! Handler für den Marker-Lifecycle: In-Place-Updates und Rebuild-Protokoll.

use super::popup;
use crate::app::MarkerState;
use crate::core::{
    ContentHost, IconDescriptor, IconStyles, LabelDescriptor, MapEngine, MapId, MarkerOptions,
    MarkerSpec,
};
use anyhow::Context;
use indexmap::IndexMap;

/// Setzt den Breitengrad im Soll-Zustand.
pub fn set_latitude(state: &mut MarkerState, value: f64) {
    state.spec.latitude = value;
}

/// Setzt den Längengrad im Soll-Zustand.
pub fn set_longitude(state: &mut MarkerState, value: f64) {
    state.spec.longitude = value;
}

/// Setzt den Label-Text im Soll-Zustand.
pub fn set_label(state: &mut MarkerState, value: Option<String>) {
    state.spec.label = value;
}

/// Setzt die Stapelreihenfolge im Soll-Zustand.
pub fn set_z_index(state: &mut MarkerState, value: i64) {
    state.spec.z_index = value;
}

/// Hinterlegt Label-Style-Overrides (wirksam beim nächsten Rebuild).
pub fn set_label_styles(state: &mut MarkerState, styles: IndexMap<String, String>) {
    state.spec.label_styles = styles;
}

/// Hinterlegt die Icon-URL (wirksam beim nächsten Rebuild).
pub fn set_icon(state: &mut MarkerState, url: Option<String>) {
    state.spec.icon = url;
}

/// Hinterlegt rohe Icon-Style-Overrides (wirksam beim nächsten Rebuild).
pub fn set_icon_styles(state: &mut MarkerState, value: Option<serde_json::Value>) {
    state.spec.icon_styles = value;
}

/// Zieht die Marker-Position in place nach. No-op ohne Marker.
pub fn update_position(state: &mut MarkerState, engine: &mut dyn MapEngine) {
    if let Some(marker) = state.binding.marker {
        engine.set_marker_position(marker, state.spec.position());
    }
}

/// Zieht den Label-Text in place nach. No-op ohne Marker.
pub fn update_label(state: &mut MarkerState, engine: &mut dyn MapEngine) {
    if let Some(marker) = state.binding.marker {
        engine.set_marker_label(marker, state.spec.label.as_deref());
    }
}

/// Zieht die Stapelreihenfolge in place nach. No-op ohne Marker.
pub fn update_z_index(state: &mut MarkerState, engine: &mut dyn MapEngine) {
    if let Some(marker) = state.binding.marker {
        engine.set_marker_z_index(marker, state.spec.z_index);
    }
}

/// Wechselt die Host-Karte und baut den Marker neu (Rebuild-Protokoll).
///
/// Reihenfolge: erst den alten Marker samt Listenern und Info-Fenster
/// abräumen, dann die neue Karte übernehmen, dann bauen. None oder eine
/// ungültige Karte ist der reguläre Detached-Zustand, kein Fehler; der
/// Soll-Zustand bleibt für einen späteren Attach erhalten.
pub fn attach_to_map(
    state: &mut MarkerState,
    engine: &mut dyn MapEngine,
    host: &mut dyn ContentHost,
    map: Option<MapId>,
) -> anyhow::Result<()> {
    if let Some(marker) = state.binding.marker.take() {
        engine.detach_marker(marker);
        engine.clear_marker_listeners(marker);
    }
    // Das Listener-Paar gehört zum alten Marker/Info-Paar
    popup::release_info(state, engine);

    state.binding.map = map;
    let Some(map) = map else {
        log::info!("Marker detached (keine Host-Karte)");
        return Ok(());
    };
    if !engine.is_valid_map(map) {
        log::warn!("Host-Karte {map:?} ist keine gültige Instanz, Marker bleibt detached");
        return Ok(());
    }

    let options = build_marker_options(&state.spec, map)?;
    let marker = engine.create_marker(options)?;
    state.binding.marker = Some(marker);
    log::info!("Marker {marker:?} an Karte {map:?} gebaut");

    // Das Popup muss gegen das neue Marker-Objekt neu verdrahtet werden
    popup::sync_content(state, engine, host)
}

/// Baut den Marker gegen die aktuell hinterlegte Karte neu.
pub fn rebuild(
    state: &mut MarkerState,
    engine: &mut dyn MapEngine,
    host: &mut dyn ContentHost,
) -> anyhow::Result<()> {
    let map = state.binding.map;
    attach_to_map(state, engine, host, map)
}

/// Einmaliger Abbau beim Zerstören der Komponente.
///
/// Identische Abräum-Sequenz wie der Rebuild, zusätzlich wird die
/// Content-Watch gelöst. Der Soll-Zustand bleibt unangetastet.
pub fn teardown(
    state: &mut MarkerState,
    engine: &mut dyn MapEngine,
    host: &mut dyn ContentHost,
) {
    if let Some(marker) = state.binding.marker.take() {
        engine.detach_marker(marker);
        engine.clear_marker_listeners(marker);
    }
    popup::release_info(state, engine);
    if let Some(watch) = state.binding.content_watch.take() {
        host.disconnect(watch);
    }
    state.binding.map = None;
    log::info!("Marker-Controller abgebaut");
}

/// Baut die Engine-Konstruktionsparameter aus dem Soll-Zustand.
///
/// Unvollständige icon-style-overrides sind eine Contract-Verletzung des
/// Aufrufers und schlagen hier als Konstruktionsfehler durch.
fn build_marker_options(spec: &MarkerSpec, map: MapId) -> anyhow::Result<MarkerOptions> {
    let styles = match &spec.icon_styles {
        Some(raw) => {
            let parsed: IconStyles = serde_json::from_value(raw.clone()).context(
                "icon-style-overrides: erwartet size/scaledSize/anchor/labelOrigin",
            )?;
            Some(parsed.expand())
        }
        None => None,
    };

    Ok(MarkerOptions {
        map,
        position: spec.position(),
        icon: IconDescriptor {
            url: spec.icon.clone(),
            styles,
        },
        label: LabelDescriptor {
            text: spec.label.clone(),
            styles: spec.label_styles.clone(),
        },
        z_index: spec.z_index,
    })
}
