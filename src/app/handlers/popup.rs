//! Handler für den Popup-Lifecycle: Content-Sync und Open/Close.

use crate::app::{MarkerEvent, MarkerState};
use crate::core::{ContentHost, EventKind, EventTarget, MapEngine};

/// Synchronisiert das Info-Fenster gegen den eingebetteten Inhalt.
///
/// Räumt immer zuerst das alte Listener-Paar ab, bevor neu verdrahtet wird;
/// ein Rebuild hinterlässt dadurch nie zwei aktive Paare.
pub fn sync_content(
    state: &mut MarkerState,
    engine: &mut dyn MapEngine,
    host: &mut dyn ContentHost,
) -> anyhow::Result<()> {
    // Watch neu registrieren (one-shot im darunterliegenden Mechanismus)
    if let Some(watch) = state.binding.content_watch.take() {
        host.disconnect(watch);
    }
    state.binding.content_watch = Some(host.observe());

    let content = host.content();
    let trimmed = content.trim();

    // Ein Info-Fenster ohne Inhalt wird nie am Leben gehalten
    release_info(state, engine);

    let Some(marker) = state.binding.marker else {
        return Ok(());
    };
    if trimmed.is_empty() {
        log::debug!("Leerer Inhalt, kein Info-Fenster");
        return Ok(());
    }

    let info = engine.create_info_window();
    engine.set_info_content(info, trimmed);
    state.binding.open_listener =
        Some(engine.add_listener(EventTarget::Marker(marker), EventKind::Click));
    state.binding.close_listener =
        Some(engine.add_listener(EventTarget::InfoWindow(info), EventKind::CloseClick));
    state.binding.info = Some(info);
    log::info!(
        "Info-Fenster {info:?} mit {} Zeichen Inhalt verdrahtet",
        trimmed.len()
    );

    Ok(())
}

/// Setzt das Open-Flag im Soll-Zustand.
pub fn set_open(state: &mut MarkerState, value: bool) {
    state.spec.open = value;
}

/// Wendet das Open-Flag auf das Info-Fenster an.
///
/// Ohne Info-Fenster ist das Flag wirkungslos (kein Inhalt, kein Popup);
/// es bleibt im Soll-Zustand erhalten und greift erst, wenn wieder ein
/// Info-Fenster existiert und das Flag erneut angewendet wird.
pub fn apply_open_state(state: &mut MarkerState, engine: &mut dyn MapEngine) {
    let Some(info) = state.binding.info else {
        return;
    };

    if state.spec.open {
        // Info-Fenster existiert nur bei vorhandenem Marker auf gültiger Karte
        if let (Some(map), Some(marker)) = (state.binding.map, state.binding.marker) {
            engine.open_info(info, map, marker);
            state.push_event(MarkerEvent::Opened);
        }
    } else {
        engine.close_info(info);
        state.push_event(MarkerEvent::Closed);
    }
}

/// Gibt Listener-Paar und Info-Fenster frei. Idempotent.
pub fn release_info(state: &mut MarkerState, engine: &mut dyn MapEngine) {
    if let Some(listener) = state.binding.open_listener.take() {
        engine.remove_listener(listener);
    }
    if let Some(listener) = state.binding.close_listener.take() {
        engine.remove_listener(listener);
    }
    if let Some(info) = state.binding.info.take() {
        engine.discard_info_window(info);
    }
}
