//! Integrationstests für den Popup-Lifecycle:
//! - Content-Sync mit Listener-Verdrahtung
//! - Watch-Re-Arming und veraltete Zustellungen
//! - Open/Close mit Benachrichtigungen

use map_marker_sync::{
    EventTarget, MarkerController, MarkerEvent, MarkerIntent, MarkerState, SimContentHost,
    SimMapEngine, WatchId,
};
use serde_json::json;

fn setup() -> (MarkerController, MarkerState, SimMapEngine, SimContentHost) {
    let _ = env_logger::builder().is_test(true).try_init();
    (
        MarkerController::new(),
        MarkerState::new(),
        SimMapEngine::new(),
        SimContentHost::new(),
    )
}

fn attribute(name: &str, value: serde_json::Value) -> MarkerIntent {
    MarkerIntent::AttributeChanged {
        name: name.to_owned(),
        value,
    }
}

/// Stellt die aktuell armierte Watch als Mutations-Intent zu.
fn mutation(host: &SimContentHost) -> MarkerIntent {
    MarkerIntent::ContentMutated {
        watch: host.armed_watch().expect("Watch muss armiert sein"),
    }
}

#[test]
fn non_empty_content_creates_one_info_window_and_two_listeners() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("  Hallo Karte  ");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");

    let info = state.binding.info.expect("genau ein Info-Fenster");
    assert_eq!(engine.created_info_count(), 1);
    assert_eq!(engine.active_listener_count(), 2);
    assert_eq!(
        engine.info(info).unwrap().content,
        "Hallo Karte",
        "Inhalt wird getrimmt übernommen"
    );

    let marker = state.binding.marker.unwrap();
    assert_eq!(engine.listeners_on(EventTarget::Marker(marker)).len(), 1);
    assert_eq!(engine.listeners_on(EventTarget::InfoWindow(info)).len(), 1);
}

#[test]
fn leerer_inhalt_ergibt_kein_info_fenster() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("   \n  ");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");

    assert!(state.binding.info.is_none());
    assert!(state.binding.open_listener.is_none());
    assert!(state.binding.close_listener.is_none());
    assert_eq!(engine.created_info_count(), 0);
    assert_eq!(engine.active_listener_count(), 0);
    assert!(
        state.binding.content_watch.is_some(),
        "Watch ist trotzdem armiert"
    );
}

#[test]
fn repeated_sync_yields_fresh_info_and_listeners_without_leaks() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    let first_info = state.binding.info.unwrap();
    let first_watch = state.binding.content_watch.unwrap();

    let intent = mutation(&host);
    controller
        .handle_intent(&mut state, &mut engine, &mut host, intent)
        .expect("Re-Sync darf nicht fehlschlagen");

    let second_info = state.binding.info.expect("frisches Info-Fenster");
    assert_ne!(second_info, first_info);
    assert_ne!(state.binding.content_watch.unwrap(), first_watch);
    assert_eq!(engine.created_info_count(), 2);
    assert_eq!(engine.active_listener_count(), 2, "keine Listener-Leaks");
    assert!(engine.info(first_info).unwrap().discarded);
}

#[test]
fn veraltete_watch_zustellung_loest_keinen_sync_aus() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    let info = state.binding.info.unwrap();

    controller
        .handle_intent(
            &mut state,
            &mut engine,
            &mut host,
            MarkerIntent::ContentMutated { watch: WatchId(0) },
        )
        .expect("veraltete Zustellung ist kein Fehler");

    assert_eq!(state.binding.info, Some(info), "kein Re-Sync");
    assert_eq!(engine.created_info_count(), 1);
}

#[test]
fn cleared_content_drops_info_window_and_listeners() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");

    host.set_content("");
    let intent = mutation(&host);
    controller
        .handle_intent(&mut state, &mut engine, &mut host, intent)
        .expect("Sync darf nicht fehlschlagen");

    assert!(state.binding.info.is_none(), "leeres Info-Fenster wird nicht am Leben gehalten");
    assert_eq!(engine.active_listener_count(), 0);
}

#[test]
fn open_without_info_window_emits_nothing() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, &mut engine, &mut host, attribute("open", json!(true)))
        .expect("Open ohne Inhalt ist kein Fehler");

    assert!(state.drain_events().is_empty(), "keine Benachrichtigung");
    assert!(state.spec.open, "Flag bleibt für später erhalten");
}

#[test]
fn open_with_info_window_emits_exactly_one_opened_event() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, &mut engine, &mut host, attribute("open", json!(true)))
        .expect("Open darf nicht fehlschlagen");

    assert_eq!(state.drain_events(), vec![MarkerEvent::Opened]);
    let info = state.binding.info.unwrap();
    assert!(engine.info(info).unwrap().is_open, "Popup ist sichtbar");
    assert_eq!(
        engine.info(info).unwrap().anchor,
        state.binding.marker,
        "am Marker verankert"
    );
}

#[test]
fn marker_click_round_trips_to_opened_popup() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MarkerClicked)
        .expect("Klick darf nicht fehlschlagen");

    assert!(state.spec.open);
    assert_eq!(state.drain_events(), vec![MarkerEvent::Opened]);
    assert!(engine.info(state.binding.info.unwrap()).unwrap().is_open);
}

#[test]
fn close_click_closes_popup_and_emits_closed() {
    let (mut controller, mut state, mut engine, mut host) = setup();
    let map = engine.register_map();
    host.set_content("Hallo");

    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MapAttached { map })
        .expect("Attach darf nicht fehlschlagen");
    controller
        .handle_intent(&mut state, &mut engine, &mut host, MarkerIntent::MarkerClicked)
        .expect("Klick darf nicht fehlschlagen");
    state.drain_events();

    controller
        .handle_intent(
            &mut state,
            &mut engine,
            &mut host,
            MarkerIntent::InfoWindowCloseClicked,
        )
        .expect("Schließen darf nicht fehlschlagen");

    assert!(!state.spec.open);
    assert_eq!(state.drain_events(), vec![MarkerEvent::Closed]);
    assert!(!engine.info(state.binding.info.unwrap()).unwrap().is_open);
}
