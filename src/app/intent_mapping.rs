//! Mapping von Intents auf mutierende Marker-Commands (Attribute Reactor).
//!
//! Wählt pro geändertem Feld die schmalste gültige Korrektur: billige,
//! häufige Änderungen (Position, Label, Reihenfolge) werden in place
//! nachgezogen, strukturelle Änderungen (Icon, Styles, Karte) lösen das
//! Rebuild-Protokoll aus.

use super::{MarkerCommand, MarkerIntent, MarkerState};
use indexmap::IndexMap;
use serde_json::Value;

/// Übersetzt einen `MarkerIntent` in eine Sequenz ausführbarer `MarkerCommand`s.
pub fn map_intent_to_commands(state: &MarkerState, intent: MarkerIntent) -> Vec<MarkerCommand> {
    match intent {
        MarkerIntent::AttributeChanged { name, value } => map_attribute_change(&name, value),
        MarkerIntent::MapAttached { map } => vec![MarkerCommand::AttachMap { map: Some(map) }],
        MarkerIntent::MapDetached => vec![MarkerCommand::AttachMap { map: None }],
        MarkerIntent::MarkerClicked => vec![
            MarkerCommand::SetOpen { value: true },
            MarkerCommand::ApplyOpenState,
        ],
        MarkerIntent::InfoWindowCloseClicked => vec![
            MarkerCommand::SetOpen { value: false },
            MarkerCommand::ApplyOpenState,
        ],
        MarkerIntent::ContentMutated { watch } => {
            if state.binding.content_watch == Some(watch) {
                vec![MarkerCommand::SyncContent]
            } else {
                // One-shot-Watch: Zustellung für eine abgelöste Registrierung
                log::debug!("Veraltete Content-Watch {watch:?} ignoriert");
                vec![]
            }
        }
        MarkerIntent::TeardownRequested => vec![MarkerCommand::Teardown],
    }
}

/// Mappt eine einzelne Attribut-Änderung auf ihre Korrektur-Commands.
fn map_attribute_change(name: &str, value: Value) -> Vec<MarkerCommand> {
    match name {
        "latitude" => match value.as_f64() {
            Some(lat) => vec![
                MarkerCommand::SetLatitude { value: lat },
                MarkerCommand::UpdatePosition,
            ],
            None => {
                log::debug!("latitude mit nicht-numerischem Wert ignoriert: {value}");
                vec![]
            }
        },
        "longitude" => match value.as_f64() {
            Some(lng) => vec![
                MarkerCommand::SetLongitude { value: lng },
                MarkerCommand::UpdatePosition,
            ],
            None => {
                log::debug!("longitude mit nicht-numerischem Wert ignoriert: {value}");
                vec![]
            }
        },
        "label" => vec![
            MarkerCommand::SetLabel {
                value: value.as_str().map(str::to_owned),
            },
            MarkerCommand::UpdateLabel,
        ],
        "z-index" => match value.as_f64() {
            Some(z) => vec![
                MarkerCommand::SetZIndex { value: z as i64 },
                MarkerCommand::UpdateZIndex,
            ],
            None => {
                log::debug!("z-index mit nicht-numerischem Wert ignoriert: {value}");
                vec![]
            }
        },
        // Nicht-boolesche Werte gelten als falsy (permissiv wie das
        // Attribut-Format selbst)
        "open" => vec![
            MarkerCommand::SetOpen {
                value: value.as_bool().unwrap_or(false),
            },
            MarkerCommand::ApplyOpenState,
        ],
        "label-style-overrides" => vec![
            MarkerCommand::SetLabelStyles {
                styles: parse_style_map(value),
            },
            MarkerCommand::RebuildMarker,
        ],
        "icon" => vec![
            MarkerCommand::SetIcon {
                url: value.as_str().map(str::to_owned),
            },
            MarkerCommand::RebuildMarker,
        ],
        "icon-style-overrides" => {
            let value = if value.is_null() { None } else { Some(value) };
            vec![
                MarkerCommand::SetIconStyles { value },
                MarkerCommand::RebuildMarker,
            ]
        }
        other => {
            log::debug!("Unbekanntes Attribut ignoriert: {other}");
            vec![]
        }
    }
}

/// Liest ein Key-Value-Style-Record; fehlerhafte Records ergeben eine leere Map.
fn parse_style_map(value: Value) -> IndexMap<String, String> {
    serde_json::from_value(value).unwrap_or_default()
}
