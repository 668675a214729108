//! Marker Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping};
use super::{MarkerCommand, MarkerIntent, MarkerState};
use crate::core::{ContentHost, MapEngine};

/// Orchestriert Intents und Lifecycle-Routinen auf dem MarkerState.
#[derive(Default)]
pub struct MarkerController;

impl MarkerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut MarkerState,
        engine: &mut dyn MapEngine,
        host: &mut dyn ContentHost,
        intent: MarkerIntent,
    ) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, engine, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem MarkerState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut MarkerState,
        engine: &mut dyn MapEngine,
        host: &mut dyn ContentHost,
        command: MarkerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Spec-Felder ===
            MarkerCommand::SetLatitude { value } => handlers::marker::set_latitude(state, value),
            MarkerCommand::SetLongitude { value } => handlers::marker::set_longitude(state, value),
            MarkerCommand::SetLabel { value } => handlers::marker::set_label(state, value),
            MarkerCommand::SetZIndex { value } => handlers::marker::set_z_index(state, value),
            MarkerCommand::SetLabelStyles { styles } => {
                handlers::marker::set_label_styles(state, styles)
            }
            MarkerCommand::SetIcon { url } => handlers::marker::set_icon(state, url),
            MarkerCommand::SetIconStyles { value } => {
                handlers::marker::set_icon_styles(state, value)
            }
            MarkerCommand::SetOpen { value } => handlers::popup::set_open(state, value),

            // === In-Place-Updates ===
            MarkerCommand::UpdatePosition => handlers::marker::update_position(state, engine),
            MarkerCommand::UpdateLabel => handlers::marker::update_label(state, engine),
            MarkerCommand::UpdateZIndex => handlers::marker::update_z_index(state, engine),

            // === Lifecycle ===
            MarkerCommand::AttachMap { map } => {
                handlers::marker::attach_to_map(state, engine, host, map)?
            }
            MarkerCommand::RebuildMarker => handlers::marker::rebuild(state, engine, host)?,
            MarkerCommand::SyncContent => handlers::popup::sync_content(state, engine, host)?,
            MarkerCommand::ApplyOpenState => handlers::popup::apply_open_state(state, engine),
            MarkerCommand::Teardown => handlers::marker::teardown(state, engine, host),
        }

        Ok(())
    }
}
