//! In-Memory-Content-Host mit one-shot Watch-Semantik.

use crate::core::{ContentHost, WatchId};

/// Simulierter Inhalts-Teilbaum der Komponente.
#[derive(Default)]
pub struct SimContentHost {
    content: String,
    next_watch: u64,
    armed: Option<WatchId>,
}

impl SimContentHost {
    /// Erstellt einen leeren Content-Host ohne aktive Watch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt den eingebetteten Inhalt (entspricht einer DOM-Mutation).
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Aktuell aktive Watch (zum Zustellen von Mutations-Intents).
    pub fn armed_watch(&self) -> Option<WatchId> {
        self.armed
    }
}

impl ContentHost for SimContentHost {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn observe(&mut self) -> WatchId {
        self.next_watch += 1;
        let watch = WatchId(self.next_watch);
        self.armed = Some(watch);
        watch
    }

    fn disconnect(&mut self, watch: WatchId) {
        // Idempotent: nur die noch aktive Watch wird gelöst
        if self.armed == Some(watch) {
            self.armed = None;
        }
    }
}
