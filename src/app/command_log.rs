//! Geordnetes Log ausgeführter Commands für Diagnose und Test-Introspektion.

use super::MarkerCommand;

/// Begrenzter, geordneter Verlauf aller ausgeführten Commands.
///
/// Läuft das Log voll, wird die ältere Hälfte verworfen; die jüngste
/// Historie bleibt damit immer nachvollziehbar.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<MarkerCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &MarkerCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert den zuletzt ausgeführten Command.
    pub fn last(&self) -> Option<&MarkerCommand> {
        self.entries.last()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[MarkerCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_haelt_reihenfolge_und_last() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        log.record(&MarkerCommand::UpdatePosition);
        log.record(&MarkerCommand::UpdateLabel);

        assert_eq!(log.len(), 2);
        assert!(matches!(log.last(), Some(MarkerCommand::UpdateLabel)));
        assert!(matches!(log.entries()[0], MarkerCommand::UpdatePosition));
    }

    #[test]
    fn volles_log_verwirft_die_aeltere_haelfte() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&MarkerCommand::UpdatePosition);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&MarkerCommand::UpdateZIndex);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(log.last(), Some(MarkerCommand::UpdateZIndex)));
    }
}
