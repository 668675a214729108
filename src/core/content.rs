//! Boundary zum eingebetteten Inhalt der Komponente.

/// Handle auf eine aktive Content-Watch-Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Zugriff auf den eingebetteten Inhalt und dessen Mutation-Watch.
///
/// Die Watch-Registrierung ist one-shot: nach jeder Zustellung muss neu
/// registriert werden. `disconnect` ist idempotent; eine Benachrichtigung
/// für eine bereits gelöste Watch gilt als veraltet und wird vom Reactor
/// verworfen.
pub trait ContentHost {
    /// Liefert den aktuellen eingebetteten Inhalt (ungetrimmt).
    fn content(&self) -> String;

    /// Registriert eine neue Watch auf den Inhalts-Teilbaum.
    fn observe(&mut self) -> WatchId;

    /// Löst eine bestehende Watch.
    fn disconnect(&mut self, watch: WatchId);
}
