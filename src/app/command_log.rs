//! Diagnose-Log der in einer Session ausgeführten Commands.

use std::collections::VecDeque;

use super::EditorCommand;

/// Protokolliert ausgeführte Commands mit laufender Sequenznummer.
///
/// Läuft das Log über sein Limit, fällt der älteste Eintrag heraus. Die
/// Sequenznummern zählen über die gesamte Session weiter, damit sich eine
/// Gesten-Abfolge auch nach Verdrängung noch rekonstruieren lässt.
pub struct CommandLog {
    entries: VecDeque<(u64, EditorCommand)>,
    next_seq: u64,
    limit: usize,
}

impl CommandLog {
    /// Erstellt ein leeres Log mit dem übergebenen Eintrags-Limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            next_seq: 0,
            limit,
        }
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: &EditorCommand) {
        self.entries.push_back((self.next_seq, command.clone()));
        self.next_seq += 1;
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Anzahl aller je protokollierten Commands, inklusive verdrängter.
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }

    /// Die letzten `n` Einträge als `(Sequenznummer, Command)`, ältester
    /// zuerst.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &(u64, EditorCommand)> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }
}
