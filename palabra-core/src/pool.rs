use palabra_types::{EngineError, WordEntry};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// The session's vocabulary. Read-only after load; selection state
/// (the `excluding` set) is owned by the caller.
#[derive(Debug, Clone)]
pub struct WordPool {
    entries: Vec<WordEntry>,
}

impl WordPool {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| !entry.text.is_empty())
            .collect();
        Self { entries }
    }

    /// Builds a pool from a newline-separated word list. Blank lines and
    /// `#` comments are skipped.
    pub fn from_word_list(word_list: &str) -> Self {
        let entries = word_list
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(WordEntry::new)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every entry is in `excluding`. The caller clears its set
    /// and picks again over the full pool when this reports true.
    pub fn is_exhausted(&self, excluding: &HashSet<String>) -> bool {
        self.entries
            .iter()
            .all(|entry| excluding.contains(&entry.text))
    }

    /// Selects uniformly at random among entries whose text is not in
    /// `excluding`. If all entries are excluded, selection proceeds over
    /// the full pool. Fails only if the pool itself is empty.
    pub fn pick<'a, R: Rng + ?Sized>(
        &'a self,
        rng: &mut R,
        excluding: &HashSet<String>,
    ) -> Result<&'a WordEntry, EngineError> {
        if self.entries.is_empty() {
            return Err(EngineError::PoolEmpty);
        }

        let candidates: Vec<&WordEntry> = self
            .entries
            .iter()
            .filter(|entry| !excluding.contains(&entry.text))
            .collect();

        if candidates.is_empty() {
            return self
                .entries
                .choose(rng)
                .ok_or(EngineError::PoolEmpty);
        }

        candidates
            .choose(rng)
            .copied()
            .ok_or(EngineError::PoolEmpty)
    }
}
