use anyhow::{Context, Result, bail};
use palabra_types::WordEntry;
use std::path::Path;

/// Spanish vocabulary with English translations, served when no
/// `WORDS_FILE` is configured.
const DEFAULT_WORDS: &[(&str, &str, u32)] = &[
    ("hola", "hello", 1),
    ("gracias", "thank you", 1),
    ("buenos", "good", 1),
    ("amigo", "friend", 1),
    ("casa", "house", 1),
    ("agua", "water", 1),
    ("comida", "food", 1),
    ("tiempo", "time", 2),
    ("familia", "family", 1),
    ("trabajo", "work", 2),
    ("amor", "love", 1),
    ("libro", "book", 1),
    ("escuela", "school", 2),
    ("perro", "dog", 1),
    ("gato", "cat", 1),
    ("ciudad", "city", 2),
    ("fiesta", "party", 2),
    ("bonito", "beautiful", 2),
    ("feliz", "happy", 1),
    ("vida", "life", 1),
    ("bueno", "good", 1),
    ("noche", "night", 1),
    ("día", "day", 1),
    ("sol", "sun", 1),
    ("luna", "moon", 1),
    ("azul", "blue", 1),
    ("verde", "green", 1),
    ("rojo", "red", 1),
    ("negro", "black", 1),
    ("blanco", "white", 1),
];

/// Read-only in-memory word collection behind the word-source endpoint.
/// Loaded once at startup; the engine fetches it once per session.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<WordEntry>,
}

impl WordStore {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { words }
    }

    pub fn with_default_words() -> Self {
        let words = DEFAULT_WORDS
            .iter()
            .map(|&(word, translation, difficulty)| WordEntry {
                text: word.to_string(),
                translation: Some(translation.to_string()),
                difficulty: Some(difficulty),
            })
            .collect();
        Self { words }
    }

    /// Loads a JSON array of word entries. An empty list is rejected so
    /// the server fails fast instead of serving a pool the engine cannot
    /// pick from.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word file {}", path.display()))?;
        let words: Vec<WordEntry> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse word file {}", path.display()))?;
        if words.is_empty() {
            bail!("word file {} contains no words", path.display());
        }
        Ok(Self { words })
    }

    pub fn all(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn by_difficulty(&self, difficulty: u32) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|word| word.difficulty == Some(difficulty))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
