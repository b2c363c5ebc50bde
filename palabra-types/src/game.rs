use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::EngineError;

/// A single vocabulary item, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordEntry {
    pub text: String,
    pub translation: Option<String>,
    pub difficulty: Option<u32>,
}

impl WordEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: None,
            difficulty: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Phase {
    Idle,
    Active,
    GameOver,
}

/// Player-selected difficulty tier controlling round duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SpeedSetting {
    Slow,
    Medium,
    Fast,
}

impl FromStr for SpeedSetting {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(SpeedSetting::Slow),
            "medium" => Ok(SpeedSetting::Medium),
            "fast" => Ok(SpeedSetting::Fast),
            other => Err(EngineError::InvalidSpeedSetting {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CharStatus {
    /// Typed character matches the target at this position (raw
    /// case-insensitive or after diacritic normalization).
    Correct,
    Incorrect,
    /// Position not yet reached by the typed prefix.
    Pending,
}

/// Per-character feedback for the presentation layer, one per character
/// of the target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CharResult {
    pub letter: String,
    pub status: CharStatus,
    pub position: i32,
}

/// Read-only view of the session state for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub score: u32,
    pub level: u32,
    pub words_completed_this_level: u32,
    pub current_word: Option<WordEntry>,
    pub user_input: String,
    pub phase: Phase,
    pub speed: SpeedSetting,
    pub sound_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_setting_from_str() {
        assert_eq!("slow".parse::<SpeedSetting>().unwrap(), SpeedSetting::Slow);
        assert_eq!(
            "medium".parse::<SpeedSetting>().unwrap(),
            SpeedSetting::Medium
        );
        assert_eq!("fast".parse::<SpeedSetting>().unwrap(), SpeedSetting::Fast);
    }

    #[test]
    fn test_speed_setting_from_str_rejects_unknown() {
        let err = "ludicrous".parse::<SpeedSetting>().unwrap_err();
        match err {
            EngineError::InvalidSpeedSetting { value } => assert_eq!(value, "ludicrous"),
            other => panic!("expected InvalidSpeedSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_word_entry_new() {
        let entry = WordEntry::new("hola");
        assert_eq!(entry.text, "hola");
        assert_eq!(entry.translation, None);
        assert_eq!(entry.difficulty, None);
    }
}
