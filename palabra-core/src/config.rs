use palabra_types::SpeedSetting;
use std::time::Duration;

/// Tunable parameters for the session engine.
///
/// Round duration is purely a function of the speed setting; it does not
/// shrink with level.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Completed words required to advance a level.
    pub words_per_level: u32,
    /// Cosmetic settle delay between completing a word and starting the
    /// next round. Never affects scoring.
    pub advance_delay: Duration,
    /// Cosmetic delay between a restart command and the new session
    /// actually starting.
    pub restart_delay: Duration,
    pub slow_duration: Duration,
    pub medium_duration: Duration,
    pub fast_duration: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            words_per_level: 5,
            advance_delay: Duration::from_millis(600),
            restart_delay: Duration::from_millis(300),
            slow_duration: Duration::from_millis(14_000),
            medium_duration: Duration::from_millis(10_000),
            fast_duration: Duration::from_millis(6_000),
        }
    }
}

impl EngineConfig {
    pub fn round_duration(&self, speed: SpeedSetting) -> Duration {
        match speed {
            SpeedSetting::Slow => self.slow_duration,
            SpeedSetting::Medium => self.medium_duration,
            SpeedSetting::Fast => self.fast_duration,
        }
    }
}
