use crate::config::EngineConfig;
use crate::events::{EngineEvent, EngineEventBus, EngineEventHandler};
use crate::matcher::{char_feedback, is_match};
use crate::pool::WordPool;
use crate::pronounce::{NullPronouncer, Pronouncer};
use crate::timer::OneShotTimer;
use palabra_types::{EngineError, Phase, SessionSnapshot, SpeedSetting, WordEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

/// What the advance timer means when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAdvance {
    /// Settle delay after a completed word; select the next word.
    NextRound,
    /// Cosmetic delay after a restart command; start a fresh session.
    Restart,
}

/// The session state machine. Sole owner and mutator of all game state,
/// including the two timer slots (round expiry and deferred advance).
///
/// The engine is single-threaded and driven entirely by explicit calls:
/// commands carry the current `Instant`, and the host calls `poll` to
/// deliver due deadlines. Every transition that would make a prior
/// deadline stale cancels it first, so a callback from a previous round
/// or session can never mutate later state.
pub struct SessionEngine {
    config: EngineConfig,
    pool: WordPool,
    rng: StdRng,
    event_bus: EngineEventBus,
    pronouncer: Box<dyn Pronouncer>,

    score: u32,
    level: u32,
    words_completed_this_level: u32,
    current_word: Option<WordEntry>,
    user_input: String,
    phase: Phase,
    speed: SpeedSetting,
    sound_enabled: bool,
    used_words: HashSet<String>,

    round_timer: OneShotTimer,
    advance_timer: OneShotTimer,
    pending_advance: Option<PendingAdvance>,
}

impl SessionEngine {
    pub fn new(pool: WordPool, config: EngineConfig) -> Self {
        Self::with_rng(pool, config, StdRng::from_entropy())
    }

    /// Deterministic word selection for tests.
    pub fn with_seed(pool: WordPool, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(pool, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: WordPool, config: EngineConfig, rng: StdRng) -> Self {
        Self {
            config,
            pool,
            rng,
            event_bus: EngineEventBus::new(),
            pronouncer: Box::new(NullPronouncer),
            score: 0,
            level: 1,
            words_completed_this_level: 0,
            current_word: None,
            user_input: String::new(),
            phase: Phase::Idle,
            speed: SpeedSetting::Medium,
            sound_enabled: true,
            used_words: HashSet::new(),
            round_timer: OneShotTimer::new(),
            advance_timer: OneShotTimer::new(),
            pending_advance: None,
        }
    }

    pub fn set_pronouncer(&mut self, pronouncer: Box<dyn Pronouncer>) {
        self.pronouncer = pronouncer;
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn EngineEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn words_completed_this_level(&self) -> u32 {
        self.words_completed_this_level
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.current_word.as_ref()
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn speed(&self) -> SpeedSetting {
        self.speed
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            level: self.level,
            words_completed_this_level: self.words_completed_this_level,
            current_word: self.current_word.clone(),
            user_input: self.user_input.clone(),
            phase: self.phase,
            speed: self.speed,
            sound_enabled: self.sound_enabled,
        }
    }

    /// The earliest pending deadline, if any. Lets the host sleep until
    /// the next `poll` can have an effect.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.round_timer.deadline(), self.advance_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Resets all state and starts the first round. Fails with
    /// `PoolEmpty` if no words are available, leaving the phase `Idle`.
    pub fn start_session(&mut self, now: Instant) -> Result<(), EngineError> {
        self.round_timer.cancel();
        self.advance_timer.cancel();
        self.pending_advance = None;

        self.score = 0;
        self.level = 1;
        self.words_completed_this_level = 0;
        self.used_words.clear();
        self.user_input.clear();
        self.current_word = None;
        self.phase = Phase::Active;

        if let Err(err) = self.begin_round(now) {
            self.phase = Phase::Idle;
            return Err(err);
        }
        info!(speed = ?self.speed, "session started");
        Ok(())
    }

    /// Returns to `Idle` and schedules an automatic fresh start after a
    /// short cosmetic delay. Cancels everything the prior session had in
    /// flight.
    pub fn restart_session(&mut self, now: Instant) {
        self.round_timer.cancel();
        self.advance_timer.cancel();
        self.phase = Phase::Idle;
        self.current_word = None;
        self.user_input.clear();
        self.pending_advance = Some(PendingAdvance::Restart);
        self.advance_timer.start(now, self.config.restart_delay);
        debug!("restart scheduled");
    }

    /// Delivers due deadlines. Call whenever time may have passed; firing
    /// is edge-triggered, so redundant calls are harmless.
    pub fn poll(&mut self, now: Instant) -> Result<(), EngineError> {
        if self.round_timer.fire_if_due(now).is_some() && self.phase == Phase::Active {
            self.game_over();
        }

        if self.advance_timer.fire_if_due(now).is_some() {
            match self.pending_advance.take() {
                Some(PendingAdvance::NextRound) if self.phase == Phase::Active => {
                    self.begin_round(now)?;
                }
                Some(PendingAdvance::Restart) => {
                    self.start_session(now)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Stores raw input, publishes per-character feedback, and completes
    /// the round on a full normalized match. Ignored outside `Active`.
    pub fn set_user_input(&mut self, text: &str, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }
        self.user_input.clear();
        self.user_input.push_str(text);

        let Some(word) = self.current_word.clone() else {
            return;
        };
        self.event_bus.publish(EngineEvent::InputFeedback {
            chars: char_feedback(&self.user_input, &word.text),
        });
        if is_match(&self.user_input, &word.text) {
            self.complete_word(now);
        }
    }

    /// Redundant completion trigger for input methods where change
    /// events are unreliable. Completion clears the current word, so the
    /// same word can never be completed twice.
    pub fn submit_enter(&mut self, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }
        let Some(word) = self.current_word.clone() else {
            return;
        };
        if is_match(&self.user_input, &word.text) {
            self.complete_word(now);
        }
    }

    /// Updates the speed setting. The in-flight round keeps the duration
    /// captured at its start; the new setting applies from the next
    /// round.
    pub fn set_speed(&mut self, speed: SpeedSetting) {
        self.speed = speed;
        debug!(speed = ?speed, "speed setting changed");
    }

    /// Flips the pronunciation gate. Advisory only; never affects
    /// scoring or timing.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Explicit pronounce request for the active word.
    pub fn pronounce_current(&mut self) {
        if !self.sound_enabled {
            return;
        }
        if let Some(word) = &self.current_word {
            self.pronouncer.speak(&word.text);
        }
    }

    fn begin_round(&mut self, now: Instant) -> Result<(), EngineError> {
        self.advance_timer.cancel();
        self.pending_advance = None;

        if self.pool.is_exhausted(&self.used_words) {
            self.used_words.clear();
        }
        let entry = self.pool.pick(&mut self.rng, &self.used_words)?.clone();

        self.user_input.clear();
        let duration = self.config.round_duration(self.speed);
        self.round_timer.start(now, duration);
        self.current_word = Some(entry.clone());

        let duration_ms = duration.as_millis() as u64;
        debug!(word = %entry.text, duration_ms, "round started");
        self.event_bus.publish(EngineEvent::WordChanged {
            word: entry.clone(),
            duration_ms,
        });
        if self.sound_enabled {
            self.pronouncer.speak(&entry.text);
        }
        Ok(())
    }

    fn complete_word(&mut self, now: Instant) {
        let Some(word) = self.current_word.take() else {
            return;
        };
        self.round_timer.cancel();

        let points = word.text.chars().count() as u32 * self.level;
        self.score += points;
        self.words_completed_this_level += 1;
        let leveled_up = self.words_completed_this_level == self.config.words_per_level;
        if leveled_up {
            self.level += 1;
            self.words_completed_this_level = 0;
        }
        self.user_input.clear();
        self.used_words.insert(word.text.clone());

        info!(
            word = %word.text,
            points,
            score = self.score,
            level = self.level,
            "word completed"
        );
        self.event_bus.publish(EngineEvent::WordCompleted {
            word: word.text,
            points,
            score: self.score,
            level: self.level,
            leveled_up,
        });

        // The next round starts after the settle delay; all scoring
        // bookkeeping above already happened synchronously.
        self.pending_advance = Some(PendingAdvance::NextRound);
        self.advance_timer.start(now, self.config.advance_delay);
    }

    fn game_over(&mut self) {
        self.round_timer.cancel();
        self.advance_timer.cancel();
        self.pending_advance = None;
        self.current_word = None;
        self.phase = Phase::GameOver;

        info!(final_score = self.score, level = self.level, "game over");
        self.event_bus.publish(EngineEvent::GameOver {
            final_score: self.score,
            level: self.level,
        });
    }
}
