use palabra_core::{EngineConfig, EngineEvent, EngineEventHandler, SessionEngine, WordPool};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Creates an engine with a known word list and deterministic selection.
pub fn create_test_engine(words: &str, seed: u64) -> SessionEngine {
    SessionEngine::with_seed(WordPool::from_word_list(words), EngineConfig::default(), seed)
}

/// Creates an engine and attaches a fresh event collector to it.
pub fn create_test_engine_with_events(words: &str, seed: u64) -> (SessionEngine, EventCollector) {
    let mut engine = create_test_engine(words, seed);
    let collector = EventCollector::new();
    engine.add_event_handler(Box::new(collector.clone()));
    (engine, collector)
}

/// Types the currently active word in full, completing the round.
pub fn complete_current_word(engine: &mut SessionEngine, now: Instant) -> String {
    let word = engine
        .current_word()
        .expect("no active word to complete")
        .text
        .clone();
    engine.set_user_input(&word, now);
    word
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<EngineEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&EngineEvent) -> bool) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| check_fn(event))
            .count()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&EngineEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl EngineEventHandler for EventCollector {
    fn handle_event(&mut self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}
