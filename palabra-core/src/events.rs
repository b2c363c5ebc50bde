use palabra_types::{CharResult, WordEntry};

/// Notifications emitted at the presentation boundary. The UI derives
/// its slide animation purely from `duration_ms` published at round
/// start; there is no per-tick progress event.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    WordChanged {
        word: WordEntry,
        duration_ms: u64,
    },
    InputFeedback {
        chars: Vec<CharResult>,
    },
    WordCompleted {
        word: String,
        points: u32,
        score: u32,
        level: u32,
        leveled_up: bool,
    },
    GameOver {
        final_score: u32,
        level: u32,
    },
}

/// Receives every notification the session publishes, in order.
pub trait EngineEventHandler {
    fn handle_event(&mut self, event: EngineEvent);
}

/// Fans each notification out to all registered handlers, synchronously
/// and in registration order.
pub struct EngineEventBus {
    handlers: Vec<Box<dyn EngineEventHandler>>,
}

impl EngineEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn EngineEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: EngineEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for EngineEventBus {
    fn default() -> Self {
        Self::new()
    }
}
