/// Speaks a word aloud. Fire-and-forget from the engine's perspective:
/// implementations swallow their own failures, and nothing about game
/// state depends on the outcome.
///
/// Voice caches, fallback flags and similar service state belong on the
/// implementing object, constructed by the host and injected into the
/// engine.
pub trait Pronouncer {
    fn speak(&mut self, word: &str);
}

/// Does nothing. The default when the host has no speech backend.
#[derive(Debug, Default)]
pub struct NullPronouncer;

impl Pronouncer for NullPronouncer {
    fn speak(&mut self, _word: &str) {}
}
