use std::time::{Duration, Instant};

/// Identifies one `start` call. A token is returned exactly once from
/// `fire_if_due`, so a deadline from a cancelled or superseded round can
/// never be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// A single owned, cancellable deadline.
///
/// The engine keeps one of these per purpose (round expiry, deferred
/// round advance) and drives them from `poll`. Starting implicitly
/// cancels any prior deadline and `fire_if_due` consumes the deadline,
/// which makes expiry edge-triggered: at most one firing per `start`.
#[derive(Debug, Default)]
pub struct OneShotTimer {
    deadline: Option<(Instant, TimerToken)>,
    next_token: u64,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins counting down, replacing any deadline already in flight.
    pub fn start(&mut self, now: Instant, duration: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.deadline = Some((now + duration, token));
        token
    }

    /// Stops the timer. Idempotent; safe when nothing is running.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.map(|(at, _)| at)
    }

    /// Consumes and returns the deadline's token if it has elapsed.
    /// Returns `None` while still counting down or after it has fired.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<TimerToken> {
        match self.deadline {
            Some((at, token)) if now >= at => {
                self.deadline = None;
                Some(token)
            }
            _ => None,
        }
    }
}
