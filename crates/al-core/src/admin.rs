//! Admin access domain types
//!
//! The login form is reached either through the `#/admin` route or through a
//! hidden trigger: five rapid activations of an unremarkable UI element.

use std::time::{Duration, Instant};

/// Activations needed to open the admin login.
pub const TRIGGER_THRESHOLD: u32 = 5;

/// Idle time after which the activation count falls back to zero.
pub const TRIGGER_RESET_WINDOW: Duration = Duration::from_millis(1500);

/// Counts rapid activations of the hidden admin trigger.
///
/// Time is injected so the timing rule stays testable.
#[derive(Debug, Default)]
pub struct AccessTrigger {
    count: u32,
    last_activation: Option<Instant>,
}

impl AccessTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one activation at `now`. Returns `true` when the threshold
    /// is reached, after which the count starts over.
    pub fn activate(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_activation {
            if now.duration_since(last) > TRIGGER_RESET_WINDOW {
                self.count = 0;
            }
        }
        self.last_activation = Some(now);
        self.count += 1;

        if self.count >= TRIGGER_THRESHOLD {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Authentication flag for the admin surface. Nothing more than a flag: the
/// credential check itself lives behind the verifier port.
#[derive(Debug, Default)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_rapid_activations_fire() {
        let mut trigger = AccessTrigger::new();
        let start = Instant::now();
        let step = Duration::from_millis(100);

        for i in 0..4 {
            assert!(!trigger.activate(start + step * i));
        }
        assert!(trigger.activate(start + step * 4));
    }

    #[test]
    fn slow_activations_reset_the_count() {
        let mut trigger = AccessTrigger::new();
        let start = Instant::now();

        for i in 0..4 {
            trigger.activate(start + Duration::from_millis(100) * i);
        }
        // Longer than the reset window: the streak starts over.
        let late = start + Duration::from_secs(10);
        assert!(!trigger.activate(late));

        for i in 1..4 {
            assert!(!trigger.activate(late + Duration::from_millis(100) * i));
        }
        assert!(trigger.activate(late + Duration::from_millis(400)));
    }

    #[test]
    fn firing_resets_for_the_next_streak() {
        let mut trigger = AccessTrigger::new();
        let start = Instant::now();
        let step = Duration::from_millis(50);

        for i in 0..4 {
            trigger.activate(start + step * i);
        }
        assert!(trigger.activate(start + step * 4));
        // Immediately after firing, a single activation is not enough.
        assert!(!trigger.activate(start + step * 5));
    }

    #[test]
    fn session_starts_unauthenticated() {
        let mut session = AdminSession::new();
        assert!(!session.is_authenticated());
        session.login();
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }
}
