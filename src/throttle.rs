//! Rate limiting for hot event handlers.

use std::cell::Cell;

/// One animation-frame period; the scroll handler runs at most once per window.
pub const SCROLL_WINDOW_MS: f64 = 16.0;

/// Admits at most one call per fixed window. Calls landing inside the window
/// are dropped, not queued, so a burst of scroll events collapses to one
/// handler run. The caller supplies the clock reading.
pub struct Throttle {
    window_ms: f64,
    last: Cell<Option<f64>>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last: Cell::new(None),
        }
    }

    /// Returns whether the caller may run its handler at `now_ms`.
    pub fn admit(&self, now_ms: f64) -> bool {
        match self.last.get() {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last.set(Some(now_ms));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_admitted() {
        let throttle = Throttle::new(16.0);
        assert!(throttle.admit(0.0));
    }

    #[test]
    fn calls_inside_the_window_are_dropped() {
        let throttle = Throttle::new(16.0);
        assert!(throttle.admit(100.0));
        assert!(!throttle.admit(101.0));
        assert!(!throttle.admit(115.9));
    }

    #[test]
    fn next_window_is_admitted_again() {
        let throttle = Throttle::new(16.0);
        assert!(throttle.admit(100.0));
        assert!(!throttle.admit(110.0));
        assert!(throttle.admit(116.0));
        // Dropped calls do not push the window forward.
        assert!(!throttle.admit(130.0));
        assert!(throttle.admit(132.0));
    }
}
