//! Gravity clock - decides when the timer-driven descent fires
//!
//! Drivers call [`GravityClock::advance`] with the time elapsed since their
//! last frame. Once strictly more than one interval has accumulated the clock
//! fires and starts counting again from zero. Lateral moves and rotations
//! restart the count so a player adjusting a piece is not pulled down mid-move.

/// Accumulating countdown for automatic descent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Accumulate time; true when a descent is due
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms > self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    /// Start counting from zero
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_interval_is_exceeded() {
        let mut clock = GravityClock::new(1000);
        assert!(!clock.advance(500));
        assert!(!clock.advance(500));
        assert!(clock.advance(1));
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn test_reset_restarts_count() {
        let mut clock = GravityClock::new(100);
        assert!(!clock.advance(90));
        clock.reset();
        assert!(!clock.advance(90));
        assert!(clock.advance(20));
    }

    #[test]
    fn test_frame_ticks_fire_once_per_interval() {
        let mut clock = GravityClock::new(1000);
        let fired = (0..126).filter(|_| clock.advance(16)).count();
        // 63 frames of 16ms = 1008ms > 1000ms, so the 63rd and 126th frames fire.
        assert_eq!(fired, 2);
    }
}
