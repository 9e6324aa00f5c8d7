/// Elapsed simulation time driving every angle in the scene.
///
/// Distinct from wall-clock time: while paused, `advance` is a no-op and the
/// scene stays visually frozen. Resetting rewinds the scalar only; meshes are
/// immutable and never rebuilt for a time reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneClock {
    elapsed: f32,
    paused: bool,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed simulation seconds since construction or the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances simulation time by a frame delta, unless paused.
    pub fn advance(&mut self, delta: f32) {
        if !self.paused {
            self.elapsed += delta;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Rewinds elapsed time to zero. Pause state is left untouched.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates() {
        let mut clock = SceneClock::new();
        clock.advance(0.5);
        clock.advance(1.5);
        assert_eq!(clock.elapsed(), 2.0);
    }

    #[test]
    fn pause_freezes_elapsed() {
        let mut clock = SceneClock::new();
        clock.advance(10.0);
        clock.pause();
        clock.advance(3.0);
        clock.advance(3.0);
        assert_eq!(clock.elapsed(), 10.0);
        clock.resume();
        clock.advance(1.0);
        assert_eq!(clock.elapsed(), 11.0);
    }

    #[test]
    fn reset_rewinds_to_zero() {
        let mut clock = SceneClock::new();
        clock.advance(123.25);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn reset_keeps_pause_state() {
        let mut clock = SceneClock::new();
        clock.advance(5.0);
        clock.toggle_pause();
        clock.reset();
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(), 0.0);
    }
}
