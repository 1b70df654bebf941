use super::constants::CLOCK_STEP;

/// Fixed-step scene time. Advances by `step` once per frame regardless of
/// wall-clock frame duration, so animation speed follows the display rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneClock {
    elapsed: f32,
    step: f32,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::with_step(CLOCK_STEP)
    }
}

impl SceneClock {
    pub fn with_step(step: f32) -> Self {
        Self {
            elapsed: 0.0,
            step: step.max(0.0),
        }
    }

    /// Advance one frame and return the new elapsed time.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.elapsed += self.step;
        self.elapsed
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }
}
