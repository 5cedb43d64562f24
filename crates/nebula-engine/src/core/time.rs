/// Converts variable frame time into a whole number of animation steps.
///
/// Every per-step constant in the backdrop (star velocity, planet drift,
/// orbital speed) is expressed per 60 Hz frame, so a 120 Hz display runs one
/// step every other frame and a throttled tab catches up in bounded bursts.
pub struct FrameClock {
    /// Seconds of animation covered by one step.
    step: f32,
    /// Unconsumed elapsed time.
    carry: f32,
    /// Upper bound on steps returned for a single frame.
    max_steps: u32,
}

impl FrameClock {
    pub const DEFAULT_STEP: f32 = 1.0 / 60.0;
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(step: f32) -> Self {
        Self {
            step,
            carry: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Feed elapsed seconds. Returns how many steps to run this frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }
        self.carry = (self.carry + elapsed).min(self.step * self.max_steps as f32);
        // Tolerate float drift so an exact 1/60 s frame is one step, not zero.
        let steps = ((self.carry / self.step) + 1e-4) as u32;
        self.carry = (self.carry - steps as f32 * self.step).max(0.0);
        steps
    }

    /// Seconds per step.
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
