/// Smoothed frame clock.
/// Turns jittery per-frame deltas into the steady delta animations advance by.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Weight kept from the previous smoothed delta (0.0 = no smoothing).
    smoothing: f32,
    /// Upper bound for a single raw frame delta.
    max_dt: f32,
    /// Last smoothed delta; `None` until the first frame.
    smoothed: Option<f32>,
    /// Total smoothed time handed out since the last reset.
    elapsed: f32,
}

impl FrameClock {
    pub fn new(smoothing: f32, max_dt: f32) -> Self {
        Self {
            smoothing: smoothing.clamp(0.0, 0.99),
            max_dt: max_dt.max(0.0),
            smoothed: None,
            elapsed: 0.0,
        }
    }

    /// Feed one raw frame delta. Returns the smoothed delta for this frame.
    pub fn tick(&mut self, frame_dt: f32) -> f32 {
        // Cap to keep a stalled frame from teleporting every animation
        let dt = frame_dt.clamp(0.0, self.max_dt);
        let smoothed = match self.smoothed {
            Some(prev) => prev * self.smoothing + dt * (1.0 - self.smoothing),
            None => dt,
        };
        self.smoothed = Some(smoothed);
        self.elapsed += smoothed;
        smoothed
    }

    /// The most recent smoothed delta (0.0 before the first frame).
    pub fn dt(&self) -> f32 {
        self.smoothed.unwrap_or(0.0)
    }

    /// Smoothed time accumulated since the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Forget history, e.g. when a new run starts.
    pub fn reset(&mut self) {
        self.smoothed = None;
        self.elapsed = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.5, 0.1)
    }
}
