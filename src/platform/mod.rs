//! Platform abstraction layer
//!
//! Turns host timestamps (`requestAnimationFrame` on web, a synthetic
//! 60 Hz clock in the headless driver) into the clamped frame deltas the
//! simulation consumes.

use crate::consts::{MAX_FRAME_DELTA_MS, REFERENCE_FRAME_MS};
use crate::tuning::Tuning;

/// Frame driver clock
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_delta_ms: f32,
    /// Frames observed since creation
    pub frame_index: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA_MS)
    }
}

impl FrameClock {
    pub fn new(max_delta_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_delta_ms,
            frame_index: 0,
        }
    }

    /// Clock that caps deltas at the tuning's `max_frame_delta_ms`
    pub fn for_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.max_frame_delta_ms)
    }

    /// Feed the host timestamp (ms) for this frame; returns the delta to tick with.
    ///
    /// The first frame reports one reference frame. Timestamps that go
    /// backwards report zero.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => (now_ms - last) as f32,
            None => REFERENCE_FRAME_MS,
        };
        self.last_ms = Some(now_ms);
        self.frame_index += 1;

        let clamped = crate::clamp_delta_ms(delta, self.max_delta_ms);
        if delta > self.max_delta_ms {
            log::debug!("Frame delta {:.1}ms clamped to {:.1}ms", delta, clamped);
        }
        clamped
    }

    /// Forget the previous timestamp; the browser driver calls this when the
    /// page becomes visible again
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
