//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! The event → sound mapping is platform independent; synthesis is wasm only.

use crate::sim::{CrashCause, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump impulse
    Flap,
    /// Obstacle passed
    Score,
    /// Ran into an obstacle column
    Hit,
    /// Fell onto the ground
    Thud,
    /// Restart after game over
    Restart,
}

impl SoundEffect {
    /// Sound to play for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            // The start input also emits `Jumped`
            GameEvent::Started => None,
            GameEvent::Jumped => Some(SoundEffect::Flap),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Crashed {
                cause: CrashCause::Obstacle,
            } => Some(SoundEffect::Hit),
            GameEvent::Crashed {
                cause: CrashCause::Ground,
            } => Some(SoundEffect::Thud),
            GameEvent::Reset => Some(SoundEffect::Restart),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    const MASTER_VOLUME: f32 = 0.8;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                muted: false,
            }
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn is_muted(&self) -> bool {
            self.muted
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { MASTER_VOLUME }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Flap => self.play_flap(ctx, vol),
                SoundEffect::Score => self.play_score(ctx, vol),
                SoundEffect::Hit => self.play_hit(ctx, vol),
                SoundEffect::Thud => self.play_thud(ctx, vol),
                SoundEffect::Restart => self.play_restart(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Flap - short upward chirp
        fn play_flap(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(800.0, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.14).ok();
        }

        /// Score - two-note ding
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [520.0, 680.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Hit - harsh descending saw
        fn play_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(80.0, t + 0.4)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.55).ok();
        }

        /// Thud - low solid thump
        fn play_thud(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(50.0, t + 0.2)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.25).ok();
        }

        /// Restart - whoosh up
        fn play_restart(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(600.0, t + 0.15)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.25).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sounds() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Started), None);
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Jumped),
            Some(SoundEffect::Flap)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Scored { score: 3 }),
            Some(SoundEffect::Score)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Crashed {
                cause: CrashCause::Ground
            }),
            Some(SoundEffect::Thud)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Crashed {
                cause: CrashCause::Obstacle
            }),
            Some(SoundEffect::Hit)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Reset),
            Some(SoundEffect::Restart)
        );
    }
}
