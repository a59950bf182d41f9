//! Short synthesized UI sounds for the style cards.
//!
//! TRADE-OFFS
//! ==========
//! Cues are decoration. Browsers may refuse to create an audio context
//! before a user gesture or lack Web Audio entirely; every such failure is
//! dropped after a debug log and never reaches the page.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;

/// Level every cue decays to.
pub const RAMP_FLOOR_GAIN: f32 = 0.01;

/// A sine blip with an exponential decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneCue {
    pub frequency_hz: f32,
    pub gain: f32,
    pub duration_secs: f64,
}

pub const CLICK_CUE: ToneCue = ToneCue { frequency_hz: 800.0, gain: 0.3, duration_secs: 0.1 };
pub const HOVER_CUE: ToneCue = ToneCue { frequency_hz: 600.0, gain: 0.1, duration_secs: 0.05 };

/// Playback state of the cached audio context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextStatus {
    Running,
    Suspended,
    Closed,
}

/// What to do with the cached context before scheduling a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextAction {
    Create,
    Resume,
    Reuse,
}

/// A context created outside a user gesture (e.g. from `mouseenter`) starts
/// suspended and stays silent until resumed, so every cue re-checks it.
#[must_use]
pub fn context_action(cached: Option<ContextStatus>) -> ContextAction {
    match cached {
        None | Some(ContextStatus::Closed) => ContextAction::Create,
        Some(ContextStatus::Suspended) => ContextAction::Resume,
        Some(ContextStatus::Running) => ContextAction::Reuse,
    }
}

#[cfg(feature = "csr")]
thread_local! {
    static AUDIO: RefCell<Option<web_sys::AudioContext>> = const { RefCell::new(None) };
}

/// Play `cue`, best effort.
pub fn play(cue: ToneCue) {
    #[cfg(feature = "csr")]
    {
        if let Err(err) = try_play(cue) {
            log::debug!("sound cue skipped: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cue;
    }
}

#[cfg(feature = "csr")]
fn try_play(cue: ToneCue) -> Result<(), wasm_bindgen::JsValue> {
    AUDIO.with(|slot| {
        let mut slot = slot.borrow_mut();
        if context_action(slot.as_ref().map(context_status)) == ContextAction::Create {
            *slot = Some(web_sys::AudioContext::new()?);
        }
        let Some(ctx) = slot.clone() else {
            return Ok(());
        };
        // Fresh contexts can start suspended too.
        if context_action(Some(context_status(&ctx))) == ContextAction::Resume {
            ctx.resume()?;
        }

        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        oscillator.set_type(web_sys::OscillatorType::Sine);
        oscillator.frequency().set_value(cue.frequency_hz);

        let now = ctx.current_time();
        gain.gain().set_value_at_time(cue.gain, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(RAMP_FLOOR_GAIN, now + cue.duration_secs)?;

        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(now + cue.duration_secs)?;
        Ok(())
    })
}

#[cfg(feature = "csr")]
fn context_status(ctx: &web_sys::AudioContext) -> ContextStatus {
    match ctx.state() {
        web_sys::AudioContextState::Suspended => ContextStatus::Suspended,
        web_sys::AudioContextState::Closed => ContextStatus::Closed,
        _ => ContextStatus::Running,
    }
}
