//! Sequence-guarded toggles for CSS animations driven from timers.
//!
//! A browser only replays a CSS animation if it is removed and re-applied in
//! a later frame, and a highlight must not be cleared by the timer of an
//! earlier selection. Both cases hand a sequence number to the timer and
//! ignore it when a newer trigger has happened since.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// An infinite CSS animation that can be restarted from the beginning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRestart {
    pub running: bool,
    pub seq: u64,
}

impl AnimationRestart {
    /// An animation that plays from page load.
    #[must_use]
    pub fn running() -> Self {
        Self { running: true, seq: 0 }
    }

    /// Remove the animation; pass the returned seq to [`Self::resume`] on a later tick.
    pub fn reset(&mut self) -> u64 {
        self.running = false;
        self.seq += 1;
        self.seq
    }

    pub fn resume(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.running = true;
        true
    }
}

/// A class that stays on for a fixed window after the most recent raise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransientFlag {
    pub on: bool,
    pub seq: u64,
}

impl TransientFlag {
    pub fn raise(&mut self) -> u64 {
        self.on = true;
        self.seq += 1;
        self.seq
    }

    pub fn lower(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.on {
            return false;
        }
        self.on = false;
        true
    }
}
