//! One-shot entrance reveal for scroll-animated blocks.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "reveal animate-in";

/// Reveal progress of a single element. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one visibility report. Returns `true` only on the transition to
    /// revealed, which is when the observer should stop watching the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if *self == Self::Hidden && intersecting {
            *self = Self::Revealed;
            return true;
        }
        false
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Hidden => REVEAL_CLASS,
            Self::Revealed => REVEALED_CLASS,
        }
    }

    /// Inline styles for pages that ship without the reveal stylesheet.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Hidden => "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;",
            Self::Revealed => "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;",
        }
    }
}
