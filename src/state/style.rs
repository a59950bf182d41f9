//! Style card selection.
//!
//! The cards and the form's style `<select>` describe the same choice. A card
//! click writes its genre into the shared field; the select can also be
//! changed directly. Whichever wrote last wins.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::net::types::Genre;
use crate::util::animation::{AnimationRestart, TransientFlag};

/// One style card: the name printed on it, the genre it selects, and the hint it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleChoice {
    pub display: &'static str,
    pub genre: Genre,
    pub icon: &'static str,
    pub hint: &'static str,
}

pub const STYLE_CHOICES: [StyleChoice; 8] = [
    StyleChoice {
        display: "rock",
        genre: Genre::Rock,
        icon: "🎸",
        hint: "🎸 Создай мощный рок-хит с гитарными риффами",
    },
    StyleChoice {
        display: "jazz",
        genre: Genre::Jazz,
        icon: "🎹",
        hint: "🎹 Импровизируй в стиле джаза с саксофоном",
    },
    StyleChoice {
        display: "edm",
        genre: Genre::Electronic,
        icon: "🎧",
        hint: "🎧 Сделай танцевальный EDM трек",
    },
    StyleChoice {
        display: "hip-hop",
        genre: Genre::HipHop,
        icon: "🎤",
        hint: "🎤 Создай хип-хоп бит с крутым flow",
    },
    StyleChoice {
        display: "pop",
        genre: Genre::Pop,
        icon: "🎺",
        hint: "🎺 Напиши поп-хит, который зайдёт в чарты",
    },
    StyleChoice {
        display: "ambient",
        genre: Genre::Ambient,
        icon: "🌙",
        hint: "🌙 Расслабься с эмбиент-саундтреком",
    },
    StyleChoice {
        display: "classical",
        genre: Genre::Classical,
        icon: "🎻",
        hint: "🎻 Напиши классическую композицию",
    },
    StyleChoice {
        display: "cinematic",
        genre: Genre::Cinematic,
        icon: "🎬",
        hint: "🎬 Создай эпичный саундтрек для фильма",
    },
];

pub const DEFAULT_HINT: &str = "👆 Выбери стиль, и мы подставим его в заявку";

/// Effects the component must schedule after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEffects {
    /// Value to write into the shared style field.
    pub genre: Genre,
    /// Seq for restarting the hint pulse.
    pub hint_seq: u64,
    /// Seq for restarting the vinyl spin.
    pub vinyl_seq: u64,
    /// Seq for dropping the field highlight.
    pub highlight_seq: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSelectionState {
    /// Index into [`STYLE_CHOICES`] of the active card.
    pub active: Option<usize>,
    pub hint: &'static str,
    pub hint_pulse: AnimationRestart,
    pub vinyl_spin: AnimationRestart,
    pub field_highlight: TransientFlag,
}

impl Default for StyleSelectionState {
    fn default() -> Self {
        Self {
            active: None,
            hint: DEFAULT_HINT,
            hint_pulse: AnimationRestart::running(),
            vinyl_spin: AnimationRestart::running(),
            field_highlight: TransientFlag::default(),
        }
    }
}

impl StyleSelectionState {
    /// Activate card `index` and deactivate all others.
    ///
    /// Returns `None` for an index outside [`STYLE_CHOICES`].
    pub fn select(&mut self, index: usize) -> Option<SelectionEffects> {
        let choice = STYLE_CHOICES.get(index)?;
        self.active = Some(index);
        self.hint = choice.hint;
        Some(SelectionEffects {
            genre: choice.genre,
            hint_seq: self.hint_pulse.reset(),
            vinyl_seq: self.vinyl_spin.reset(),
            highlight_seq: self.field_highlight.raise(),
        })
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Hover cues only play for cards that are not already selected.
    #[must_use]
    pub fn hover_plays_cue(&self, index: usize) -> bool {
        index < STYLE_CHOICES.len() && !self.is_active(index)
    }
}
