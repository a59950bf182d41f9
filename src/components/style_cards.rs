//! Style card grid with the spinning vinyl and the hint line above it.

use leptos::prelude::*;

use crate::components::lead_form::LeadFields;
use crate::config::LandingConfig;
use crate::state::lead_form::LeadFormState;
use crate::state::style::{STYLE_CHOICES, StyleSelectionState};
use crate::util::audio::{self, CLICK_CUE, HOVER_CUE};

#[component]
pub fn StyleCards() -> impl IntoView {
    let selection = expect_context::<RwSignal<StyleSelectionState>>();
    let fields = expect_context::<LeadFields>();
    let form = expect_context::<RwSignal<LeadFormState>>();
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let (restart_ms, highlight_ms) = (config.animation_restart_ms, config.style_highlight_ms);

    let select = move |index: usize| {
        let Some(effects) = selection.try_update(|s| s.select(index)).flatten() else {
            return;
        };
        fields.style.set(effects.genre.form_value().to_owned());
        form.update(LeadFormState::note_edit);
        audio::play(CLICK_CUE);

        #[cfg(feature = "csr")]
        {
            use gloo_timers::callback::Timeout;

            Timeout::new(restart_ms, move || {
                selection.update(|s| {
                    s.hint_pulse.resume(effects.hint_seq);
                    s.vinyl_spin.resume(effects.vinyl_seq);
                });
            })
            .forget();
            Timeout::new(highlight_ms, move || {
                selection.update(|s| {
                    s.field_highlight.lower(effects.highlight_seq);
                });
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        let _ = (restart_ms, highlight_ms, effects);
    };

    let hover = move |index: usize| {
        if selection.with_untracked(|s| s.hover_plays_cue(index)) {
            audio::play(HOVER_CUE);
        }
    };

    view! {
        <div class="style-picker">
            <div class="vinyl" class:spinning=move || selection.with(|s| s.vinyl_spin.running)></div>
            <p id="styleHint" class="style-hint" class:pulse=move || selection.with(|s| s.hint_pulse.running)>
                {move || selection.with(|s| s.hint)}
            </p>
            <div class="music-cards">
                {STYLE_CHOICES
                    .iter()
                    .enumerate()
                    .map(|(index, choice)| {
                        view! {
                            <div
                                class="music-card"
                                class:active=move || selection.with(|s| s.is_active(index))
                                data-style=choice.display
                                on:click=move |_| select(index)
                                on:mouseenter=move |_| hover(index)
                            >
                                <span class="music-card-icon">{choice.icon}</span>
                                <span class="music-card-name">{choice.genre.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
