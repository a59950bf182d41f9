//! Lead capture form: inline validation, submit lifecycle, status banner.
//!
//! The field signals live in [`LeadFields`] and are provided at the app root
//! because the style cards write the same `style` slot. Every decision about
//! submitting is delegated to [`LeadFormState`].

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use leptos::prelude::*;

use crate::config::LandingConfig;
#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::Genre;
#[cfg(feature = "csr")]
use crate::state::lead_form::Finished;
use crate::state::lead_form::{LeadFormState, SubmitDecision};
use crate::state::style::StyleSelectionState;
use crate::util::validation::{Field, LeadDraft};

/// Named slots for every value the form reads.
#[derive(Clone, Copy)]
pub struct LeadFields {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub style: RwSignal<String>,
    pub has_text: RwSignal<bool>,
    pub text_description: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl LeadFields {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            style: RwSignal::new(String::new()),
            has_text: RwSignal::new(false),
            text_description: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    /// Snapshot the current values without subscribing.
    #[must_use]
    pub fn draft(&self) -> LeadDraft {
        LeadDraft {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            style: self.style.get_untracked(),
            has_text: self.has_text.get_untracked(),
            text_description: self.text_description.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    /// Clear every field, which also collapses the lyrics group.
    pub fn reset(&self) {
        for slot in [self.name, self.email, self.phone, self.style, self.text_description, self.message] {
            slot.set(String::new());
        }
        self.has_text.set(false);
    }
}

impl Default for LeadFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LeadForm() -> impl IntoView {
    let fields = expect_context::<LeadFields>();
    let form = expect_context::<RwSignal<LeadFormState>>();
    let selection = expect_context::<RwSignal<StyleSelectionState>>();
    let config = use_context::<LandingConfig>().unwrap_or_default();

    #[cfg(feature = "csr")]
    let (leads_endpoint, cooldown_ms, error_banner_ms) =
        (config.leads_endpoint.clone(), config.submit_cooldown_ms, config.error_banner_ms);
    #[cfg(not(feature = "csr"))]
    let _ = config;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = fields.draft();
        let Some(SubmitDecision::Send(lead)) = form.try_update(|f| f.begin_submit(&draft)) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let endpoint = leads_endpoint.clone();
            leptos::task::spawn_local(async move {
                let outcome = api::submit_lead(&endpoint, &lead).await;
                if let Err(err) = &outcome {
                    log::warn!("lead submission failed: {err}");
                }
                match form.try_update(|f| f.finish(outcome)).flatten() {
                    Some(Finished::Succeeded { seq }) => {
                        fields.reset();
                        gloo_timers::callback::Timeout::new(cooldown_ms, move || {
                            form.update(|f| {
                                f.settle(seq);
                            });
                        })
                        .forget();
                    }
                    Some(Finished::Failed { seq }) => {
                        gloo_timers::callback::Timeout::new(error_banner_ms, move || {
                            form.update(|f| {
                                f.settle(seq);
                            });
                        })
                        .forget();
                    }
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = lead;
    };

    let edit = move |slot: RwSignal<String>, value: String| {
        slot.set(value);
        form.update(LeadFormState::note_edit);
    };
    let field_error = move |field: Field| form.with(|f| f.errors.get(field).unwrap_or_default());

    view! {
        <form id="leadForm" class="lead-form" novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Ваше имя"</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Иван"
                    prop:value=move || fields.name.get()
                    on:input=move |ev| edit(fields.name, event_target_value(&ev))
                />
                <span id="nameError" class="error-message">{move || field_error(Field::Name)}</span>
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || fields.email.get()
                    on:input=move |ev| edit(fields.email, event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="phone">"Телефон"</label>
                <input
                    id="phone"
                    type="tel"
                    placeholder="+7 (999) 999-99-99"
                    prop:value=move || fields.phone.get()
                    on:input=move |ev| edit(fields.phone, event_target_value(&ev))
                />
                <span
                    id="phoneError"
                    class="error-message"
                    class:hint=move || form.with(|f| f.errors.phone.is_none())
                >
                    {move || form.with(|f| f.errors.phone_slot())}
                </span>
            </div>

            <div class="form-group">
                <label for="style">"Музыкальный стиль"</label>
                <select
                    id="style"
                    class:highlighted=move || selection.with(|s| s.field_highlight.on)
                    prop:value=move || fields.style.get()
                    on:change=move |ev| edit(fields.style, event_target_value(&ev))
                >
                    <option value="">"Выберите стиль"</option>
                    {Genre::ALL
                        .into_iter()
                        .map(|genre| view! { <option value=genre.form_value()>{genre.label()}</option> })
                        .collect_view()}
                </select>
                <span id="styleError" class="error-message">{move || field_error(Field::Style)}</span>
            </div>

            <fieldset class="form-group radio-group">
                <legend>"Есть готовый текст песни?"</legend>
                <label>
                    <input
                        type="radio"
                        name="has_text"
                        value="no"
                        prop:checked=move || !fields.has_text.get()
                        on:change=move |_| {
                            fields.has_text.set(false);
                            form.update(LeadFormState::note_edit);
                        }
                    />
                    "Нет, нужен текст"
                </label>
                <label>
                    <input
                        type="radio"
                        name="has_text"
                        value="yes"
                        prop:checked=move || fields.has_text.get()
                        on:change=move |_| {
                            fields.has_text.set(true);
                            form.update(LeadFormState::note_edit);
                        }
                    />
                    "Да, текст есть"
                </label>
            </fieldset>

            <div id="textDescriptionGroup" class="form-group" class:hidden=move || !fields.has_text.get()>
                <label for="text_description">"О чём песня?"</label>
                <textarea
                    id="text_description"
                    rows="3"
                    required=move || fields.has_text.get()
                    prop:value=move || fields.text_description.get()
                    on:input=move |ev| edit(fields.text_description, event_target_value(&ev))
                ></textarea>
                <span class="error-message">{move || field_error(Field::TextDescription)}</span>
            </div>

            <div class="form-group">
                <label for="message">"Комментарий"</label>
                <textarea
                    id="message"
                    rows="3"
                    prop:value=move || fields.message.get()
                    on:input=move |ev| edit(fields.message, event_target_value(&ev))
                ></textarea>
            </div>

            <button class="btn btn-primary" type="submit" disabled=move || form.with(|f| !f.submit_enabled())>
                <span id="submitText" class:hidden=move || form.with(LeadFormState::is_loading)>
                    "Отправить заявку"
                </span>
                <span id="submitLoader" class="loader" class:hidden=move || form.with(|f| !f.is_loading())></span>
            </button>

            <div
                id="formStatus"
                class=move || form.with(|f| f.banner().map_or("form-status", |b| b.class()))
            >
                {move || form.with(|f| f.banner().map(|b| b.text()).unwrap_or_default())}
            </div>
        </form>
    }
}
