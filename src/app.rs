//! Application root: shared context and page shell.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::lead_form::LeadFields;
use crate::config::LandingConfig;
use crate::pages::landing::LandingPage;
use crate::state::lead_form::LeadFormState;
use crate::state::style::StyleSelectionState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(LandingConfig::default());
    provide_context(RwSignal::new(StyleSelectionState::default()));
    provide_context(RwSignal::new(LeadFormState::default()));
    provide_context(LeadFields::new());

    view! {
        <Title text="AI Music: песня в любом стиле" />
        <LandingPage />
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© AI Music. Музыка, созданная нейросетью."</p>
        </footer>
    }
}
