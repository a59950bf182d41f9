//! Decorative hero background.

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::util::particles::{generate_particles, page_rng};

/// A fixed set of floating dots, generated once when the page mounts.
#[component]
pub fn ParticleField() -> impl IntoView {
    let count = use_context::<LandingConfig>().unwrap_or_default().particle_count;
    let particles = generate_particles(count, &mut page_rng());

    view! {
        <div id="particles" class="particles" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| view! { <div class="particle" style=p.style()></div> })
                .collect_view()}
        </div>
    }
}
