//! Live "tracks created" counter in the hero.

use leptos::prelude::*;

use crate::config::LandingConfig;
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::util::format::total_tracks_label;

/// Shown until the stats endpoint answers, and kept if it never does.
pub const STATIC_TRACKS_LABEL: &str = "10,000+";

#[component]
pub fn StatsCounter() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let label = RwSignal::new(STATIC_TRACKS_LABEL.to_owned());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::fetch_stats(&config.stats_endpoint).await {
            Ok(stats) => {
                if let Some(text) = total_tracks_label(stats.total_tracks) {
                    label.set(text);
                }
            }
            Err(e) => log::warn!("stats fetch failed: {e}"),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = config;

    view! {
        <div class="stat">
            <span id="total-tracks" class="stat-number">{move || label.get()}</span>
            <span class="stat-label">"треков создано"</span>
        </div>
    }
}
