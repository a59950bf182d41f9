//! Fixed top navigation: scroll-dependent background and smooth anchor links.

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::util::scroll::{NavbarScroll, ScrollAlign, anchor_target, scroll_to_id};

/// In-page sections linked from the navbar, as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#styles", "Стили"),
    ("#benefits", "Преимущества"),
    ("#how-it-works", "Как это работает"),
    ("#contact", "Заявка"),
];

/// Intercept an in-page link click and scroll smoothly instead of jumping.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if let Some(id) = anchor_target(href) {
        ev.prevent_default();
        scroll_to_id(id, ScrollAlign::Start);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let scroll = RwSignal::new(NavbarScroll::new(config.navbar_solid_after_px));

    #[cfg(feature = "csr")]
    {
        let slot = StoredValue::new_local(None::<crate::util::listeners::ListenerGuard>);
        if let Some(window) = web_sys::window() {
            let mut guard = crate::util::listeners::ListenerGuard::new(window.clone().into());
            let listened = guard.listen("scroll", move |_| {
                let y = window.scroll_y().unwrap_or_default();
                scroll.update(|s| {
                    s.observe(y);
                });
            });
            match listened {
                Ok(()) => slot.set_value(Some(guard)),
                Err(err) => log::debug!("navbar scroll listener failed: {err:?}"),
            }
        }
        on_cleanup(move || {
            slot.try_update_value(Option::take);
        });
    }

    view! {
        <nav class="navbar" style=move || scroll.with(|s| s.tone().background())>
            <a class="logo" href="#" on:click=move |ev| {
                ev.prevent_default();
                scroll_to_id("top", ScrollAlign::Start);
            }>
                "🎵 AI Music"
            </a>
            <ul class="nav-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a href=href on:click=move |ev| follow_anchor(&ev, href)>
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
