//! Scroll-triggered entrance animation wrapper.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::LandingConfig;
use crate::state::reveal::RevealState;

#[cfg(feature = "csr")]
type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Owns a live observer and its callback; disconnects on drop.
#[cfg(feature = "csr")]
struct ObserverGuard {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "csr")]
impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Wraps `children` in a block that fades and slides in the first time it
/// scrolls into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let state = RwSignal::new(RevealState::default());

    #[cfg(feature = "csr")]
    {
        let config = use_context::<LandingConfig>().unwrap_or_default();
        let slot = StoredValue::new_local(None::<ObserverGuard>);
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if slot.with_value(Option::is_some) {
                return;
            }
            match observe(&el, state, &config) {
                Ok(guard) => slot.set_value(Some(guard)),
                Err(err) => {
                    log::debug!("reveal observer unavailable: {err:?}");
                    state.update(|s| {
                        s.observe(true);
                    });
                }
            }
        });
        on_cleanup(move || {
            slot.try_update_value(Option::take);
        });
    }

    view! {
        <div
            node_ref=node
            class=move || format!("{class} {}", state.get().class()).trim().to_owned()
            style=move || state.get().style()
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
fn observe(
    el: &web_sys::Element,
    state: RwSignal<RevealState>,
    config: &LandingConfig,
) -> Result<ObserverGuard, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let callback: ObserverCallback =
        wasm_bindgen::closure::Closure::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if state.try_update(|s| s.observe(entry.is_intersecting())) == Some(true) {
                    observer.unobserve(&entry.target());
                    log::debug!("revealed {}", entry.target().class_name());
                }
            }
        });

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&config.reveal_root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);
    Ok(ObserverGuard { observer, _callback: callback })
}
