//! Scoped document-level event listeners. Browser-only.
//!
//! A [`ListenerGuard`] owns the closures it registered. Detaching removes
//! them from the target; dropping the guard detaches if that has not
//! happened yet, so a component teardown mid-gesture cannot leak listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

type Handler = Closure<dyn FnMut(web_sys::Event)>;

pub struct ListenerGuard {
    target: web_sys::EventTarget,
    handlers: Vec<(&'static str, Handler)>,
    attached: bool,
}

impl ListenerGuard {
    #[must_use]
    pub fn new(target: web_sys::EventTarget) -> Self {
        Self { target, handlers: Vec::new(), attached: true }
    }

    /// Register `handler` for `event` as a non-passive listener, so it may
    /// call `prevent_default` on touch moves.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if registration fails.
    pub fn listen(&mut self, event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), JsValue> {
        let handler: Handler = Closure::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        self.target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            handler.as_ref().unchecked_ref(),
            &options,
        )?;
        self.handlers.push((event, handler));
        Ok(())
    }

    /// Remove every listener from the target. The closures stay alive until
    /// the guard drops, so this is safe to call from inside one of them.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for (event, handler) in &self.handlers {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                log::debug!("failed to remove {event} listener: {err:?}");
            }
        }
        self.attached = false;
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}
