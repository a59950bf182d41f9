//! Floating style chips the visitor can drag around the hero.
//!
//! DESIGN
//! ======
//! Geometry and clamping live in [`DragState`]; this component only reads
//! browser rects and writes the resulting `left/top` styles. Move/up
//! listeners go on the document so a drag survives the pointer leaving the
//! chip, and they live in a [`ListenerGuard`] that is released on pointer-up
//! or when the component unmounts.

use leptos::prelude::*;

use crate::state::drag::{DragState, Point, chip_style};
use crate::state::style::STYLE_CHOICES;
#[cfg(feature = "csr")]
use crate::util::listeners::ListenerGuard;

/// How many of the style choices float as chips.
pub const CHIP_COUNT: usize = 4;

#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct DragController {
    container: NodeRef<leptos::html::Div>,
    drag: RwSignal<DragState>,
    positions: RwSignal<Vec<Option<Point>>>,
    listeners: StoredValue<Option<ListenerGuard>, LocalStorage>,
}

#[component]
pub fn DraggableStyles() -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(DragState::default());
    let positions = RwSignal::new(vec![None::<Point>; CHIP_COUNT]);

    #[cfg(feature = "csr")]
    let ctl = {
        let ctl = DragController { container, drag, positions, listeners: StoredValue::new_local(None) };
        on_cleanup(move || {
            ctl.listeners.try_update_value(Option::take);
        });
        ctl
    };

    let press = move |ev: &leptos::ev::Event, chip: usize| {
        #[cfg(feature = "csr")]
        if let Err(err) = start_drag(ev, chip, ctl) {
            log::warn!("drag start failed: {err:?}");
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, chip);
    };

    view! {
        <div class="floating-styles" node_ref=container>
            {STYLE_CHOICES
                .iter()
                .take(CHIP_COUNT)
                .enumerate()
                .map(|(index, choice)| {
                    view! {
                        <div
                            class="draggable-style"
                            class:dragging=move || drag.with(|d| d.is_dragging(index))
                            style=move || positions.with(|p| chip_style(p.get(index).copied().flatten()))
                            on:mousedown=move |ev| press(&ev, index)
                            on:touchstart=move |ev| press(&ev, index)
                        >
                            {choice.icon}
                            " "
                            {choice.genre.label()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(feature = "csr")]
fn start_drag(ev: &web_sys::Event, chip: usize, ctl: DragController) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    use crate::util::pointer::{client_rect, offset_size, pointer_point};

    ev.prevent_default();
    let Some(pointer) = pointer_point(ev) else {
        return Ok(());
    };
    let el: web_sys::HtmlElement = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|t| t.closest(".draggable-style").ok().flatten())
        .ok_or_else(|| JsValue::from_str("drag target missing"))?
        .dyn_into()?;
    ctl.drag.update(|d| d.begin(chip, pointer, client_rect(&el)));
    log::debug!("drag start: chip {chip}");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let mut guard = ListenerGuard::new(document.into());

    let on_move = move |ev: web_sys::Event| {
        let Some(pointer) = pointer_point(&ev) else {
            return;
        };
        ev.prevent_default();
        let Some(container) = ctl.container.get_untracked() else {
            return;
        };
        let container_rect = client_rect(&container);
        let chip_size = offset_size(&el);
        let moved = ctl.drag.try_update(|d| d.drag_to(pointer, container_rect, chip_size)).flatten();
        if let Some((chip, position)) = moved {
            ctl.positions.update(|p| {
                if let Some(slot) = p.get_mut(chip) {
                    *slot = Some(position);
                }
            });
        }
    };
    guard.listen("mousemove", on_move.clone())?;
    guard.listen("touchmove", on_move)?;
    guard.listen("mouseup", move |_| end_drag(ctl))?;
    guard.listen("touchend", move |_| end_drag(ctl))?;

    ctl.listeners.set_value(Some(guard));
    Ok(())
}

#[cfg(feature = "csr")]
fn end_drag(ctl: DragController) {
    if let Some(session) = ctl.drag.try_update(DragState::end).flatten() {
        log::debug!("drag end: chip {} at {:?}", session.chip, session.position);
    }
    // Runs inside one of the guard's own closures: detach now, free next tick.
    if let Some(mut guard) = ctl.listeners.try_update_value(Option::take).flatten() {
        guard.detach();
        gloo_timers::callback::Timeout::new(0, move || drop(guard)).forget();
    }
}
