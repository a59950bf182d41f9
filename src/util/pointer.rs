//! Mouse/touch normalization for the drag controller. Browser-only.

use wasm_bindgen::JsCast;

use crate::state::drag::{Point, Rect, Size};

/// Client coordinates of a mouse event, or of the first active touch.
///
/// Returns `None` for touch events with no active touch (e.g. `touchend`).
pub fn pointer_point(ev: &web_sys::Event) -> Option<Point> {
    if let Some(touch_ev) = ev.dyn_ref::<web_sys::TouchEvent>() {
        let touch = touch_ev.touches().get(0)?;
        return Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())));
    }
    let mouse = ev.dyn_ref::<web_sys::MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

pub fn client_rect(el: &web_sys::Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

/// Layout size of an element, excluding transforms.
pub fn offset_size(el: &web_sys::HtmlElement) -> Size {
    Size { width: f64::from(el.offset_width()), height: f64::from(el.offset_height()) }
}
