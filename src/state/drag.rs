//! Style chip drag state machine.
//!
//! `DragState` tracks the active gesture between pointer-down and pointer-up.
//! Positions are container-relative CSS pixels for the chip's top-left
//! corner; the browser layer supplies client-space pointer coordinates and
//! bounding rects, and writes the returned position back as `left`/`top`.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A client-space box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }
}

/// Keep a chip of `chip` size fully inside `container`.
///
/// When the chip is larger than the container on an axis, that axis pins to 0.
#[must_use]
pub fn clamp_to_container(raw: Point, container: Size, chip: Size) -> Point {
    Point::new(
        raw.x.min(container.width - chip.width).max(0.0),
        raw.y.min(container.height - chip.height).max(0.0),
    )
}

/// An in-progress drag of one chip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index of the chip being dragged.
    pub chip: usize,
    /// Pointer position relative to the chip's top-left corner at grab time.
    pub grab_offset: Point,
    /// Last container-relative position written to the chip.
    pub position: Option<Point>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self, chip: usize) -> bool {
        matches!(self, Self::Dragging(session) if session.chip == chip)
    }

    /// Pointer went down on `chip` whose client rect is `chip_rect`.
    ///
    /// A press that arrives mid-drag replaces the old session.
    pub fn begin(&mut self, chip: usize, pointer: Point, chip_rect: Rect) {
        *self = Self::Dragging(DragSession {
            chip,
            grab_offset: Point::new(pointer.x - chip_rect.left, pointer.y - chip_rect.top),
            position: None,
        });
    }

    /// Pointer moved. Returns the chip and its clamped position, or `None` when idle.
    pub fn drag_to(&mut self, pointer: Point, container_rect: Rect, chip_size: Size) -> Option<(usize, Point)> {
        let Self::Dragging(session) = self else {
            return None;
        };
        let raw = Point::new(
            pointer.x - container_rect.left - session.grab_offset.x,
            pointer.y - container_rect.top - session.grab_offset.y,
        );
        let next = clamp_to_container(raw, container_rect.size(), chip_size);
        session.position = Some(next);
        Some((session.chip, next))
    }

    /// Pointer released. Returns the finished session, if any.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}

/// Inline style for a chip that has been dragged at least once.
///
/// Chips start where the stylesheet puts them (some anchored right/bottom),
/// so a dragged chip also releases its right/bottom anchors.
#[must_use]
pub fn chip_style(position: Option<Point>) -> String {
    match position {
        Some(p) => format!("left: {}px; top: {}px; right: auto; bottom: auto;", p.x, p.y),
        None => String::new(),
    }
}
