//! Application state types for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each interactive block keeps its state in one of these plain structs,
//! wrapped in a Leptos signal by the component that owns it. Transitions are
//! methods here so they can be tested without a browser.

pub mod drag;
pub mod lead_form;
pub mod reveal;
pub mod style;
