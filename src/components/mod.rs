//! Landing page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns the DOM for one interactive region and keeps its
//! decisions in a `state::*` type. Shared signals (style selection, form
//! fields, form lifecycle) are provided by `App` through context.

pub mod draggable_styles;
pub mod lead_form;
pub mod navbar;
pub mod particle_field;
pub mod reveal;
pub mod stats_counter;
pub mod style_cards;
