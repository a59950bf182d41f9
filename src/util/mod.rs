//! Utility helpers shared across landing components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability. `pointer` and `listeners` wrap raw
//! `web-sys` types and only exist in browser builds.

pub mod animation;
pub mod audio;
pub mod format;
#[cfg(feature = "csr")]
pub mod listeners;
pub mod particles;
#[cfg(feature = "csr")]
pub mod pointer;
pub mod scroll;
pub mod validation;
