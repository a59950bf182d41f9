//! Backend access for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two endpoints only: lead submission and the public stats summary. Wire
//! types live in `types`, failures in `error`, and the HTTP calls in `api`.

pub mod api;
pub mod error;
pub mod types;
