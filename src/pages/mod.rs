//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single landing page. It owns section layout and delegates
//! every interactive region to `components`.

pub mod landing;
