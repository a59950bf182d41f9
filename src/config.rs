//! Landing page tunables: endpoints, timing windows, and effect sizes.
//!
//! DESIGN
//! ======
//! One plain struct provided through Leptos context at the app root. The page
//! has no environment or persisted settings, so defaults are the only source;
//! tests and embedding pages may construct their own value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime configuration shared by every landing component.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    /// Lead submission endpoint (`POST`).
    pub leads_endpoint: String,
    /// Read-only statistics endpoint (`GET`).
    pub stats_endpoint: String,
    /// Delay after a successful submission before the submit control re-enables.
    pub submit_cooldown_ms: u32,
    /// How long a submission error banner stays up without further edits.
    pub error_banner_ms: u32,
    /// How long the style field stays highlighted after a card selection.
    pub style_highlight_ms: u32,
    /// Gap between resetting a CSS animation and restarting it.
    pub animation_restart_ms: u32,
    /// Number of decorative particles in the hero background.
    pub particle_count: usize,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
    /// Root margin handed to the reveal observer.
    pub reveal_root_margin: String,
    /// Scroll offset in pixels past which the navbar turns opaque.
    pub navbar_solid_after_px: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            leads_endpoint: "/api/leads".to_owned(),
            stats_endpoint: "/api/stats".to_owned(),
            submit_cooldown_ms: 3_000,
            error_banner_ms: 6_000,
            style_highlight_ms: 2_000,
            animation_restart_ms: 10,
            particle_count: 25,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px".to_owned(),
            navbar_solid_after_px: 50.0,
        }
    }
}
