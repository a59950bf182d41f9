//! Hero background particle generation.
//!
//! Particles are pure decoration: random size, tint and position, each
//! floating on its own CSS animation cycle. Generation takes the RNG as a
//! parameter so the layout is reproducible from a seed.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One decorative dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub width_px: f64,
    pub height_px: f64,
    pub alpha: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub float_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            width_px: rng.random_range(2.0..6.0),
            height_px: rng.random_range(2.0..6.0),
            alpha: rng.random_range(0.2..0.7),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            float_secs: rng.random_range(10.0..20.0),
            delay_secs: rng.random_range(0.0..5.0),
        }
    }

    /// Inline style for the particle's `<div>`.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {:.2}px; height: {:.2}px; \
             background: rgba(99, 102, 241, {:.2}); border-radius: 50%; \
             left: {:.2}%; top: {:.2}%; \
             animation: float {:.2}s ease-in-out infinite; animation-delay: {:.2}s; \
             pointer-events: none;",
            self.width_px, self.height_px, self.alpha, self.left_pct, self.top_pct, self.float_secs, self.delay_secs,
        )
    }
}

#[must_use]
pub fn generate_particles(count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// A fresh generator, seeded from the clock in the browser.
#[must_use]
pub fn page_rng() -> SmallRng {
    #[cfg(feature = "csr")]
    {
        SmallRng::seed_from_u64(js_sys::Date::now().to_bits())
    }
    #[cfg(not(feature = "csr"))]
    {
        SmallRng::seed_from_u64(0x5eed)
    }
}
