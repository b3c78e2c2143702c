//! Decorative particles for the hero section.

use rand::Rng;

use crate::config::ParticleConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleStyle {
    /// Inline style properties in the order they are applied. The delay is
    /// negative so every particle starts mid-animation.
    pub fn css_properties(&self) -> [(&'static str, String); 6] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("-{}s", self.delay_s)),
        ]
    }
}

fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

pub fn generate<R: Rng>(config: &ParticleConfig, rng: &mut R) -> Vec<ParticleStyle> {
    (0..config.count)
        .map(|_| ParticleStyle {
            left_pct: sample(rng, 0.0, 100.0),
            top_pct: sample(rng, 0.0, 100.0),
            size_px: sample(rng, config.min_size_px, config.max_size_px),
            duration_s: sample(rng, config.min_duration_s, config.max_duration_s),
            delay_s: sample(rng, 0.0, config.max_delay_s),
        })
        .collect()
}
