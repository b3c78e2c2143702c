use serde::Deserialize;

use crate::error::{Result, UiError};

/// Tunables for every behavior on the site. Templates may override any subset
/// through a JSON block; fields left out keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub particles: ParticleConfig,
    pub scroll_offset_px: f64,
    pub toast: ToastConfig,
    pub counter: CounterConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin_px: f64,
    pub animation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold_px: f64,
    pub raised_shadow: String,
    pub resting_shadow: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_size_px: f64,
    pub max_size_px: f64,
    pub min_duration_s: f64,
    pub max_duration_s: f64,
    pub max_delay_s: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub visible_ms: u32,
    pub exit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u32,
    pub default_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            navbar: NavbarConfig::default(),
            particles: ParticleConfig::default(),
            scroll_offset_px: 80.0,
            toast: ToastConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
            animation: "fadeInUp 0.8s ease-out forwards".to_string(),
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            raised_shadow: "0 10px 30px rgba(0, 0, 0, 0.5)".to_string(),
            resting_shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.4)".to_string(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min_size_px: 2.0,
            max_size_px: 6.0,
            min_duration_s: 10.0,
            max_duration_s: 30.0,
            max_delay_s: 5.0,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            default_duration_ms: 2000,
        }
    }
}

impl ToastConfig {
    /// Milliseconds after showing when the slide-out animation starts.
    pub fn leave_at(&self) -> u32 {
        self.visible_ms
    }

    /// Milliseconds after showing when the toast is detached.
    pub fn remove_at(&self) -> u32 {
        self.visible_ms.saturating_add(self.exit_ms)
    }

    /// Delay of the second timer, counted from the start of the slide-out.
    pub fn exit_delay(&self) -> u32 {
        self.remove_at() - self.leave_at()
    }
}

impl SiteConfig {
    /// Checks the ranges that would otherwise produce nonsense (empty random
    /// ranges, thresholds outside [0, 1], a zero-length tick).
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(UiError::Config(format!(
                "reveal threshold {} outside [0, 1]",
                self.reveal.threshold
            )));
        }
        let p = &self.particles;
        if p.min_size_px > p.max_size_px || p.min_duration_s > p.max_duration_s {
            return Err(UiError::Config("particle ranges are inverted".to_string()));
        }
        if p.max_delay_s < 0.0 {
            return Err(UiError::Config("particle delay must be non-negative".to_string()));
        }
        if self.counter.tick_ms == 0 {
            return Err(UiError::Config("counter tick must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"reveal": {"threshold": 0.25}, "scroll_offset_px": 64}"#)
                .unwrap();
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.bottom_margin_px, 50.0);
        assert_eq!(config.scroll_offset_px, 64.0);
        assert_eq!(config.toast, ToastConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.5;
        assert!(matches!(config.validate(), Err(UiError::Config(_))));
    }

    #[test]
    fn test_toast_schedule() {
        let toast = ToastConfig::default();
        assert_eq!(toast.leave_at(), 3000);
        assert_eq!(toast.remove_at(), 3300);
        assert_eq!(toast.leave_at() + toast.exit_delay(), toast.remove_at());

        let saturated = ToastConfig {
            visible_ms: u32::MAX,
            exit_ms: 300,
        };
        assert_eq!(saturated.remove_at(), u32::MAX);
        assert_eq!(saturated.exit_delay(), 0);
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let mut config = SiteConfig::default();
        config.counter.tick_ms = 0;
        assert!(config.validate().is_err());
    }
}
