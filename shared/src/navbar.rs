use crate::config::NavbarConfig;
use crate::events::UiEvent;

/// Box shadow for the navbar at a given vertical scroll offset.
pub fn shadow_for(config: &NavbarConfig, offset_y: f64) -> &str {
    if offset_y > config.scroll_threshold_px {
        &config.raised_shadow
    } else {
        &config.resting_shadow
    }
}

pub fn shadow_for_event<'a>(config: &'a NavbarConfig, event: &UiEvent) -> Option<&'a str> {
    match event {
        UiEvent::Scroll { offset_y } => Some(shadow_for(config, *offset_y)),
        _ => None,
    }
}

/// Nav links point at the exact path they serve, so only an exact match is
/// marked active.
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_switches_past_threshold() {
        let config = NavbarConfig::default();
        assert_eq!(shadow_for(&config, 0.0), config.resting_shadow);
        assert_eq!(shadow_for(&config, 50.0), config.resting_shadow);
        assert_eq!(shadow_for(&config, 50.5), config.raised_shadow);
        assert_eq!(
            shadow_for_event(&config, &UiEvent::Scroll { offset_y: 400.0 }),
            Some(config.raised_shadow.as_str())
        );
        assert_eq!(shadow_for_event(&config, &UiEvent::KeyDown { key: "Escape".into() }), None);
    }

    #[test]
    fn test_active_link_needs_exact_path() {
        assert!(is_active_link(Some("/riesgos/"), "/riesgos/"));
        assert!(!is_active_link(Some("/riesgos"), "/riesgos/"));
        assert!(!is_active_link(None, "/"));
    }
}
