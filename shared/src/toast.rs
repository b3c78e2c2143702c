#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Unknown or missing types fall back to info.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("success") => Severity::Success,
            Some("error") => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Severity::Success => "var(--success)",
            Severity::Error => "var(--danger)",
            Severity::Info => "var(--info)",
        }
    }
}

pub const ENTER_ANIMATION: &str = "slideInRight 0.3s ease-out";
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease-out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; \
             top: 20px; \
             right: 20px; \
             background: var(--bg-card); \
             color: var(--text-primary); \
             padding: 1rem 1.5rem; \
             border-radius: var(--radius-lg); \
             box-shadow: var(--shadow-xl); \
             border-left: 4px solid {}; \
             z-index: 10000; \
             animation: {}; \
             max-width: 350px;",
            self.severity.accent(),
            ENTER_ANIMATION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_carries_accent_and_entry_animation() {
        for severity in [Severity::Success, Severity::Error, Severity::Info] {
            let style = Toast::new("Guardado", severity).style();
            assert!(style.contains(&format!("border-left: 4px solid {};", severity.accent())));
            assert!(style.contains(ENTER_ANIMATION));
        }
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse(Some("success")), Severity::Success);
        assert_eq!(Severity::parse(Some("error")), Severity::Error);
        assert_eq!(Severity::parse(Some("warning")), Severity::Info);
        assert_eq!(Severity::parse(None), Severity::Info);
        assert_eq!(Severity::Error.accent(), "var(--danger)");
    }
}
