/// What a click on an in-page anchor should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Let the browser handle it (bare `#` or not an in-page link).
    Ignore,
    /// Prevent the jump and smooth-scroll to the element with this id.
    ScrollTo(&'a str),
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some("") | None => AnchorAction::Ignore,
        Some(id) => AnchorAction::ScrollTo(id),
    }
}

/// Scroll position that leaves the fixed navbar clear of the target.
pub fn scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    (target_offset_top - navbar_offset).max(0.0)
}
