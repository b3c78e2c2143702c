use crate::observer::Rect;

pub const TOOLTIP_GAP_PX: f64 = 10.0;

pub const TOOLTIP_STYLE: &str = "position: absolute; \
    background: var(--bg-card); \
    color: var(--text-primary); \
    padding: 0.5rem 1rem; \
    border-radius: var(--radius-md); \
    font-size: 0.85rem; \
    box-shadow: var(--shadow-lg); \
    pointer-events: none; \
    z-index: 10000; \
    white-space: nowrap; \
    border: 1px solid var(--border-color);";

/// Top-left corner for a tooltip centered horizontally above `anchor`.
pub fn position(anchor: Rect, tooltip_width: f64, tooltip_height: f64) -> (f64, f64) {
    let left = anchor.left + anchor.width / 2.0 - tooltip_width / 2.0;
    let top = anchor.top - tooltip_height - TOOLTIP_GAP_PX;
    (left, top)
}
