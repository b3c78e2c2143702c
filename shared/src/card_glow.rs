use crate::observer::Rect;

/// Pointer offset inside a card, written to `--mouse-x` / `--mouse-y` so the
/// stylesheet can center its glow there.
pub fn glow_properties(card: Rect, client_x: f64, client_y: f64) -> [(&'static str, String); 2] {
    [
        ("--mouse-x", format!("{}px", client_x - card.left)),
        ("--mouse-y", format!("{}px", client_y - card.top)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_relative_to_card() {
        let card = Rect { left: 100.0, top: 40.0, width: 300.0, height: 200.0 };
        let props = glow_properties(card, 130.0, 95.5);
        assert_eq!(props[0], ("--mouse-x", "30px".to_string()));
        assert_eq!(props[1], ("--mouse-y", "55.5px".to_string()));
    }
}
