use gloo_timers::callback::Timeout;
use prevos_shared::counter::CounterAnimation;
use web_sys::Element;

fn tick(element: Element, animation: CounterAnimation, n: u32) {
    let value = animation.value_at(n.saturating_mul(animation.tick_ms));
    element.set_text_content(Some(&value.to_string()));
    if n < animation.tick_count() {
        Timeout::new(animation.tick_ms, move || tick(element, animation, n + 1)).forget();
    }
}

/// Counts `element`'s text up from 0, one timer per tick. Each tick schedules
/// the next, so the chain ends on its own when the target is shown.
pub fn animate(element: Element, animation: CounterAnimation) {
    Timeout::new(animation.tick_ms, move || tick(element, animation, 1)).forget();
}
