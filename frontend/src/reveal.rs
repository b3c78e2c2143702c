use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use prevos_shared::config::RevealConfig;
use prevos_shared::constants::REVEAL_SELECTOR;
use prevos_shared::events::{EventBus, EventKind, UiEvent};
use prevos_shared::reveal::{RevealAction, RevealTrigger};
use prevos_shared::Result;
use web_sys::{Document, Element};

use crate::dom::{query_all, set_style};
use crate::intersection;

fn apply(elements: &[Element], actions: &[RevealAction]) {
    for action in actions {
        if let Some(el) = elements.get(action.key()) {
            let (property, value) = action.style();
            set_style(el, property, value);
        }
    }
}

/// Hides every card, then fades each in the first time it scrolls into view.
/// Visibility batches go through the page's event bus so the trigger only
/// ever sees `UiEvent`s.
pub fn init(document: &Document, config: &RevealConfig, bus: &Rc<RefCell<EventBus>>) -> Result<()> {
    let elements = query_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let mut trigger = RevealTrigger::new(config);
    apply(&elements, &trigger.register(0..elements.len()));
    let policy = *trigger.policy();
    debug!("watching {} reveal elements", elements.len());

    let trigger = Rc::new(RefCell::new(trigger));
    let started = Rc::new(RefCell::new(Vec::<RevealAction>::new()));
    {
        let started = started.clone();
        bus.borrow_mut().subscribe(EventKind::Visibility, move |event| {
            started.borrow_mut().extend(trigger.borrow_mut().handle(event));
        });
    }

    let targets = Rc::new(elements.clone());
    let bus = bus.clone();
    intersection::observe(elements, &policy, move |batch| {
        bus.borrow_mut().dispatch(&UiEvent::Visibility(batch.to_vec()));
        let actions: Vec<RevealAction> = started.borrow_mut().drain(..).collect();
        apply(&targets, &actions);
        actions.iter().map(RevealAction::key).collect()
    })
}
