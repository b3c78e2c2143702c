use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use log::debug;
use prevos_shared::constants::{ACTIVE_CLASS, CLOSE_MODAL_ID, LOGIN_BUTTON_ID, LOGIN_MODAL_ID};
use prevos_shared::events::{EventBus, EventKind};
use prevos_shared::modal::{LoginModal, ModalChange, ModalInput};
use prevos_shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::{body, warn_on_err};

fn apply(modal: &Element, body: &HtmlElement, change: Option<ModalChange>) {
    let Some(change) = change else { return };
    let classes = modal.class_list();
    let toggled = if change.open {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
    warn_on_err("modal class", toggled);
    warn_on_err(
        "body overflow",
        body.style().set_property("overflow", change.body_overflow),
    );
}

pub fn init(document: &Document, bus: &Rc<RefCell<EventBus>>) -> Result<()> {
    let Some(modal) = document.get_element_by_id(LOGIN_MODAL_ID) else {
        return Ok(());
    };
    let body = body(document)?;
    let rendered_open = modal.class_list().contains(ACTIVE_CLASS);
    let state = Rc::new(RefCell::new(LoginModal::from_active_class(rendered_open)));

    if let Some(button) = document.get_element_by_id(LOGIN_BUTTON_ID) {
        let (state, modal, body) = (state.clone(), modal.clone(), body.clone());
        EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                apply(&modal, &body, state.borrow_mut().handle(ModalInput::OpenClicked));
            },
        )
        .forget();
    }

    if let Some(close) = document.get_element_by_id(CLOSE_MODAL_ID) {
        let (state, modal, body) = (state.clone(), modal.clone(), body.clone());
        EventListener::new(&close, "click", move |_event: &Event| {
            apply(&modal, &body, state.borrow_mut().handle(ModalInput::CloseClicked));
        })
        .forget();
    }

    {
        let (state, overlay, body) = (state.clone(), modal.clone(), body.clone());
        EventListener::new(&modal, "click", move |event: &Event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == overlay);
            let change = state
                .borrow_mut()
                .handle(ModalInput::ContainerClicked { on_backdrop });
            apply(&overlay, &body, change);
        })
        .forget();
    }

    bus.borrow_mut().subscribe(EventKind::KeyDown, move |event| {
        apply(&modal, &body, state.borrow_mut().handle_event(event));
    });

    debug!("login modal ready");
    Ok(())
}
