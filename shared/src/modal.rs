use crate::constants::ESCAPE_KEY;
use crate::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalInput<'a> {
    OpenClicked,
    CloseClicked,
    /// A click that landed inside the modal container. `on_backdrop` is true
    /// when the target was the overlay itself and not its content.
    ContainerClicked { on_backdrop: bool },
    Key(&'a str),
}

/// What the page has to change after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalChange {
    pub open: bool,
    pub body_overflow: &'static str,
}

#[derive(Debug, Default)]
pub struct LoginModal {
    state: ModalState,
}

impl LoginModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from whatever the page already shows, so a modal rendered open
    /// can still be closed.
    pub fn with_state(state: ModalState) -> Self {
        Self { state }
    }

    pub fn from_active_class(active: bool) -> Self {
        Self::with_state(if active {
            ModalState::Open
        } else {
            ModalState::Closed
        })
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Returns the change to apply, or `None` when the input does not move
    /// the modal (e.g. Escape while closed).
    pub fn handle(&mut self, input: ModalInput<'_>) -> Option<ModalChange> {
        let next = match (self.state, input) {
            (ModalState::Closed, ModalInput::OpenClicked) => ModalState::Open,
            (ModalState::Open, ModalInput::CloseClicked) => ModalState::Closed,
            (ModalState::Open, ModalInput::ContainerClicked { on_backdrop: true }) => {
                ModalState::Closed
            }
            (ModalState::Open, ModalInput::Key(key)) if key == ESCAPE_KEY => ModalState::Closed,
            _ => return None,
        };
        self.state = next;
        Some(match next {
            ModalState::Open => ModalChange {
                open: true,
                body_overflow: "hidden",
            },
            ModalState::Closed => ModalChange {
                open: false,
                body_overflow: "auto",
            },
        })
    }

    pub fn handle_event(&mut self, event: &UiEvent) -> Option<ModalChange> {
        match event {
            UiEvent::KeyDown { key } => self.handle(ModalInput::Key(key.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_restores_scrolling() {
        let mut modal = LoginModal::new();
        let opened = modal.handle(ModalInput::OpenClicked).unwrap();
        assert!(opened.open);
        assert_eq!(opened.body_overflow, "hidden");
        assert!(modal.handle(ModalInput::OpenClicked).is_none());

        let closed = modal.handle(ModalInput::CloseClicked).unwrap();
        assert!(!closed.open);
        assert_eq!(closed.body_overflow, "auto");
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_escape_only_closes_an_open_modal() {
        let mut modal = LoginModal::new();
        assert!(modal.handle(ModalInput::Key("Escape")).is_none());

        modal.handle(ModalInput::OpenClicked);
        assert!(modal.handle_event(&UiEvent::KeyDown { key: "Enter".into() }).is_none());
        assert!(modal.is_open());
        assert!(modal.handle_event(&UiEvent::KeyDown { key: "Escape".into() }).is_some());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_rendered_open_can_be_closed() {
        for input in [
            ModalInput::CloseClicked,
            ModalInput::Key("Escape"),
            ModalInput::ContainerClicked { on_backdrop: true },
        ] {
            let mut modal = LoginModal::from_active_class(true);
            assert_eq!(modal.state(), ModalState::Open);
            let change = modal.handle(input).unwrap();
            assert!(!change.open);
            assert_eq!(change.body_overflow, "auto");
            assert!(!modal.is_open());
        }
        assert_eq!(LoginModal::from_active_class(false).state(), ModalState::Closed);
    }

    #[test]
    fn test_clicks_inside_content_keep_it_open() {
        let mut modal = LoginModal::new();
        modal.handle(ModalInput::OpenClicked);
        assert!(modal
            .handle(ModalInput::ContainerClicked { on_backdrop: false })
            .is_none());
        assert!(modal.is_open());
        assert!(modal
            .handle(ModalInput::ContainerClicked { on_backdrop: true })
            .is_some());
        assert!(!modal.is_open());
    }
}
