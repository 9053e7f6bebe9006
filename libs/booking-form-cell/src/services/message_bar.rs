use crate::models::{MessageBarState, MessageKind};
use crate::view::BookingView;

/// Status line shared by the loader and the submitter. Each call replaces
/// whatever was shown before.
pub struct MessageBar;

impl MessageBar {
    pub fn state(text: &str, kind: MessageKind) -> MessageBarState {
        if text.is_empty() {
            return MessageBarState::default();
        }

        MessageBarState {
            text: text.to_string(),
            kind: Some(kind),
            visible: true,
        }
    }

    pub fn show<V: BookingView + ?Sized>(view: &mut V, text: &str, kind: MessageKind) {
        view.show_message(&Self::state(text, kind));
    }

    pub fn error<V: BookingView + ?Sized>(view: &mut V, text: &str) {
        Self::show(view, text, MessageKind::Error);
    }

    pub fn success<V: BookingView + ?Sized>(view: &mut V, text: &str) {
        Self::show(view, text, MessageKind::Ok);
    }

    pub fn clear<V: BookingView + ?Sized>(view: &mut V) {
        view.show_message(&MessageBarState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessView;

    #[test]
    fn test_empty_text_hides_bar() {
        let state = MessageBar::state("", MessageKind::Ok);
        assert!(!state.visible);
        assert_eq!(state.kind, None);
    }

    #[test]
    fn test_newest_message_replaces_previous() {
        let mut view = HeadlessView::new();

        MessageBar::error(&mut view, "primero");
        MessageBar::success(&mut view, "segundo");

        assert_eq!(view.message.text, "segundo");
        assert_eq!(view.message.kind.map(|k| k.css_class()), Some("ok"));
        assert!(view.message.visible);

        MessageBar::clear(&mut view);
        assert_eq!(view.message, MessageBarState::default());
    }
}
