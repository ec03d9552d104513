//! Responder contract
//!
//! How the view-model talks back to the screen.

use crate::events::ResponderEvent;
use crate::models::ListItemData;
use std::sync::mpsc::Sender;

/// Calls a view-model may make on the presentation layer
pub trait CreateRoomResponder {
    /// Replaces input row `index` with one built from `item`. Out-of-range is ignored.
    fn update_row(&mut self, item: ListItemData, index: usize);

    fn show_speaker_mode_overlay(&mut self);

    fn notify_user(&mut self, message: &str);

    /// Starts or stops the loading indicator
    fn set_loading(&mut self, _active: bool) {}
}

/// Registered with the view-model at attach time.
///
/// Calls are queued and applied by the screen on its next frame, so the
/// view-model can respond at any point without borrowing the screen.
#[derive(Clone, Debug)]
pub struct ResponderHandle {
    sender: Sender<ResponderEvent>,
}

impl ResponderHandle {
    pub fn new(sender: Sender<ResponderEvent>) -> Self {
        Self { sender }
    }

    fn push(&self, event: ResponderEvent) {
        // The screen has been dropped; there is nobody to update.
        let _ = self.sender.send(event);
    }
}

impl CreateRoomResponder for ResponderHandle {
    fn update_row(&mut self, item: ListItemData, index: usize) {
        self.push(ResponderEvent::UpdateRow { item, index });
    }

    fn show_speaker_mode_overlay(&mut self) {
        self.push(ResponderEvent::ShowSpeakerModeOverlay);
    }

    fn notify_user(&mut self, message: &str) {
        self.push(ResponderEvent::NotifyUser(message.to_string()));
    }

    fn set_loading(&mut self, active: bool) {
        self.push(ResponderEvent::SetLoading(active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_handle_queues_every_call() {
        let (tx, rx) = channel();
        let mut handle = ResponderHandle::new(tx);

        handle.update_row(ListItemData::text("Room Type", "Raise Hand Room"), 0);
        handle.show_speaker_mode_overlay();
        handle.notify_user("hello");
        handle.set_loading(true);

        let events: Vec<ResponderEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], ResponderEvent::UpdateRow { index: 0, item } if item.label == "Room Type"));
        assert!(matches!(events[1], ResponderEvent::ShowSpeakerModeOverlay));
        assert!(matches!(&events[2], ResponderEvent::NotifyUser(m) if m == "hello"));
        assert!(matches!(events[3], ResponderEvent::SetLoading(true)));
    }

    #[test]
    fn test_handle_ignores_closed_screen() {
        let (tx, rx) = channel();
        drop(rx);
        let mut handle = ResponderHandle::new(tx);
        handle.notify_user("dropped");
    }
}
