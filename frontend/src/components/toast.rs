/// Toast notifications and the sink the screen reports through
///
/// The screen never draws toasts itself. It hands messages to a
/// [`NotificationSink`]; the host decides how to present them.
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Anything that can surface a short message to the user
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Channel-backed sink; the host drains the receiving end every frame
#[derive(Clone)]
pub struct ToastQueue {
    sender: Sender<Toast>,
}

impl ToastQueue {
    pub fn new(sender: Sender<Toast>) -> Self {
        Self { sender }
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, message: &str) {
        // Receiver gone means the app is shutting down
        let _ = self.sender.send(Toast::new(message));
    }
}

/// Transient message anchored to the bottom of the window
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Creates a toast with the default 5-second lifetime
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// Renders the toast; returns true once it should be dropped
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired() {
            return true;
        }

        let mut dismissed = false;

        egui::Area::new(egui::Id::new("create_room_toast"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -120.0))
            .show(ctx, |ui| {
                let response = egui::Frame::new()
                    .fill(egui::Color32::from_black_alpha(200))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&self.message)
                                .size(15.0)
                                .color(egui::Color32::WHITE),
                        );
                    })
                    .response;

                // Tap to dismiss early
                if response.interact(egui::Sense::click()).clicked() {
                    dismissed = true;
                }
            });

        // Keep repainting so expiry is noticed without input
        ctx.request_repaint_after(Duration::from_millis(250));

        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_new_toast_is_live() {
        let toast = Toast::new("Room created");
        assert!(!toast.is_expired());
        assert_eq!(toast.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_duration_expires() {
        let mut toast = Toast::new("gone");
        toast.duration = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_queue_forwards_messages_in_order() {
        let (tx, rx) = channel();
        let queue = ToastQueue::new(tx);

        queue.notify("first");
        queue.notify("second");

        let messages: Vec<String> = rx.try_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_queue_survives_closed_receiver() {
        let (tx, rx) = channel();
        drop(rx);
        ToastQueue::new(tx).notify("nobody listening");
    }
}
