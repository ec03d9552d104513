//! Room Entry Handlers
//!
//! There is no signaling server behind this screen. An accepted request is
//! acknowledged after a short delay so the loading indicator runs through a
//! full start/stop cycle.

use super::state::App;
use crate::models::EnterRoomRequest;
use std::time::{Duration, Instant};

/// How long an accepted request spends "entering"
pub(super) const ENTER_DELAY: Duration = Duration::from_millis(600);

/// A request waiting for its acknowledgement
pub(super) struct PendingEntry {
    pub request: EnterRoomRequest,
    pub started_at: Instant,
}

impl PendingEntry {
    pub fn new(request: EnterRoomRequest) -> Self {
        Self {
            request,
            started_at: Instant::now(),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= ENTER_DELAY
    }
}

impl App {
    /// Picks up a newly submitted request and completes a due one
    pub(super) fn advance_room_entry(&mut self) {
        if let Some(request) = self.view_model.borrow_mut().take_enter_request() {
            self.logger.info(&format!(
                "[ROOM] Entering room {} as '{}' (mic: {}, speaker: {}, camera: {})",
                request.room_id,
                request.user_name,
                request.microphone_on,
                request.speaker_on,
                request.camera_on
            ));
            self.pending_entry = Some(PendingEntry::new(request));
        }

        let due = self
            .pending_entry
            .as_ref()
            .is_some_and(|entry| entry.is_due(Instant::now()));
        if !due {
            return;
        }

        if let Some(entry) = self.pending_entry.take() {
            self.view_model.borrow_mut().room_entered(&entry.request);
            self.logger
                .info(&format!("[ROOM] Room {} ready", entry.request.room_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeakerMode;

    fn request() -> EnterRoomRequest {
        EnterRoomRequest {
            room_id: "123456".to_string(),
            user_name: "alice".to_string(),
            speaker_mode: SpeakerMode::FreeSpeech,
            microphone_on: true,
            speaker_on: true,
            camera_on: false,
        }
    }

    #[test]
    fn test_entry_becomes_due_after_delay() {
        let entry = PendingEntry::new(request());

        assert!(!entry.is_due(entry.started_at));
        assert!(!entry.is_due(entry.started_at + ENTER_DELAY / 2));
        assert!(entry.is_due(entry.started_at + ENTER_DELAY));
    }
}
