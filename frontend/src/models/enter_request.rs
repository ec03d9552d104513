//! Enter-Room Request
//!
//! Emitted by the view-model when the user submits a valid form.

use super::SpeakerMode;

/// Everything needed to create and join a room
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnterRoomRequest {
    pub room_id: String,
    pub user_name: String,
    pub speaker_mode: SpeakerMode,
    pub microphone_on: bool,
    pub speaker_on: bool,
    pub camera_on: bool,
}
