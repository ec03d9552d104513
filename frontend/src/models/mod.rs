//! Data models for the room-creation screen
//!
//! Plain data passed between the view-model and the screen.

mod enter_request;
mod list_item;
mod speaker_mode;

pub use enter_request::EnterRoomRequest;
pub use list_item::{ControlKind, ListItemData};
pub use speaker_mode::SpeakerMode;
