//! View-Model layer
//!
//! The screen only sees [`CreateRoomModel`]. [`RoomCreationViewModel`] is the
//! local implementation the application runs with.

mod create_room;

pub use create_room::RoomCreationViewModel;

use crate::events::{RowEvent, RowSection};
use crate::models::{ListItemData, SpeakerMode};
use crate::pages::create_room::{CreateRoomResponder, ResponderHandle};

/// What the room-creation screen consumes from its view-model
pub trait CreateRoomModel {
    /// Rows of the upper list, top to bottom
    fn input_items(&self) -> &[ListItemData];

    /// Rows of the lower list, top to bottom
    fn switch_items(&self) -> &[ListItemData];

    fn speaker_mode(&self) -> SpeakerMode;

    /// Registration slot; the screen calls this once when it attaches
    fn bind_responder(&mut self, responder: ResponderHandle);

    /// Submit handler. `target` is the screen that raised the action.
    fn enter_button_click(&mut self, target: &mut dyn CreateRoomResponder);

    fn handle_row_event(&mut self, section: RowSection, index: usize, event: RowEvent);

    fn change_speaker_mode(&mut self, mode: SpeakerMode);
}
