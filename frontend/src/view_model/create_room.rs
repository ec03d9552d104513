//! Room Creation View-Model
//!
//! Owns the form state behind the room-creation screen: room id, display
//! name, speaker mode and the three media switches.

use super::CreateRoomModel;
use crate::events::{RowEvent, RowSection};
use crate::models::{ControlKind, EnterRoomRequest, ListItemData, SpeakerMode};
use crate::pages::create_room::{CreateRoomResponder, ResponderHandle};
use logging::Logger;
use rand::Rng;

// Input rows
const ROOM_TYPE_ROW: usize = 0;
const ROOM_ID_ROW: usize = 1;
const USER_NAME_ROW: usize = 2;

// Switch rows
const MICROPHONE_ROW: usize = 0;
const SPEAKER_ROW: usize = 1;
const CAMERA_ROW: usize = 2;

const ROOM_TYPE_LABEL: &str = "Room Type";
const EMPTY_NAME_MESSAGE: &str = "Please enter your name";

/// Six-digit numeric room ids
fn generate_room_id() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000u32).to_string()
}

pub struct RoomCreationViewModel {
    logger: Logger,
    room_id: String,
    user_name: String,
    speaker_mode: SpeakerMode,
    microphone_on: bool,
    speaker_on: bool,
    camera_on: bool,
    input_items: Vec<ListItemData>,
    switch_items: Vec<ListItemData>,
    responder: Option<ResponderHandle>,
    pending_request: Option<EnterRoomRequest>,
    entering: bool,
}

impl RoomCreationViewModel {
    /// Creates the form with a freshly generated room id
    pub fn new(user_name: impl Into<String>, logger: Logger) -> Self {
        Self::with_room_id(generate_room_id(), user_name, logger)
    }

    pub fn with_room_id(
        room_id: impl Into<String>,
        user_name: impl Into<String>,
        logger: Logger,
    ) -> Self {
        let room_id = room_id.into();
        let user_name = user_name.into();
        let speaker_mode = SpeakerMode::default();
        let (microphone_on, speaker_on, camera_on) = (true, true, false);

        let input_items = vec![
            Self::room_type_item(speaker_mode),
            ListItemData::field("Room ID", room_id.clone(), "").read_only(),
            ListItemData::field("Your Name", user_name.clone(), "Enter your name"),
        ];
        let switch_items = vec![
            ListItemData::switch("Turn on microphone", microphone_on),
            ListItemData::switch("Turn on speaker", speaker_on),
            ListItemData::switch("Turn on video", camera_on),
        ];

        logger.info(&format!("[VIEW_MODEL] New room form, room id {}", room_id));

        Self {
            logger,
            room_id,
            user_name,
            speaker_mode,
            microphone_on,
            speaker_on,
            camera_on,
            input_items,
            switch_items,
            responder: None,
            pending_request: None,
            entering: false,
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Hands over the request queued by the last valid submit, once
    pub fn take_enter_request(&mut self) -> Option<EnterRoomRequest> {
        self.pending_request.take()
    }

    /// Called by the host once the room has been entered
    pub fn room_entered(&mut self, request: &EnterRoomRequest) {
        self.entering = false;
        self.logger
            .info(&format!("[VIEW_MODEL] Entered room {}", request.room_id));

        let message = format!("Entered room {}", request.room_id);
        if let Some(responder) = self.responder.as_mut() {
            responder.set_loading(false);
            responder.notify_user(&message);
        }
    }

    fn room_type_item(mode: SpeakerMode) -> ListItemData {
        ListItemData::text(ROOM_TYPE_LABEL, mode.title()).with_disclosure()
    }

    fn set_switch(&mut self, index: usize, on: bool) {
        let flag = match index {
            MICROPHONE_ROW => &mut self.microphone_on,
            SPEAKER_ROW => &mut self.speaker_on,
            CAMERA_ROW => &mut self.camera_on,
            _ => {
                self.logger
                    .warn(&format!("[VIEW_MODEL] No switch at row {}", index));
                return;
            }
        };
        *flag = on;

        if let Some(ListItemData {
            control: ControlKind::Switch { on: item_on },
            ..
        }) = self.switch_items.get_mut(index)
        {
            *item_on = on;
        }
    }

    fn set_user_name(&mut self, name: String) {
        if let Some(ListItemData {
            control: ControlKind::Field { value, .. },
            ..
        }) = self.input_items.get_mut(USER_NAME_ROW)
        {
            value.clone_from(&name);
        }
        self.user_name = name;
    }
}

impl CreateRoomModel for RoomCreationViewModel {
    fn input_items(&self) -> &[ListItemData] {
        &self.input_items
    }

    fn switch_items(&self) -> &[ListItemData] {
        &self.switch_items
    }

    fn speaker_mode(&self) -> SpeakerMode {
        self.speaker_mode
    }

    fn bind_responder(&mut self, responder: ResponderHandle) {
        self.logger.debug("[VIEW_MODEL] Responder bound");
        self.responder = Some(responder);
    }

    fn enter_button_click(&mut self, target: &mut dyn CreateRoomResponder) {
        if self.entering {
            self.logger
                .debug("[VIEW_MODEL] Enter ignored, already entering");
            return;
        }

        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            target.notify_user(EMPTY_NAME_MESSAGE);
            return;
        }

        let request = EnterRoomRequest {
            room_id: self.room_id.clone(),
            user_name: user_name.to_string(),
            speaker_mode: self.speaker_mode,
            microphone_on: self.microphone_on,
            speaker_on: self.speaker_on,
            camera_on: self.camera_on,
        };

        self.logger.info(&format!(
            "[VIEW_MODEL] Creating room {} as '{}' ({:?})",
            request.room_id, request.user_name, request.speaker_mode
        ));

        target.set_loading(true);
        self.entering = true;
        self.pending_request = Some(request);
    }

    fn handle_row_event(&mut self, section: RowSection, index: usize, event: RowEvent) {
        match (section, index, event) {
            (RowSection::Input, ROOM_TYPE_ROW, RowEvent::Tapped) => {
                if let Some(responder) = self.responder.as_mut() {
                    responder.show_speaker_mode_overlay();
                }
            }
            (RowSection::Input, USER_NAME_ROW, RowEvent::FieldChanged(name)) => {
                self.set_user_name(name);
            }
            (RowSection::Switch, index, RowEvent::SwitchToggled(on)) => {
                self.set_switch(index, on);
            }
            (section, index, event) => {
                self.logger.debug(&format!(
                    "[VIEW_MODEL] Unhandled {:?} on {:?} row {}",
                    event, section, index
                ));
            }
        }
    }

    fn change_speaker_mode(&mut self, mode: SpeakerMode) {
        self.speaker_mode = mode;
        let item = Self::room_type_item(mode);
        if let Some(slot) = self.input_items.get_mut(ROOM_TYPE_ROW) {
            *slot = item.clone();
        }

        if let Some(responder) = self.responder.as_mut() {
            responder.update_row(item, ROOM_TYPE_ROW);
        }
    }
}
