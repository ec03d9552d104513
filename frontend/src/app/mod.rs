//! Application Module
//!
//! Hosts the room-creation screen in an eframe window.
//!
//! # Structure
//!
//! - `state.rs`: application state, startup and the frame loop
//! - `room_handlers.rs`: what happens to an accepted "enter room" request
//!
//! # Communication Flow
//!
//! ```text
//! CreateRoomScreen --row events / submit--> RoomCreationViewModel
//! RoomCreationViewModel --ResponderHandle--> CreateRoomScreen
//! RoomCreationViewModel --EnterRoomRequest--> App (room_handlers)
//! CreateRoomScreen --ToastQueue--> App (toast rendering)
//! ```

mod room_handlers;
mod state;

pub use state::App;
