//! Reusable UI components
//!
//! Widgets shared by the room-creation screen and the host application.

mod button;
mod list_cell;
mod loading_indicator;
mod speaker_mode_panel;
mod toast;
mod toggle_switch;

pub use button::{Button, ButtonVariant};
pub use list_cell::ListCell;
pub use loading_indicator::LoadingIndicator;
pub use speaker_mode_panel::{PanelAction, SpeakerModePanel};
pub use toast::{NotificationSink, Toast, ToastQueue};
pub use toggle_switch::toggle_switch;
