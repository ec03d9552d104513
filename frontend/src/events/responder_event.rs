use crate::models::ListItemData;

/// Responder calls queued by the view-model (ViewModel -> View)
/// Applied to the screen on the UI thread at the next frame boundary.
#[derive(Debug, Clone)]
pub enum ResponderEvent {
    UpdateRow { item: ListItemData, index: usize },
    ShowSpeakerModeOverlay,
    NotifyUser(String),
    SetLoading(bool),
}
