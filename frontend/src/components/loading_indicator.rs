//! Loading Indicator
//!
//! Spinner started and stopped by the view-model while a room is being entered.

use egui::{Color32, Rect};

/// Activity indicator that is only drawn while animating
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    animating: bool,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_animating(&mut self) {
        self.animating = true;
    }

    pub fn stop_animating(&mut self) {
        self.animating = false;
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Draws the spinner centered in `rect` when animating
    pub fn show(&self, ui: &mut egui::Ui, rect: Rect) {
        if !self.animating {
            return;
        }

        let spinner = egui::Spinner::new()
            .size(rect.width().min(rect.height()))
            .color(Color32::from_gray(160));
        ui.put(rect, spinner);
    }
}
