//! Speaker Mode Panel
//!
//! Bottom sheet that lets the room owner pick how participants get the floor.

use super::{Button, ButtonVariant};
use crate::models::SpeakerMode;
use egui::{Color32, CornerRadius, Rect, RichText, Sense, UiBuilder, Vec2};

const SHEET_COLOR: Color32 = Color32::from_rgb(0x1F, 0x20, 0x24);
const OPTION_SELECTED: Color32 = Color32::from_rgb(0x00, 0x62, 0xE3);
const OPTION_IDLE: Color32 = Color32::from_rgb(0x2A, 0x2D, 0x38);

/// What the user did inside the panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Cancel,
    Confirm(SpeakerMode),
}

/// Overlay state: visibility plus the option currently highlighted
#[derive(Debug)]
pub struct SpeakerModePanel {
    visible: bool,
    selected: SpeakerMode,
}

impl SpeakerModePanel {
    /// Hidden panel with `current` preselected
    pub fn new(current: SpeakerMode) -> Self {
        Self {
            visible: false,
            selected: current,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show_panel(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[cfg(test)]
    pub fn selected(&self) -> SpeakerMode {
        self.selected
    }

    pub fn select(&mut self, mode: SpeakerMode) {
        self.selected = mode;
    }

    /// Applies a user action. Both actions close the panel.
    pub fn resolve(&mut self, action: PanelAction) -> Option<SpeakerMode> {
        self.hide();
        match action {
            PanelAction::Cancel => None,
            PanelAction::Confirm(mode) => Some(mode),
        }
    }

    /// Draws the sheet into `rect`. Returns an action when Cancel or Confirm is pressed.
    pub fn show(&mut self, ctx: &egui::Context, rect: Rect) -> Option<PanelAction> {
        if !self.visible {
            return None;
        }

        let mut action = None;

        egui::Area::new(egui::Id::new("speaker_mode_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                let (sheet, _) = ui.allocate_exact_size(rect.size(), Sense::click());
                ui.painter().rect_filled(
                    sheet,
                    CornerRadius {
                        nw: 12,
                        ne: 12,
                        sw: 0,
                        se: 0,
                    },
                    SHEET_COLOR,
                );

                ui.scope_builder(UiBuilder::new().max_rect(sheet.shrink(20.0)), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Room Type")
                                .size(17.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                    });
                    ui.add_space(16.0);

                    for mode in SpeakerMode::ALL {
                        self.show_option(ui, mode);
                        ui.add_space(8.0);
                    }

                    ui.add_space(8.0);
                    action = self.show_actions(ui);
                });
            });

        action
    }

    fn show_option(&mut self, ui: &mut egui::Ui, mode: SpeakerMode) {
        let fill = if self.selected == mode {
            OPTION_SELECTED
        } else {
            OPTION_IDLE
        };

        let option = egui::Button::new(
            RichText::new(mode.title())
                .size(15.0)
                .color(Color32::WHITE),
        )
        .fill(fill)
        .corner_radius(8.0)
        .min_size(Vec2::new(ui.available_width(), 40.0));

        if ui.add(option).clicked() {
            self.selected = mode;
        }
    }

    fn show_actions(&self, ui: &mut egui::Ui) -> Option<PanelAction> {
        let mut action = None;
        let width = (ui.available_width() - 12.0) / 2.0;

        ui.horizontal(|ui| {
            if Button::new("Cancel")
                .variant(ButtonVariant::Secondary)
                .min_size(Vec2::new(width, 40.0))
                .show(ui)
                .clicked()
            {
                action = Some(PanelAction::Cancel);
            }

            ui.add_space(12.0);

            if Button::new("Confirm")
                .min_size(Vec2::new(width, 40.0))
                .show(ui)
                .clicked()
            {
                action = Some(PanelAction::Confirm(self.selected));
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_with_current_mode() {
        let panel = SpeakerModePanel::new(SpeakerMode::ApplyToSpeak);
        assert!(!panel.is_visible());
        assert_eq!(panel.selected(), SpeakerMode::ApplyToSpeak);
    }

    #[test]
    fn test_confirm_hides_and_returns_choice() {
        let mut panel = SpeakerModePanel::new(SpeakerMode::FreeSpeech);
        panel.show_panel();
        panel.select(SpeakerMode::ApplyToSpeak);

        let chosen = panel.resolve(PanelAction::Confirm(panel.selected()));
        assert_eq!(chosen, Some(SpeakerMode::ApplyToSpeak));
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_cancel_hides_without_choice() {
        let mut panel = SpeakerModePanel::new(SpeakerMode::FreeSpeech);
        panel.show_panel();

        assert_eq!(panel.resolve(PanelAction::Cancel), None);
        assert!(!panel.is_visible());
    }
}
