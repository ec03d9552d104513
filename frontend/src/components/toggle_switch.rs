//! Toggle Switch
//!
//! iOS-style on/off switch painted by hand.

use egui::{Color32, Sense, Ui, Vec2};

const TRACK_SIZE: Vec2 = Vec2::new(44.0, 24.0);
const TRACK_ON: Color32 = Color32::from_rgb(0x00, 0x62, 0xE3);
const TRACK_OFF: Color32 = Color32::from_rgb(0x4F, 0x58, 0x6B);

/// Draws the switch and flips `on` when clicked.
/// The returned response reports `changed()` on the frame the value flips.
pub fn toggle_switch(ui: &mut Ui, on: &mut bool) -> egui::Response {
    let (rect, mut response) = ui.allocate_exact_size(TRACK_SIZE, Sense::click());

    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let t = ui.ctx().animate_bool(response.id, *on);
        let radius = rect.height() / 2.0;
        let track = if *on { TRACK_ON } else { TRACK_OFF };

        let painter = ui.painter();
        painter.rect_filled(rect, radius, track);

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), t);
        let knob = egui::pos2(knob_x, rect.center().y);
        painter.circle_filled(knob, radius - 2.0, Color32::WHITE);
    }

    response
}
