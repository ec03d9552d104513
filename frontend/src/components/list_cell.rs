//! List Cell
//!
//! One row of the room-creation lists: title on the left, control on the right.

use super::toggle_switch;
use crate::events::RowEvent;
use crate::models::{ControlKind, ListItemData};
use egui::{Align, Color32, CornerRadius, Id, Layout, Rect, RichText, Sense, TextEdit, UiBuilder};

const HORIZONTAL_PADDING: f32 = 16.0;
const TITLE_COLOR: Color32 = Color32::from_rgb(0xD5, 0xE0, 0xF2);
const VALUE_COLOR: Color32 = Color32::from_rgb(0x8F, 0x9A, 0xB2);

/// A rendered row, built from a [`ListItemData`] and owned by the screen
///
/// The cell keeps its own copy of the item so that field edits and switch
/// flips survive between frames without a round-trip through the view-model.
#[derive(Debug, Clone)]
pub struct ListCell {
    item: ListItemData,
    height: f32,
}

impl ListCell {
    pub fn new(item: ListItemData, height: f32) -> Self {
        Self { item, height }
    }

    #[cfg(test)]
    pub fn item(&self) -> &ListItemData {
        &self.item
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.item.label
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Paints the row into `rect` and returns the interaction, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        rect: Rect,
        corners: CornerRadius,
        id: Id,
    ) -> Option<RowEvent> {
        ui.painter().rect_filled(rect, corners, self.item.background());

        let content = rect.shrink2(egui::vec2(HORIZONTAL_PADDING, 0.0));
        let field_width = content.width() * 0.55;
        let label = &self.item.label;
        let control = &mut self.item.control;

        let mut event = ui
            .scope_builder(
                UiBuilder::new()
                    .id_salt(id)
                    .max_rect(content)
                    .layout(Layout::left_to_right(Align::Center)),
                |ui| {
                    ui.label(RichText::new(label.as_str()).size(16.0).color(TITLE_COLOR));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        show_control(ui, control, field_width)
                    })
                    .inner
                },
            )
            .inner;

        // Text rows are tappable as a whole
        if matches!(self.item.control, ControlKind::Text { .. })
            && ui.interact(rect, id, Sense::click()).clicked()
        {
            event = Some(RowEvent::Tapped);
        }

        event
    }
}

fn show_control(ui: &mut egui::Ui, control: &mut ControlKind, field_width: f32) -> Option<RowEvent> {
    match control {
        ControlKind::Text { value, disclosure } => {
            if *disclosure {
                ui.label(RichText::new("›").size(22.0).color(VALUE_COLOR));
            }
            ui.label(RichText::new(value.as_str()).size(15.0).color(VALUE_COLOR));
            None
        }
        ControlKind::Field {
            value,
            placeholder,
            editable,
        } => {
            if !*editable {
                ui.label(RichText::new(value.as_str()).size(15.0).color(VALUE_COLOR));
                return None;
            }

            let response = ui.add(
                TextEdit::singleline(value)
                    .hint_text(placeholder.as_str())
                    .desired_width(field_width),
            );
            response
                .changed()
                .then(|| RowEvent::FieldChanged(value.clone()))
        }
        ControlKind::Switch { on } => toggle_switch(ui, on)
            .changed()
            .then(|| RowEvent::SwitchToggled(*on)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_keeps_item_and_height() {
        let cell = ListCell::new(ListItemData::text("Room ID", "482913"), 52.0);
        assert_eq!(cell.label(), "Room ID");
        assert_eq!(cell.height(), 52.0);
        assert_eq!(cell.item().control, ControlKind::Text {
            value: "482913".to_string(),
            disclosure: false,
        });
    }
}
