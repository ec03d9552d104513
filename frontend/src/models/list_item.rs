//! List Item Data
//!
//! Display record for one row of the input or switch list.

use egui::Color32;

/// Background used when an item does not provide its own color (#2A2D38)
pub const DEFAULT_ROW_BACKGROUND: Color32 = Color32::from_rgb(0x2A, 0x2D, 0x38);

/// Control shown on the right-hand side of a row
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    /// Read-only value, optionally followed by a disclosure arrow
    Text { value: String, disclosure: bool },
    /// Single-line text input
    Field {
        value: String,
        placeholder: String,
        editable: bool,
    },
    /// On/off toggle
    Switch { on: bool },
}

/// One row supplied by the view-model
#[derive(Clone, Debug, PartialEq)]
pub struct ListItemData {
    pub label: String,
    pub background_color: Option<Color32>,
    pub control: ControlKind,
}

impl ListItemData {
    /// Row with a read-only value on the right
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background_color: None,
            control: ControlKind::Text {
                value: value.into(),
                disclosure: false,
            },
        }
    }

    /// Row with an editable text field
    pub fn field(
        label: impl Into<String>,
        value: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            background_color: None,
            control: ControlKind::Field {
                value: value.into(),
                placeholder: placeholder.into(),
                editable: true,
            },
        }
    }

    /// Row with a toggle switch
    pub fn switch(label: impl Into<String>, on: bool) -> Self {
        Self {
            label: label.into(),
            background_color: None,
            control: ControlKind::Switch { on },
        }
    }

    /// Shows a disclosure arrow after a text value
    pub fn with_disclosure(mut self) -> Self {
        if let ControlKind::Text { disclosure, .. } = &mut self.control {
            *disclosure = true;
        }
        self
    }

    /// Makes a field row read-only
    pub fn read_only(mut self) -> Self {
        if let ControlKind::Field { editable, .. } = &mut self.control {
            *editable = false;
        }
        self
    }

    /// Background to paint, falling back to [`DEFAULT_ROW_BACKGROUND`]
    pub fn background(&self) -> Color32 {
        self.background_color.unwrap_or(DEFAULT_ROW_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_defaults_to_dark_tone() {
        let item = ListItemData::text("Room ID", "123456");
        assert_eq!(item.background(), Color32::from_rgb(42, 45, 56));
    }

    #[test]
    fn test_explicit_background_wins() {
        let item = ListItemData {
            background_color: Some(Color32::RED),
            ..ListItemData::switch("Turn on video", false)
        };
        assert_eq!(item.background(), Color32::RED);
    }

    #[test]
    fn test_modifiers_only_touch_matching_controls() {
        let text = ListItemData::text("Room Type", "Free Speech Room")
            .with_disclosure()
            .read_only();
        assert_eq!(
            text.control,
            ControlKind::Text {
                value: "Free Speech Room".to_string(),
                disclosure: true,
            }
        );

        let field = ListItemData::field("Your Name", "", "Enter your name")
            .read_only()
            .with_disclosure();
        assert!(matches!(
            field.control,
            ControlKind::Field {
                editable: false,
                ..
            }
        ));
    }
}
