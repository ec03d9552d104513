//! Button Component
//!
//! Styled buttons used by the screen and its overlay.

use egui::{Color32, FontId, Rect, RichText, Vec2};

/// Button variant styles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Brand blue (#0062E3)
    Primary,
    /// Muted slate used for secondary actions like Cancel
    Secondary,
}

impl ButtonVariant {
    /// Returns the fill color for this button variant
    fn color(&self) -> Color32 {
        match self {
            ButtonVariant::Primary => Color32::from_rgb(0x00, 0x62, 0xE3),
            ButtonVariant::Secondary => Color32::from_rgb(0x4F, 0x58, 0x6B),
        }
    }
}

/// A styled button component with configurable appearance
pub struct Button {
    text: String,
    text_size: f32,
    strong: bool,
    corner_radius: f32,
    min_size: Option<Vec2>,
    variant: ButtonVariant,
}

impl Button {
    /// Creates a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            text_size: 16.0,
            strong: false,
            corner_radius: 8.0,
            min_size: None,
            variant: ButtonVariant::Primary,
        }
    }

    /// Pill-shaped primary button with bold 19pt text, used for "Create Room"
    pub fn submit(label: impl Into<String>) -> Self {
        Self::new(label)
            .text_size(19.0)
            .strong()
            .corner_radius(25.0)
    }

    /// Sets the minimum size of the button
    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Sets the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the text size
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    fn widget(&self, min_size: Option<Vec2>) -> impl egui::Widget + use<> {
        let mut text = RichText::new(self.text.clone())
            .font(FontId::proportional(self.text_size))
            .color(Color32::WHITE);
        if self.strong {
            text = text.strong();
        }

        let mut button = egui::Button::new(text)
            .fill(self.variant.color())
            .corner_radius(self.corner_radius);

        if let Some(size) = min_size.or(self.min_size) {
            button = button.min_size(size);
        }
        button
    }

    /// Renders the button in the current layout and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        ui.add(self.widget(None))
    }

    /// Renders the button filling `rect` exactly
    pub fn show_in(self, ui: &mut egui::Ui, rect: Rect) -> egui::Response {
        ui.put(rect, self.widget(Some(rect.size())))
    }
}
