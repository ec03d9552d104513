//! Screen Layout
//!
//! Frame geometry for the room-creation screen, computed from the viewport.
//! Sizes marked "scaled" are authored against a 375pt-wide design and
//! multiplied by [`Scale`].

use egui::{CornerRadius, Rect, pos2, vec2};

/// Width of the reference design all scaled values are authored against
pub const DESIGN_WIDTH: f32 = 375.0;
/// Row height used when the lists are first built (scaled)
pub const ROW_HEIGHT: f32 = 52.0;
/// Row height used when the view-model replaces a row (scaled)
pub const REPLACEMENT_ROW_HEIGHT: f32 = 40.0;
/// Corner radius of the two list containers
pub const CONTAINER_CORNER_RADIUS: u8 = 12;

const STACK_TOP_MARGIN: f32 = 20.0;
const STACK_SIDE_INSET: f32 = 20.0;
const STACK_SPACING: f32 = 12.0;
const BUTTON_BOTTOM_OFFSET: f32 = 40.0;
const BUTTON_WIDTH_RATIO: f32 = 0.4;
const BUTTON_HEIGHT: f32 = 50.0;
const LOADING_SIZE: f32 = 40.0;
const OVERLAY_HEIGHT: f32 = 221.0; // scaled

/// Areas of the window covered by system UI
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

/// Ratio between the actual viewport width and [`DESIGN_WIDTH`]
///
/// Fixed at the first attach; later resizes move elements but keep this scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// A non-positive width falls back to 1:1
    pub fn for_width(width: f32) -> Self {
        if width > 0.0 {
            Self(width / DESIGN_WIDTH)
        } else {
            Self(1.0)
        }
    }

    pub fn apply(self, value: f32) -> f32 {
        value * self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Absolute rectangles of every element on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub input_stack: Rect,
    pub switch_stack: Rect,
    pub enter_button: Rect,
    pub loading: Rect,
    pub overlay: Rect,
}

impl ScreenLayout {
    /// Stacks are sized to their content: pass the summed row heights.
    pub fn compute(
        viewport: Rect,
        insets: SafeAreaInsets,
        scale: Scale,
        input_height: f32,
        switch_height: f32,
    ) -> Self {
        let stack_left = viewport.left() + STACK_SIDE_INSET;
        let stack_width = (viewport.width() - 2.0 * STACK_SIDE_INSET).max(0.0);

        let input_stack = Rect::from_min_size(
            pos2(stack_left, viewport.top() + insets.top + STACK_TOP_MARGIN),
            vec2(stack_width, input_height),
        );

        let switch_stack = Rect::from_min_size(
            pos2(stack_left, input_stack.bottom() + STACK_SPACING),
            vec2(stack_width, switch_height),
        );

        let button_width = viewport.width() * BUTTON_WIDTH_RATIO;
        let button_bottom = viewport.bottom() - BUTTON_BOTTOM_OFFSET - insets.bottom;
        let enter_button = Rect::from_min_size(
            pos2(
                viewport.center().x - button_width / 2.0,
                button_bottom - BUTTON_HEIGHT,
            ),
            vec2(button_width, BUTTON_HEIGHT),
        );

        let loading = Rect::from_center_size(viewport.center(), vec2(LOADING_SIZE, LOADING_SIZE));

        let overlay_height = scale.apply(OVERLAY_HEIGHT);
        let overlay = Rect::from_min_size(
            pos2(viewport.left(), viewport.bottom() - overlay_height),
            vec2(viewport.width(), overlay_height),
        );

        Self {
            input_stack,
            switch_stack,
            enter_button,
            loading,
            overlay,
        }
    }
}

/// Corner mask for row `index` of `count`, so the stack reads as one rounded card
pub fn row_corners(index: usize, count: usize) -> CornerRadius {
    let r = CONTAINER_CORNER_RADIUS;
    let first = index == 0;
    let last = index + 1 == count;
    CornerRadius {
        nw: if first { r } else { 0 },
        ne: if first { r } else { 0 },
        sw: if last { r } else { 0 },
        se: if last { r } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(375.0, 812.0))
    }

    #[test]
    fn test_scale_tracks_width() {
        assert_eq!(Scale::for_width(375.0).apply(52.0), 52.0);
        assert_eq!(Scale::for_width(750.0).apply(40.0), 80.0);
        assert_eq!(Scale::for_width(0.0).apply(221.0), 221.0);
    }

    #[test]
    fn test_stacks_are_inset_and_ordered() {
        let insets = SafeAreaInsets {
            top: 44.0,
            bottom: 34.0,
        };
        let layout = ScreenLayout::compute(phone(), insets, Scale::default(), 156.0, 104.0);

        assert_eq!(layout.input_stack.min, pos2(20.0, 64.0));
        assert_eq!(layout.input_stack.width(), 335.0);
        assert_eq!(layout.input_stack.height(), 156.0);

        assert_eq!(layout.switch_stack.top(), layout.input_stack.bottom() + 12.0);
        assert_eq!(layout.switch_stack.left(), 20.0);
        assert_eq!(layout.switch_stack.height(), 104.0);
    }

    #[test]
    fn test_enter_button_sits_above_safe_area() {
        let insets = SafeAreaInsets {
            top: 0.0,
            bottom: 34.0,
        };
        let layout = ScreenLayout::compute(phone(), insets, Scale::default(), 0.0, 0.0);

        assert_eq!(layout.enter_button.bottom(), 812.0 - 40.0 - 34.0);
        assert_eq!(layout.enter_button.height(), 50.0);
        assert_eq!(layout.enter_button.width(), 150.0);
        assert_eq!(layout.enter_button.center().x, 187.5);
    }

    #[test]
    fn test_loading_and_overlay() {
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(750.0, 1000.0));
        let layout = ScreenLayout::compute(
            viewport,
            SafeAreaInsets::default(),
            Scale::for_width(750.0),
            0.0,
            0.0,
        );

        assert_eq!(layout.loading.center(), pos2(375.0, 500.0));
        assert_eq!(layout.loading.size(), vec2(40.0, 40.0));

        assert_eq!(layout.overlay.height(), 442.0);
        assert_eq!(layout.overlay.bottom(), 1000.0);
        assert_eq!(layout.overlay.width(), 750.0);
    }

    #[test]
    fn test_row_corners() {
        assert_eq!(row_corners(0, 1), CornerRadius::same(12));

        let top = row_corners(0, 3);
        assert_eq!((top.nw, top.ne, top.sw, top.se), (12, 12, 0, 0));

        assert_eq!(row_corners(1, 3), CornerRadius::ZERO);

        let bottom = row_corners(2, 3);
        assert_eq!((bottom.nw, bottom.ne, bottom.sw, bottom.se), (0, 0, 12, 12));
    }
}
