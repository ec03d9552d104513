//! Room-Creation Screen
//!
//! Lays out the input list, the switch list, the "Create Room" button, the
//! loading spinner and the speaker-mode overlay, and forwards interaction to
//! a [`CreateRoomModel`].
//!
//! # Lifecycle
//!
//! ```text
//! new(view_model) --> Unattached --on_first_attach--> Ready
//! ```
//!
//! The first attach builds the rows from the view-model and registers a
//! [`ResponderHandle`] with it. Later attaches are ignored. After that,
//! every frame:
//! 1. applies responder calls queued by the view-model
//! 2. dismisses the overlay on a press outside it
//! 3. paints containers, rows, button, spinner and overlay
//! 4. forwards row events, submit and overlay choices to the view-model

mod layout;
mod responder;
mod rows;

pub use layout::{
    CONTAINER_CORNER_RADIUS, REPLACEMENT_ROW_HEIGHT, ROW_HEIGHT, SafeAreaInsets, Scale,
    ScreenLayout,
};
pub use responder::{CreateRoomResponder, ResponderHandle};
pub use rows::RowStack;

use crate::components::{
    Button, LoadingIndicator, NotificationSink, PanelAction, SpeakerModePanel,
};
use crate::events::{ResponderEvent, RowEvent, RowSection};
use crate::models::{ListItemData, SpeakerMode};
use crate::view_model::CreateRoomModel;
use egui::{Color32, CornerRadius, Id, Rect};
use logging::Logger;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, channel};

/// Window background (#17181F)
pub const SCREEN_BACKGROUND: Color32 = Color32::from_rgb(0x17, 0x18, 0x1F);
/// Fill of the two list containers behind their rows
const CONTAINER_FILL: Color32 = Color32::from_rgb(0x2A, 0x2D, 0x38);
const CREATE_ROOM_TEXT: &str = "Create Room";

/// One-way lifecycle of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Unattached,
    Ready,
}

/// The room-creation screen
///
/// There is deliberately no `Default`: a screen without a view-model has
/// nothing to show.
pub struct CreateRoomScreen {
    view_model: Rc<RefCell<dyn CreateRoomModel>>,
    notifier: Box<dyn NotificationSink>,
    logger: Logger,
    phase: ScreenPhase,
    scale: Scale,
    insets: SafeAreaInsets,
    input_rows: RowStack,
    switch_rows: RowStack,
    loading: LoadingIndicator,
    speaker_mode_panel: Option<SpeakerModePanel>,
    responder_events: Option<Receiver<ResponderEvent>>,
}

impl CreateRoomScreen {
    /// Binds the screen to its view-model. Nothing is built until the first attach.
    pub fn new(
        view_model: Rc<RefCell<dyn CreateRoomModel>>,
        notifier: Box<dyn NotificationSink>,
        logger: Logger,
    ) -> Self {
        Self {
            view_model,
            notifier,
            logger,
            phase: ScreenPhase::Unattached,
            scale: Scale::default(),
            insets: SafeAreaInsets::default(),
            input_rows: RowStack::new(),
            switch_rows: RowStack::new(),
            loading: LoadingIndicator::new(),
            speaker_mode_panel: None,
            responder_events: None,
        }
    }

    pub fn with_safe_area(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    #[cfg(test)]
    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn input_rows(&self) -> &RowStack {
        &self.input_rows
    }

    #[cfg(test)]
    pub fn switch_rows(&self) -> &RowStack {
        &self.switch_rows
    }

    #[cfg(test)]
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    #[cfg(test)]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn is_speaker_mode_overlay_visible(&self) -> bool {
        self.speaker_mode_panel
            .as_ref()
            .is_some_and(SpeakerModePanel::is_visible)
    }

    /// One-time setup. `viewport_width` fixes the scale for all scaled sizes.
    pub fn on_first_attach(&mut self, viewport_width: f32) {
        if self.phase == ScreenPhase::Ready {
            return;
        }

        self.scale = Scale::for_width(viewport_width);
        self.build_rows();
        self.bind_interaction();
        self.phase = ScreenPhase::Ready;

        self.logger.info(&format!(
            "[CREATE_ROOM] Attached: {} input rows, {} switch rows",
            self.input_rows.len(),
            self.switch_rows.len()
        ));
    }

    fn build_rows(&mut self) {
        let view_model = Rc::clone(&self.view_model);
        let Ok(model) = view_model.try_borrow() else {
            self.logger
                .warn("[CREATE_ROOM] View-model busy, rows not built");
            return;
        };

        let height = self.scale.apply(ROW_HEIGHT);
        for item in model.input_items() {
            self.input_rows.push(item.clone(), height);
        }
        for item in model.switch_items() {
            self.switch_rows.push(item.clone(), height);
        }

        let mode = model.speaker_mode();
        self.speaker_mode_panel
            .get_or_insert_with(|| SpeakerModePanel::new(mode));
    }

    fn bind_interaction(&mut self) {
        let (sender, receiver) = channel();
        self.responder_events = Some(receiver);

        match self.view_model.try_borrow_mut() {
            Ok(mut model) => model.bind_responder(ResponderHandle::new(sender)),
            Err(_) => self
                .logger
                .warn("[CREATE_ROOM] View-model busy, responder not bound"),
        }
    }

    /// Frame geometry for `viewport` given the current rows
    pub fn layout(&self, viewport: Rect) -> ScreenLayout {
        ScreenLayout::compute(
            viewport,
            self.insets,
            self.scale,
            self.input_rows.total_height(),
            self.switch_rows.total_height(),
        )
    }

    /// Repaint hook: rounds the two list containers at their current bounds
    pub fn render(&self, painter: &egui::Painter, layout: &ScreenLayout) {
        let corners = CornerRadius::same(CONTAINER_CORNER_RADIUS);
        for (stack, bounds) in [
            (&self.input_rows, layout.input_stack),
            (&self.switch_rows, layout.switch_stack),
        ] {
            if !stack.is_empty() {
                painter.rect_filled(bounds, corners, CONTAINER_FILL);
            }
        }
    }

    /// A press landed outside the overlay's controls
    pub fn on_background_tap(&mut self) {
        if let Some(panel) = self.speaker_mode_panel.as_mut() {
            panel.hide();
        }
    }

    /// Forwards the "Create Room" press to the view-model
    pub fn on_submit(&mut self) {
        self.logger.debug("[CREATE_ROOM] Create Room pressed");

        let view_model = Rc::clone(&self.view_model);
        let Ok(mut model) = view_model.try_borrow_mut() else {
            self.logger
                .warn("[CREATE_ROOM] View-model busy, submit dropped");
            return;
        };
        model.enter_button_click(self);
    }

    /// Applies every responder call the view-model has queued
    pub fn pump_responder_events(&mut self) {
        let Some(receiver) = self.responder_events.as_ref() else {
            return;
        };
        let events: Vec<ResponderEvent> = receiver.try_iter().collect();

        for event in events {
            match event {
                ResponderEvent::UpdateRow { item, index } => self.update_row(item, index),
                ResponderEvent::ShowSpeakerModeOverlay => self.show_speaker_mode_overlay(),
                ResponderEvent::NotifyUser(message) => self.notify_user(&message),
                ResponderEvent::SetLoading(active) => self.set_loading(active),
            }
        }
    }

    /// Renders the whole screen into `ui`, which should span the window
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let viewport = ui.max_rect();
        self.on_first_attach(viewport.width());
        self.pump_responder_events();

        let layout = self.layout(viewport);

        if self.is_speaker_mode_overlay_visible() && pressed_outside(ui, layout.overlay) {
            self.on_background_tap();
        }

        ui.painter().rect_filled(viewport, 0.0, SCREEN_BACKGROUND);
        self.render(ui.painter(), &layout);

        let input_events =
            self.input_rows
                .show(ui, layout.input_stack, Id::new("create_room_input_rows"));
        let switch_events =
            self.switch_rows
                .show(ui, layout.switch_stack, Id::new("create_room_switch_rows"));
        self.forward_row_events(RowSection::Input, input_events);
        self.forward_row_events(RowSection::Switch, switch_events);

        if Button::submit(CREATE_ROOM_TEXT)
            .show_in(ui, layout.enter_button)
            .clicked()
        {
            self.on_submit();
        }

        self.loading.show(ui, layout.loading);

        let action = self
            .speaker_mode_panel
            .as_mut()
            .and_then(|panel| panel.show(ui.ctx(), layout.overlay));
        if let Some(action) = action {
            self.on_panel_action(action);
        }

        // Pick up anything the forwarded events triggered
        self.pump_responder_events();
    }

    fn forward_row_events(&mut self, section: RowSection, events: Vec<(usize, RowEvent)>) {
        if events.is_empty() {
            return;
        }

        let Ok(mut model) = self.view_model.try_borrow_mut() else {
            self.logger
                .warn("[CREATE_ROOM] View-model busy, row events dropped");
            return;
        };
        for (index, event) in events {
            model.handle_row_event(section, index, event);
        }
    }

    fn on_panel_action(&mut self, action: PanelAction) {
        let Some(mode) = self
            .speaker_mode_panel
            .as_mut()
            .and_then(|panel| panel.resolve(action))
        else {
            return;
        };

        self.logger
            .info(&format!("[CREATE_ROOM] Speaker mode chosen: {:?}", mode));
        match self.view_model.try_borrow_mut() {
            Ok(mut model) => model.change_speaker_mode(mode),
            Err(_) => self
                .logger
                .warn("[CREATE_ROOM] View-model busy, speaker mode dropped"),
        }
    }

    /// Speaker mode of the view-model, `None` while it is mid-call
    fn current_speaker_mode(&self) -> Option<SpeakerMode> {
        self.view_model
            .try_borrow()
            .ok()
            .map(|model| model.speaker_mode())
    }

    /// The overlay, built on first access if attach has not built it yet
    fn speaker_mode_overlay(&mut self) -> &mut SpeakerModePanel {
        let current = self.current_speaker_mode().unwrap_or_default();
        self.speaker_mode_panel
            .get_or_insert_with(|| SpeakerModePanel::new(current))
    }
}

impl CreateRoomResponder for CreateRoomScreen {
    fn update_row(&mut self, item: ListItemData, index: usize) {
        let height = self.scale.apply(REPLACEMENT_ROW_HEIGHT);
        let label = item.label.clone();

        if self.input_rows.replace(index, item, height) {
            self.logger
                .debug(&format!("[CREATE_ROOM] Row {} replaced with '{}'", index, label));
        } else {
            self.logger.debug(&format!(
                "[CREATE_ROOM] Row update ignored, index {} of {}",
                index,
                self.input_rows.len()
            ));
        }
    }

    fn show_speaker_mode_overlay(&mut self) {
        let current = self.current_speaker_mode();
        let panel = self.speaker_mode_overlay();
        // Keep the last selection when called back from inside the view-model
        if let Some(mode) = current {
            panel.select(mode);
        }
        panel.show_panel();
    }

    fn notify_user(&mut self, message: &str) {
        self.notifier.notify(message);
    }

    fn set_loading(&mut self, active: bool) {
        if active {
            self.loading.start_animating();
        } else {
            self.loading.stop_animating();
        }
    }
}

impl Drop for CreateRoomScreen {
    fn drop(&mut self) {
        self.logger.debug("[CREATE_ROOM] deinit CreateRoomScreen");
    }
}

fn pressed_outside(ui: &egui::Ui, area: Rect) -> bool {
    ui.input(|input| {
        input.pointer.any_pressed()
            && input
                .pointer
                .interact_pos()
                .is_some_and(|pos| !area.contains(pos))
    })
}
