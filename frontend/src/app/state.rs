//! Application State
//!
//! This module defines the application state and the eframe frame loop.
//!
//! # Frame Loop
//!
//! `eframe::App::update()` runs, in order:
//! 1. Drain toasts raised through the screen's notification sink
//! 2. Advance any room entry the view-model requested
//! 3. Render the room-creation screen
//! 4. Render the current toast on top

use super::room_handlers::PendingEntry;
use crate::components::{Toast, ToastQueue};
use crate::config::AppConfig;
use crate::pages::CreateRoomScreen;
use crate::view_model::RoomCreationViewModel;
use logging::Logger;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

/// Main application state
pub struct App {
    // Logger
    pub(super) logger: Logger,

    // Screen and its view-model
    pub(super) view_model: Rc<RefCell<RoomCreationViewModel>>,
    screen: CreateRoomScreen,

    // Notifications
    toast_rx: Receiver<Toast>,
    current_toast: Option<Toast>,

    // Room entry in progress
    pub(super) pending_entry: Option<PendingEntry>,
}

impl App {
    /// Create a new App from configuration and an initialized logger
    pub fn new(config: &AppConfig, logger: Logger) -> Self {
        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - log_level: {:?}, safe_area: {:?}",
            config.log_level, config.safe_area
        ));

        let view_model = Rc::new(RefCell::new(RoomCreationViewModel::new(
            config.user_name.clone(),
            logger.for_component("ViewModel"),
        )));

        let (toast_tx, toast_rx) = channel();
        let screen = CreateRoomScreen::new(
            view_model.clone(),
            Box::new(ToastQueue::new(toast_tx)),
            logger.for_component("Screen"),
        )
        .with_safe_area(config.safe_area);

        logger.info("[APP] Application initialized successfully");

        Self {
            logger,
            view_model,
            screen,
            toast_rx,
            current_toast: None,
            pending_entry: None,
        }
    }

    /// Keeps only the most recent toast
    fn collect_toasts(&mut self) {
        if let Some(toast) = self.toast_rx.try_iter().last() {
            self.current_toast = Some(toast);
        }
    }

    /// Renders a toast notification if one exists
    fn render_toast(&mut self, ctx: &egui::Context) {
        // show() returns true if the user tapped it OR it expired
        if let Some(toast) = &self.current_toast
            && toast.show(ctx)
        {
            self.current_toast = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Toasts raised since the last frame
        self.collect_toasts();

        // 2. Room entry bookkeeping
        self.advance_room_entry();
        if self.pending_entry.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // 3. The screen itself
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| self.screen.show(ui));

        // Toasts raised while rendering appear this frame
        self.collect_toasts();

        // 4. Toast overlay
        self.render_toast(ctx);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        if let Some(entry) = &self.pending_entry {
            self.logger.info(&format!(
                "[APP] Abandoning entry into room {}",
                entry.request.room_id
            ));
        }

        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}
