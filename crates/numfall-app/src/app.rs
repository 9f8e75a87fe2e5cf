//! Numfall desktop application UI.
//!
//! # Design Notes
//! - One screen: dimension dropdown, show/hide button, status line, grid.
//! - All mutation flows through the action queue and the handler; widgets
//!   only read view models and request actions.
//! - Timing lives in the flow executor, which is polled once per frame
//!   with the wall clock and tells the app when to repaint next.

use std::time::Instant;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::ActionRequestQueue,
    handler,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct NumfallApp {
    app_state: AppState,
    ui_state: UiState,
}

impl NumfallApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(),
            ui_state: UiState::new(),
        }
    }
}

impl App for NumfallApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.flow.poll(now, &mut action_queue);
        handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let home_vm = view_model_builder::build_home_screen_view_model(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::home_screen::show(ui, &home_vm, &mut action_queue);
        });

        if let Some(toast_vm) = view_model_builder::build_toast_view_model(&self.ui_state) {
            ui::toast::show(ctx, &toast_vm);
        }

        handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        // Wake up for the next pending sleep so reveals keep ticking even
        // without input events. A flow spawned this frame has no deadline
        // until its first poll, so fall back to an immediate repaint.
        if let Some(wakeup) = self.ui_state.flow.next_wakeup() {
            ctx.request_repaint_after(wakeup.saturating_duration_since(now));
        } else if !self.ui_state.flow.is_idle() {
            ctx.request_repaint();
        }
    }
}
