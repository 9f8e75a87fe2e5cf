use numfall_core::Dimension;

use crate::{
    action::{Action, ActionRequestQueue, RevealAction, UiAction},
    flow::{reveal_flow, toast_flow},
    state::{AppState, UiState},
};

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::Reveal(RevealAction::SelectDimension(dimension)) => {
            select_dimension(app_state, ui_state, dimension);
        }
        Action::Reveal(RevealAction::ToggleReveal) => toggle_reveal(app_state, ui_state),
        Action::Reveal(RevealAction::Advance { run }) => {
            if app_state.controller.tick(run).is_completed() {
                ui_state.flow.set_active_run(None);
            }
        }
        Action::Ui(UiAction::ExpireToast { toast }) => ui_state.expire_toast(toast),
    }
}

fn select_dimension(app_state: &mut AppState, ui_state: &mut UiState, dimension: Dimension) {
    log::info!("dimension selected: {dimension}");

    let toast = ui_state.show_toast(format!("Selected Dimension: {dimension}"));
    ui_state.flow.spawn(toast_flow(ui_state.flow.handle(), toast));

    // Choosing a dimension supersedes any fill in progress and collapses
    // the grid until Show is pressed again.
    app_state.dimension = dimension;
    app_state.controller.reset(dimension);
    app_state.show_grid = false;
    ui_state.flow.set_active_run(None);
}

fn toggle_reveal(app_state: &mut AppState, ui_state: &mut UiState) {
    if app_state.show_grid {
        app_state.show_grid = false;
        app_state.controller.cancel();
        ui_state.flow.set_active_run(None);
        return;
    }

    app_state.show_grid = true;
    app_state.controller.reset(app_state.dimension);
    let run = app_state.controller.start();
    if app_state.controller.phase().is_running() {
        ui_state.flow.set_active_run(Some(run));
        let steps = app_state.dimension.cell_count();
        ui_state
            .flow
            .spawn(reveal_flow(ui_state.flow.handle(), run, steps));
    }
}
