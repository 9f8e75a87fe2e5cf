use numfall_core::RevealPhase;

use crate::{
    state::{AppState, UiState},
    ui::{
        controls::ControlsViewModel,
        grid::{CellVisualState, GridCell, GridViewModel},
        home_screen::HomeScreenViewModel,
        status_line::{RevealStatus, StatusLineViewModel},
        toast::ToastViewModel,
    },
};

#[must_use]
pub fn build_home_screen_view_model(app_state: &AppState) -> HomeScreenViewModel {
    let controls_vm = ControlsViewModel::new(app_state.dimension, app_state.show_grid);
    let status_vm = StatusLineViewModel::new(build_status(app_state));
    let grid_vm = app_state.show_grid.then(|| build_grid(app_state));
    HomeScreenViewModel::new(controls_vm, status_vm, grid_vm)
}

#[must_use]
pub fn build_toast_view_model(ui_state: &UiState) -> Option<ToastViewModel> {
    ui_state
        .toast
        .as_ref()
        .map(|toast| ToastViewModel::new(toast.message.clone()))
}

fn build_status(app_state: &AppState) -> RevealStatus {
    let grid = app_state.controller.grid();
    match app_state.controller.phase() {
        RevealPhase::Idle => RevealStatus::Idle {
            has_grid: !app_state.dimension.is_none(),
        },
        RevealPhase::Running => RevealStatus::Running {
            revealed: grid.revealed_count(),
            total: grid.cell_count(),
        },
        RevealPhase::Complete => RevealStatus::Complete {
            total: grid.cell_count(),
        },
        RevealPhase::Cancelled => RevealStatus::Cancelled,
    }
}

fn build_grid(app_state: &AppState) -> GridViewModel {
    let grid = app_state.controller.grid();
    let phase = app_state.controller.phase();

    // Cells fill in row-major order, so the newest reveal is the last
    // revealed index.
    let newest = phase
        .is_running()
        .then(|| grid.revealed_count().checked_sub(1))
        .flatten();

    let cells = grid
        .cells()
        .enumerate()
        .map(|(index, cell)| {
            let mut visual_state = CellVisualState::empty();
            if newest == Some(index) {
                visual_state |= CellVisualState::JUST_REVEALED;
            }
            if phase.is_complete() {
                visual_state |= CellVisualState::RUN_COMPLETE;
            }
            GridCell {
                value: cell.value(),
                visual_state,
            }
        })
        .collect();

    GridViewModel::new(grid.side(), cells)
}

#[cfg(test)]
mod tests {
    use numfall_core::Dimension;

    use super::*;
    use crate::{
        action::RevealAction,
        handler::handle,
        state::{AppState, UiState},
        ui::grid::CellVisualState,
    };

    fn shown_state(dimension: Dimension) -> (AppState, UiState) {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        handle(
            &mut app_state,
            &mut ui_state,
            RevealAction::SelectDimension(dimension).into(),
        );
        handle(&mut app_state, &mut ui_state, RevealAction::ToggleReveal.into());
        (app_state, ui_state)
    }

    #[test]
    fn grid_vm_is_absent_while_hidden() {
        let app_state = AppState::new();
        let vm = build_home_screen_view_model(&app_state);
        assert!(vm.grid_vm.is_none());
    }

    #[test]
    fn newest_reveal_is_accented_while_running() {
        let (mut app_state, _ui_state) = shown_state(Dimension::D2);
        let run = app_state.controller.active_run().unwrap();
        app_state.controller.tick(run);
        app_state.controller.tick(run);

        let vm = build_home_screen_view_model(&app_state);
        let grid_vm = vm.grid_vm.as_ref().unwrap();
        assert!(
            grid_vm
                .cell(1)
                .visual_state
                .contains(CellVisualState::JUST_REVEALED)
        );
        assert!(grid_vm.cell(0).visual_state.is_empty());
        assert_eq!(grid_vm.cell(2).value, None);
    }

    #[test]
    fn completed_run_tints_every_cell() {
        let (mut app_state, _ui_state) = shown_state(Dimension::D2);
        let run = app_state.controller.active_run().unwrap();
        for _ in 0..4 {
            app_state.controller.tick(run);
        }

        let vm = build_home_screen_view_model(&app_state);
        let grid_vm = vm.grid_vm.unwrap();
        for index in 0..4 {
            let cell = grid_vm.cell(index);
            assert!(cell.visual_state.contains(CellVisualState::RUN_COMPLETE));
            assert!(!cell.visual_state.contains(CellVisualState::JUST_REVEALED));
        }
    }

    #[test]
    fn status_reflects_the_controller_phase() {
        let app_state = AppState::new();
        assert_eq!(
            build_status(&app_state),
            RevealStatus::Idle { has_grid: false }
        );

        let (mut app_state, _ui_state) = shown_state(Dimension::D3);
        let run = app_state.controller.active_run().unwrap();
        app_state.controller.tick(run);
        assert_eq!(
            build_status(&app_state),
            RevealStatus::Running {
                revealed: 1,
                total: 9
            }
        );

        app_state.controller.cancel();
        assert_eq!(build_status(&app_state), RevealStatus::Cancelled);
    }

    #[test]
    fn toast_vm_carries_the_message() {
        let mut ui_state = UiState::new();
        assert!(build_toast_view_model(&ui_state).is_none());

        ui_state.show_toast("Selected Dimension: 8".to_owned());
        let vm = build_toast_view_model(&ui_state).unwrap();
        assert_eq!(vm.message(), "Selected Dimension: 8");
    }
}
