use numfall_core::{Dimension, RevealController};

// AppState holds the domain-facing state (chosen dimension + controller).
#[derive(Debug)]
pub struct AppState {
    pub dimension: Dimension,
    pub show_grid: bool,
    pub controller: RevealController,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        let mut controller = RevealController::new();
        // Render observer: egui repaints from state every frame, so the
        // callback's job here is the grid-update log line.
        controller.set_observer(|grid| {
            log::debug!(
                "grid updated: {} of {} cells revealed",
                grid.revealed_count(),
                grid.cell_count(),
            );
        });
        Self {
            dimension: Dimension::None,
            show_grid: false,
            controller,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_grid_and_nothing_shown() {
        let app_state = AppState::new();
        assert!(app_state.dimension.is_none());
        assert!(!app_state.show_grid);
        assert!(app_state.controller.phase().is_idle());
        assert_eq!(app_state.controller.grid().cell_count(), 0);
    }
}
