use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStatus {
    Idle { has_grid: bool },
    Running { revealed: usize, total: usize },
    Complete { total: usize },
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLineViewModel {
    status: RevealStatus,
}

impl StatusLineViewModel {
    #[must_use]
    pub fn new(status: RevealStatus) -> Self {
        Self { status }
    }
}

pub fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    let (status_text, status_color) = match vm.status {
        RevealStatus::Idle { has_grid: false } => (
            "Pick a dimension to get started.".to_owned(),
            ui.visuals().weak_text_color(),
        ),
        RevealStatus::Idle { has_grid: true } => (
            "Press Show Matrix to fill the grid.".to_owned(),
            ui.visuals().weak_text_color(),
        ),
        RevealStatus::Running { revealed, total } => (
            format!("Revealing... {revealed} of {total} cells"),
            ui.visuals().text_color(),
        ),
        RevealStatus::Complete { total: 0 } => (
            "Nothing to reveal for dimension 0.".to_owned(),
            ui.visuals().weak_text_color(),
        ),
        RevealStatus::Complete { total } => (
            format!("All {total} cells revealed!"),
            ui.visuals().warn_fg_color,
        ),
        RevealStatus::Cancelled => (
            "Reveal cancelled.".to_owned(),
            ui.visuals().weak_text_color(),
        ),
    };
    ui.label(RichText::new(status_text).color(status_color));
}
