use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use super::{controls, grid, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{
        controls::ControlsViewModel, grid::GridViewModel, status_line::StatusLineViewModel,
    },
};

#[derive(Debug, Clone)]
pub struct HomeScreenViewModel {
    pub controls_vm: ControlsViewModel,
    pub status_vm: StatusLineViewModel,
    pub grid_vm: Option<GridViewModel>,
}

impl HomeScreenViewModel {
    #[must_use]
    pub fn new(
        controls_vm: ControlsViewModel,
        status_vm: StatusLineViewModel,
        grid_vm: Option<GridViewModel>,
    ) -> Self {
        Self {
            controls_vm,
            status_vm,
            grid_vm,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &HomeScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;

    StripBuilder::new(ui)
        .size(Size::exact(28.0))
        .size(Size::exact(20.0))
        .size(Size::exact(spacing.y))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    controls::show(ui, &vm.controls_vm, action_queue);
                });
            });
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    status_line::show(ui, &vm.status_vm);
                });
            });
            strip.cell(|_ui| {}); // Spacer
            strip.cell(|ui| {
                if let Some(grid_vm) = &vm.grid_vm {
                    ScrollArea::both().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            grid::show(ui, grid_vm);
                        });
                    });
                }
            });
        });
}
