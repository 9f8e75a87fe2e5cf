use eframe::egui::{ComboBox, Ui};
use numfall_core::Dimension;

use crate::action::{ActionRequestQueue, RevealAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsViewModel {
    dimension: Dimension,
    showing: bool,
}

impl ControlsViewModel {
    #[must_use]
    pub fn new(dimension: Dimension, showing: bool) -> Self {
        Self { dimension, showing }
    }
}

pub fn show(ui: &mut Ui, vm: &ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label("Select Dimensions");

        let mut selected = vm.dimension;
        ComboBox::from_id_salt("dimension_select")
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for dimension in Dimension::ALL {
                    ui.selectable_value(&mut selected, dimension, dimension.to_string());
                }
            });
        if selected != vm.dimension {
            action_queue.request(RevealAction::SelectDimension(selected).into());
        }

        let button_label = if vm.showing {
            "Hide Matrix"
        } else {
            "Show Matrix"
        };
        if ui.button(button_label).clicked() {
            action_queue.request(RevealAction::ToggleReveal.into());
        }
    });
}
