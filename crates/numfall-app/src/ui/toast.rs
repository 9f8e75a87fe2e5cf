use eframe::egui::{Align2, Area, Context, Frame, Id, Order, Vec2};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastViewModel {
    message: String,
}

impl ToastViewModel {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self { message }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Paints the transient notification near the bottom of the window.
///
/// Expiry is driven by a flow, not by this widget; it only draws
/// whatever toast is currently in the UI state.
pub fn show(ctx: &Context, vm: &ToastViewModel) {
    Area::new(Id::new("toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -24.0))
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(&vm.message);
            });
        });
}
