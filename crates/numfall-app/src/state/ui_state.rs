use crate::flow::FlowExecutor;

// UiState holds ephemeral UI-only state (flows, toast). It is not persisted.
#[derive(Debug)]
pub struct UiState {
    pub flow: FlowExecutor,
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flow: FlowExecutor::new(),
            toast: None,
            next_toast_id: 0,
        }
    }

    /// Replaces the active toast and returns the new toast's id, which
    /// the caller uses to schedule expiry.
    pub fn show_toast(&mut self, message: String) -> ToastId {
        self.next_toast_id += 1;
        let id = ToastId::new(self.next_toast_id);
        self.toast = Some(Toast { id, message });
        id
    }

    /// Clears the toast, but only if `id` still names the one on screen.
    pub fn expire_toast(&mut self, id: ToastId) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of one toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
}
