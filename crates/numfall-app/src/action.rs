use std::mem;

use numfall_core::{Dimension, RunId};

use crate::state::ToastId;

/// UI-facing actions, queued by widgets and flows, applied by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum Action {
    Reveal(RevealAction),
    Ui(UiAction),
}

/// Actions that drive the reveal controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// A new dimension was chosen in the dropdown.
    SelectDimension(Dimension),
    /// The show/hide button was pressed.
    ToggleReveal,
    /// A reveal timer fired for the given run.
    Advance { run: RunId },
}

/// Actions affecting ephemeral UI chrome only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A toast reached its time-to-live.
    ExpireToast { toast: ToastId },
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use numfall_core::Dimension;

    use super::{Action, ActionRequestQueue, RevealAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(RevealAction::SelectDimension(Dimension::D4).into());
        queue.request(RevealAction::ToggleReveal.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::Reveal(RevealAction::SelectDimension(Dimension::D4))
        ));
        assert!(matches!(
            drained[1],
            Action::Reveal(RevealAction::ToggleReveal)
        ));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
