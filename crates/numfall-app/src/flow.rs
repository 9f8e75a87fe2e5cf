use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
    time::{Duration, Instant},
};

use numfall_core::RunId;

use crate::{
    REVEAL_INTERVAL, TOAST_TTL,
    action::{Action, ActionRequestQueue, RevealAction, UiAction},
    state::ToastId,
};

/// Lightweight cooperative executor for timed UI flows.
///
/// This executor is polled once per frame from the app update loop and
/// drives flow futures that sleep and request UI actions. Sleep readiness
/// is decided by the clock value passed to [`poll`](Self::poll), which
/// makes flow scheduling fully deterministic in tests.
pub struct FlowExecutor {
    state: Rc<RefCell<FlowState>>,
    tasks: Vec<FlowTask>,
}

impl std::fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl Default for FlowExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(FlowState::default())),
            tasks: Vec::new(),
        }
    }

    /// Returns a handle for flows to sleep and request actions.
    #[must_use]
    pub fn handle(&self) -> FlowHandle {
        FlowHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Returns true if no flows are currently running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Records which reveal run is live.
    ///
    /// Flows re-check run liveness immediately after every suspension
    /// point; retiring the run here silences any flow still sleeping on
    /// its behalf.
    pub fn set_active_run(&mut self, run: Option<RunId>) {
        self.state.borrow_mut().active_run = run;
    }

    /// Returns the earliest pending sleep deadline, if any.
    ///
    /// The app uses this to schedule the next repaint.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.state.borrow().next_wakeup
    }

    /// Spawn a new flow future.
    pub fn spawn(&mut self, future: impl Future<Output = ()> + 'static) {
        self.tasks.push(FlowTask {
            future: Box::pin(future),
        });
    }

    /// Poll all active flows at `now` and drain any queued actions into
    /// the UI action queue.
    pub fn poll(&mut self, now: Instant, action_queue: &mut ActionRequestQueue) {
        {
            let mut state = self.state.borrow_mut();
            state.now = Some(now);
            state.next_wakeup = None;
        }
        self.drain_actions(action_queue);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut i = 0;
        while i < self.tasks.len() {
            let task = &mut self.tasks[i];
            if task.future.as_mut().poll(&mut cx).is_ready() {
                self.tasks.swap_remove(i);
            } else {
                i += 1;
            }
        }

        self.drain_actions(action_queue);
    }

    fn drain_actions(&mut self, action_queue: &mut ActionRequestQueue) {
        let mut state = self.state.borrow_mut();
        for action in state.pending_actions.drain(..) {
            action_queue.request(action);
        }
    }
}

/// Flow handle used by async flows to sleep and request actions.
#[derive(Clone)]
pub struct FlowHandle {
    state: Rc<RefCell<FlowState>>,
}

impl FlowHandle {
    fn request_action(&self, action: Action) {
        self.state.borrow_mut().pending_actions.push(action);
    }

    fn is_run_active(&self, run: RunId) -> bool {
        self.state.borrow().active_run == Some(run)
    }

    fn sleep(&self, duration: Duration) -> Sleep {
        Sleep {
            state: Rc::clone(&self.state),
            duration,
            deadline: None,
        }
    }
}

/// One reveal run: sleep the fixed interval, re-check liveness, request
/// the next reveal.
///
/// The liveness check sits immediately after the suspension point, so a
/// run retired while this flow slept requests nothing further.
pub async fn reveal_flow(handle: FlowHandle, run: RunId, steps: usize) {
    for _ in 0..steps {
        handle.sleep(REVEAL_INTERVAL).await;
        if !handle.is_run_active(run) {
            return;
        }
        handle.request_action(RevealAction::Advance { run }.into());
    }
}

/// Expires a toast after its time-to-live.
///
/// The handler compares toast ids, so an expiry racing a replacement
/// toast is harmless.
pub async fn toast_flow(handle: FlowHandle, toast: ToastId) {
    handle.sleep(TOAST_TTL).await;
    handle.request_action(UiAction::ExpireToast { toast }.into());
}

struct FlowTask {
    future: Pin<Box<dyn Future<Output = ()>>>,
}

#[derive(Debug, Default)]
struct FlowState {
    now: Option<Instant>,
    next_wakeup: Option<Instant>,
    active_run: Option<RunId>,
    pending_actions: Vec<Action>,
}

/// Timer future; ready once the executor clock passes its deadline.
///
/// The deadline anchors at the clock value of the first poll, not at
/// construction time, so a flow spawned mid-frame still waits one full
/// interval.
struct Sleep {
    state: Rc<RefCell<FlowState>>,
    duration: Duration,
    deadline: Option<Instant>,
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        let Some(now) = this.state.borrow().now else {
            return Poll::Pending;
        };
        let deadline = *this.deadline.get_or_insert(now + this.duration);
        if now >= deadline {
            Poll::Ready(())
        } else {
            let mut state = this.state.borrow_mut();
            state.next_wakeup = Some(match state.next_wakeup {
                Some(wakeup) => wakeup.min(deadline),
                None => deadline,
            });
            Poll::Pending
        }
    }
}

fn noop_waker() -> Waker {
    unsafe fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    unsafe fn wake(_: *const ()) {}

    unsafe fn wake_by_ref(_: *const ()) {}

    unsafe fn drop(_: *const ()) {}

    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);

    unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
}
