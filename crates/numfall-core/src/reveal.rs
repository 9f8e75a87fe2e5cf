//! The grid reveal state machine.

use std::fmt;

use crate::{Dimension, Grid};

/// Identity of one reveal run.
///
/// Minted by [`RevealController::start`]. Timer callbacks carry the id
/// they were scheduled for, so ticks from a superseded run are rejected
/// instead of mutating the grid of a newer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RevealPhase {
    /// No run in progress; the grid is fully unrevealed (or empty).
    Idle,
    /// A reveal run is filling the grid.
    Running,
    /// Every cell of the last run was revealed.
    Complete,
    /// The last run was stopped before completion.
    Cancelled,
}

/// Outcome of a single [`RevealController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// A cell was revealed; the run continues.
    Revealed {
        /// Row-major index of the revealed cell.
        index: usize,
    },
    /// The final cell was revealed and the run is complete.
    Completed {
        /// Row-major index of the revealed cell.
        index: usize,
    },
    /// The tick belonged to a stale or inactive run and was ignored.
    Ignored,
}

type Observer = Box<dyn FnMut(&Grid)>;

/// Fills an N×N grid with counting numbers, one cell per tick.
///
/// The controller owns the grid for the lifetime of a run and reveals
/// cells in row-major order, storing each cell's own index as its value.
/// It is time-free: the host schedules the fixed delay between ticks and
/// calls [`tick`](Self::tick) once per elapsed interval, so the whole
/// machine is deterministic under test.
///
/// At most one run is active at any time. [`reset`](Self::reset) and
/// [`cancel`](Self::cancel) retire the active run id; a tick carrying a
/// retired id is a no-op.
///
/// # Examples
///
/// ```
/// use numfall_core::{Dimension, RevealController, TickOutcome};
///
/// let mut controller = RevealController::new();
/// controller.reset(Dimension::D2);
/// let run = controller.start();
///
/// assert_eq!(controller.tick(run), TickOutcome::Revealed { index: 0 });
/// controller.cancel();
/// assert_eq!(controller.tick(run), TickOutcome::Ignored);
/// ```
pub struct RevealController {
    grid: Grid,
    cursor: usize,
    phase: RevealPhase,
    active_run: Option<RunId>,
    run_counter: u64,
    observer: Option<Observer>,
}

impl fmt::Debug for RevealController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealController")
            .field("dimension", &self.grid.dimension())
            .field("phase", &self.phase)
            .field("cursor", &self.cursor)
            .field("active_run", &self.active_run)
            .finish_non_exhaustive()
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    /// Creates an idle controller with no grid (dimension 0).
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimension(Dimension::None)
    }

    /// Creates an idle controller holding a fresh grid for `dimension`.
    #[must_use]
    pub fn with_dimension(dimension: Dimension) -> Self {
        Self {
            grid: Grid::new(dimension),
            cursor: 0,
            phase: RevealPhase::Idle,
            active_run: None,
            run_counter: 0,
            observer: None,
        }
    }

    /// Registers the render observer.
    ///
    /// The observer is invoked synchronously after every reveal, in
    /// strict index order, with the grid state at that moment. A full
    /// run notifies exactly `cell_count` times (once with the empty grid
    /// for a zero dimension). Replaces any previous observer.
    pub fn set_observer(&mut self, observer: impl FnMut(&Grid) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Returns the dimension of the current grid.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.grid.dimension()
    }

    /// Returns the grid being filled.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Returns the id of the active run, if one is running.
    #[must_use]
    pub const fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    /// Replaces the grid with a fresh all-unrevealed one for `dimension`.
    ///
    /// Any in-progress run is cancelled implicitly: the phase returns to
    /// [`RevealPhase::Idle`] and ticks carrying previously issued run ids
    /// are ignored from here on. Calling `reset` twice in a row is the
    /// same as calling it once.
    pub fn reset(&mut self, dimension: Dimension) {
        self.grid = Grid::new(dimension);
        self.cursor = 0;
        self.phase = RevealPhase::Idle;
        self.active_run = None;
    }

    /// Starts a reveal run over the current grid.
    ///
    /// While a run is already active this is a no-op returning the
    /// active id. From a terminal phase the grid is re-reset first, so a
    /// rerun always starts from a fully-unrevealed grid. A zero
    /// dimension completes immediately, notifying the observer once with
    /// the empty grid.
    pub fn start(&mut self) -> RunId {
        if let Some(run) = self.active_run {
            return run;
        }
        if !self.phase.is_idle() {
            self.reset(self.grid.dimension());
        }

        self.run_counter += 1;
        let run = RunId(self.run_counter);

        if self.grid.cell_count() == 0 {
            self.phase = RevealPhase::Complete;
            self.notify();
            return run;
        }

        self.active_run = Some(run);
        self.phase = RevealPhase::Running;
        run
    }

    /// Stops the active run.
    ///
    /// No further grid mutations or observer notifications occur for the
    /// cancelled run. Ignored unless a run is active.
    pub fn cancel(&mut self) {
        if self.active_run.take().is_some() {
            self.phase = RevealPhase::Cancelled;
        }
    }

    /// Reveals the next cell for `run`.
    ///
    /// The host calls this once per elapsed delay interval. The revealed
    /// cell stores its own row-major index as its value; the observer is
    /// then notified. After the final cell the phase transitions to
    /// [`RevealPhase::Complete`] and the run id is retired.
    ///
    /// Ticks whose run id is not the active run (stale timers from a
    /// superseded run) return [`TickOutcome::Ignored`] without touching
    /// the grid.
    pub fn tick(&mut self, run: RunId) -> TickOutcome {
        if self.active_run != Some(run) {
            return TickOutcome::Ignored;
        }

        let index = self.cursor;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u32;
        self.grid.reveal(index, value);
        self.cursor += 1;

        let completed = self.cursor == self.grid.cell_count();
        if completed {
            self.active_run = None;
            self.phase = RevealPhase::Complete;
        }
        self.notify();

        if completed {
            TickOutcome::Completed { index }
        } else {
            TickOutcome::Revealed { index }
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = &mut self.observer {
            observer(&self.grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use proptest::prelude::*;

    use super::*;
    use crate::CellState;

    /// Collects the revealed values visible in each observer snapshot.
    fn record_snapshots(controller: &mut RevealController) -> Rc<RefCell<Vec<Vec<u32>>>> {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshots);
        controller.set_observer(move |grid| {
            let revealed: Vec<u32> = grid.cells().filter_map(CellState::value).collect();
            sink.borrow_mut().push(revealed);
        });
        snapshots
    }

    fn run_to_completion(controller: &mut RevealController, run: RunId) {
        while !controller.phase().is_complete() {
            assert_ne!(controller.tick(run), TickOutcome::Ignored);
        }
    }

    #[test]
    fn completed_run_reveals_all_cells_in_row_major_order() {
        let mut controller = RevealController::with_dimension(Dimension::D2);
        let snapshots = record_snapshots(&mut controller);

        let run = controller.start();
        assert!(controller.phase().is_running());

        assert_eq!(controller.tick(run), TickOutcome::Revealed { index: 0 });
        assert_eq!(controller.tick(run), TickOutcome::Revealed { index: 1 });
        assert_eq!(controller.tick(run), TickOutcome::Revealed { index: 2 });
        assert_eq!(controller.tick(run), TickOutcome::Completed { index: 3 });

        assert!(controller.phase().is_complete());
        assert_eq!(controller.active_run(), None);
        assert_eq!(
            *snapshots.borrow(),
            vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3]],
        );
    }

    #[test]
    fn zero_dimension_completes_immediately_with_one_notification() {
        let mut controller = RevealController::new();
        let snapshots = record_snapshots(&mut controller);

        controller.reset(Dimension::None);
        let run = controller.start();

        assert!(controller.phase().is_complete());
        assert_eq!(*snapshots.borrow(), vec![Vec::<u32>::new()]);

        // There is nothing left to tick.
        assert_eq!(controller.tick(run), TickOutcome::Ignored);
        assert_eq!(snapshots.borrow().len(), 1);
    }

    #[test]
    fn cancel_stops_mutations_and_notifications() {
        let mut controller = RevealController::with_dimension(Dimension::D3);
        let snapshots = record_snapshots(&mut controller);

        let run = controller.start();
        controller.tick(run);
        controller.tick(run);
        controller.cancel();

        assert!(controller.phase().is_cancelled());
        assert_eq!(controller.tick(run), TickOutcome::Ignored);
        assert_eq!(controller.grid().revealed_count(), 2);
        assert_eq!(snapshots.borrow().len(), 2);
    }

    #[test]
    fn reset_during_a_run_retires_the_old_run_id() {
        let mut controller = RevealController::with_dimension(Dimension::D3);
        let snapshots = record_snapshots(&mut controller);

        let old_run = controller.start();
        controller.tick(old_run);
        controller.tick(old_run);

        controller.reset(Dimension::D4);
        assert!(controller.phase().is_idle());
        assert_eq!(controller.grid().revealed_count(), 0);
        assert_eq!(controller.dimension(), Dimension::D4);

        // A stale timer firing for the old run must not touch the new grid.
        assert_eq!(controller.tick(old_run), TickOutcome::Ignored);
        assert_eq!(controller.grid().revealed_count(), 0);
        assert_eq!(snapshots.borrow().len(), 2);

        let new_run = controller.start();
        assert_ne!(new_run, old_run);
        assert_eq!(controller.tick(new_run), TickOutcome::Revealed { index: 0 });
    }

    #[test]
    fn reset_is_idempotent() {
        let mut controller = RevealController::new();
        controller.reset(Dimension::D4);
        let once = controller.grid().clone();
        let phase_once = controller.phase();

        controller.reset(Dimension::D4);
        assert_eq!(controller.grid(), &once);
        assert_eq!(controller.phase(), phase_once);
        assert!(controller.phase().is_idle());
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let mut controller = RevealController::with_dimension(Dimension::D2);
        let run = controller.start();
        controller.tick(run);

        assert_eq!(controller.start(), run);
        assert!(controller.phase().is_running());
        assert_eq!(controller.grid().revealed_count(), 1);
    }

    #[test]
    fn start_after_a_terminal_phase_begins_from_an_unrevealed_grid() {
        let mut controller = RevealController::with_dimension(Dimension::D2);
        let run = controller.start();
        run_to_completion(&mut controller, run);

        let rerun = controller.start();
        assert_ne!(rerun, run);
        assert!(controller.phase().is_running());
        assert_eq!(controller.grid().revealed_count(), 0);

        controller.tick(rerun);
        controller.cancel();

        let third = controller.start();
        assert_eq!(controller.grid().revealed_count(), 0);
        assert_eq!(controller.tick(third), TickOutcome::Revealed { index: 0 });
    }

    proptest! {
        #[test]
        fn completed_runs_notify_once_per_cell_with_counting_values(
            dimension in proptest::sample::select(&Dimension::ALL[..]),
        ) {
            let mut controller = RevealController::with_dimension(dimension);
            let snapshots = record_snapshots(&mut controller);
            let run = controller.start();
            for _ in 0..dimension.cell_count() {
                prop_assert_ne!(controller.tick(run), TickOutcome::Ignored);
            }

            prop_assert!(controller.phase().is_complete());
            prop_assert!(controller.grid().is_fully_revealed());

            let snapshots = snapshots.borrow();
            let expected_notifications = dimension.cell_count().max(1);
            prop_assert_eq!(snapshots.len(), expected_notifications);

            // Each notification reveals exactly one more cell than the last.
            for (count, revealed) in snapshots.iter().enumerate() {
                if dimension.is_none() {
                    prop_assert!(revealed.is_empty());
                } else {
                    prop_assert_eq!(revealed.len(), count + 1);
                }
            }

            let expected: Vec<u32> = (0..dimension.cell_count()).map(|i| i as u32).collect();
            let last = snapshots.last().expect("at least one notification");
            prop_assert_eq!(last, &expected);
        }
    }
}
