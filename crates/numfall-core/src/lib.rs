//! Core data structures for the Numfall grid-reveal demo.
//!
//! This crate holds the UI-independent half of the application:
//!
//! 1. [`dimension`]: the closed preset set of grid side lengths offered by
//!    the selector, including the "no grid" value.
//! 2. [`grid`]: a square grid of optional cell values in row-major order.
//! 3. [`reveal`]: the reveal state machine that fills a grid with counting
//!    numbers one tick at a time, with cooperative cancellation.
//!
//! The controller is time-free: the host schedules the fixed delay between
//! ticks, which keeps every state transition deterministic under test.
//!
//! # Examples
//!
//! ```
//! use numfall_core::{Dimension, RevealController};
//!
//! let mut controller = RevealController::new();
//! controller.reset(Dimension::D2);
//! let run = controller.start();
//!
//! // The host calls `tick` after each delay; each tick reveals one cell.
//! for _ in 0..Dimension::D2.cell_count() {
//!     controller.tick(run);
//! }
//! assert!(controller.phase().is_complete());
//! assert_eq!(controller.grid().revealed_count(), 4);
//! ```

pub mod dimension;
pub mod grid;
pub mod reveal;

pub use self::{
    dimension::{Dimension, DimensionError},
    grid::{CellState, Grid},
    reveal::{RevealController, RevealPhase, RunId, TickOutcome},
};
