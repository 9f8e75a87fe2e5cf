//! Shared library module for the Numfall app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::time::Duration;

/// Fixed delay between successive cell reveals.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(1000);

/// How long a toast notification stays on screen.
pub const TOAST_TTL: Duration = Duration::from_millis(2500);

pub mod action;
pub mod app;
pub mod flow;
pub mod handler;
pub mod state;
pub mod ui;
pub mod view_model_builder;

pub use self::app::NumfallApp;
