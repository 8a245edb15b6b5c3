//! Reusable observers for kutta integration runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both the first-order and the second-order Runge–Kutta solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasSample`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Table`] — records every sample and renders a text listing
//! - [`Divergence`] — stops a run once the solution leaves a bound
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for charting trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: kutta_core::Observer
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod divergence;
mod table;

#[cfg(feature = "plot")]
mod plot;

pub use divergence::Divergence;
pub use table::{Row, Table};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
