//! Core traits and types for kutta.
//!
//! This crate defines the shared abstractions that the Runge–Kutta solvers and
//! the reusable observers build on:
//!
//! - [`Point`], [`PhasePoint`] — samples of a first-order and a reduced
//!   second-order trajectory
//! - [`Sample`] — the view of a sample that generic drivers and observers use
//! - [`Accuracy`] — the stepping order selected for a whole run
//! - [`Observer`] — receives solver events and optionally returns control actions

mod accuracy;
mod observer;
mod point;

pub use accuracy::Accuracy;
pub use observer::Observer;
pub use point::{PhasePoint, Point, Sample};
