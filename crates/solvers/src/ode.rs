//! Solvers for ordinary differential equations.
//!
//! Every solver here takes a fixed step size and a fixed number of steps and
//! returns the full trajectory, initial sample included.
//!
//! # Solvers
//!
//! - [`runge_kutta`] — explicit two- and four-stage Runge–Kutta methods

pub mod runge_kutta;
