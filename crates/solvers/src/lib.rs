//! Fixed-step Runge–Kutta solvers.
//!
//! - [`ode::runge_kutta`] — second- and fourth-order stepping for scalar
//!   first-order equations and for second-order equations reduced to a
//!   first-order system

pub mod ode;
