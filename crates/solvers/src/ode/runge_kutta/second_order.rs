//! Stepping functions for second-order equations `y'' = f(x, y, y')`.
//!
//! The equation is carried as the first-order system `y' = z`,
//! `z' = f(x, y, z)`. Stage `i` of the `y` update (`kᵢ`, driven by `z`) and
//! stage `i` of the `z` update (`lᵢ`, driven by `f`) are always built from the
//! same intermediate state.

use kutta_core::{Accuracy, PhasePoint};

/// A single fixed step for a reduced second-order equation.
pub(super) type Stepper<F> = fn(&F, PhasePoint, f64) -> PhasePoint;

/// Resolves an accuracy into its stepping function.
pub(super) fn stepper<F>(accuracy: Accuracy) -> Stepper<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    match accuracy {
        Accuracy::SecondOrder => rk2_step::<F>,
        Accuracy::FourthOrder => rk4_step::<F>,
    }
}

/// Advances `point` by `h` with the two-stage method.
///
/// ```text
/// k1 = h·z          l1 = h·f(x, y, z)
/// k2 = h·(z + l1)   l2 = h·f(x + h, y + k1, z + l1)
/// y_next = y + (k1 + k2) / 2
/// z_next = z + (l1 + l2) / 2
/// ```
pub fn rk2_step<F>(f: &F, point: PhasePoint, h: f64) -> PhasePoint
where
    F: Fn(f64, f64, f64) -> f64,
{
    let PhasePoint { x, y, z } = point;

    let k1 = h * z;
    let l1 = h * f(x, y, z);

    let k2 = h * (z + l1);
    let l2 = h * f(x + h, y + k1, z + l1);

    PhasePoint {
        x: x + h,
        y: y + (k1 + k2) / 2.0,
        z: z + (l1 + l2) / 2.0,
    }
}

/// Advances `point` by `h` with the classical four-stage method.
///
/// ```text
/// k1 = h·z            l1 = h·f(x, y, z)
/// k2 = h·(z + l1/2)   l2 = h·f(x + h/2, y + k1/2, z + l1/2)
/// k3 = h·(z + l2/2)   l3 = h·f(x + h/2, y + k2/2, z + l2/2)
/// k4 = h·(z + l3)     l4 = h·f(x + h, y + k3, z + l3)
/// y_next = y + (k1 + 2·k2 + 2·k3 + k4) / 6
/// z_next = z + (l1 + 2·l2 + 2·l3 + l4) / 6
/// ```
pub fn rk4_step<F>(f: &F, point: PhasePoint, h: f64) -> PhasePoint
where
    F: Fn(f64, f64, f64) -> f64,
{
    let PhasePoint { x, y, z } = point;
    let half = h / 2.0;

    let k1 = h * z;
    let l1 = h * f(x, y, z);

    let k2 = h * (z + l1 / 2.0);
    let l2 = h * f(x + half, y + k1 / 2.0, z + l1 / 2.0);

    let k3 = h * (z + l2 / 2.0);
    let l3 = h * f(x + half, y + k2 / 2.0, z + l2 / 2.0);

    let k4 = h * (z + l3);
    let l4 = h * f(x + h, y + k3, z + l3);

    PhasePoint {
        x: x + h,
        y: y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0,
        z: z + (l1 + 2.0 * l2 + 2.0 * l3 + l4) / 6.0,
    }
}
