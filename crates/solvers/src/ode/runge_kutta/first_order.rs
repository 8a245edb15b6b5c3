//! Stepping functions for first-order equations `y' = f(x, y)`.

use kutta_core::{Accuracy, Point};

/// A single fixed step for a first-order equation.
pub(super) type Stepper<F> = fn(&F, Point, f64) -> Point;

/// Resolves an accuracy into its stepping function.
pub(super) fn stepper<F>(accuracy: Accuracy) -> Stepper<F>
where
    F: Fn(f64, f64) -> f64,
{
    match accuracy {
        Accuracy::SecondOrder => rk2_step::<F>,
        Accuracy::FourthOrder => rk4_step::<F>,
    }
}

/// Advances `point` by `h` with the two-stage method.
///
/// ```text
/// k1 = h·f(x, y)
/// k2 = h·f(x + h, y + k1)
/// y_next = y + (k1 + k2) / 2
/// ```
pub fn rk2_step<F>(f: &F, point: Point, h: f64) -> Point
where
    F: Fn(f64, f64) -> f64,
{
    let Point { x, y } = point;

    let k1 = h * f(x, y);
    let k2 = h * f(x + h, y + k1);

    Point {
        x: x + h,
        y: y + (k1 + k2) / 2.0,
    }
}

/// Advances `point` by `h` with the classical four-stage method.
///
/// ```text
/// k1 = h·f(x, y)
/// k2 = h·f(x + h/2, y + k1/2)
/// k3 = h·f(x + h/2, y + k2/2)
/// k4 = h·f(x + h, y + k3)
/// y_next = y + (k1 + 2·k2 + 2·k3 + k4) / 6
/// ```
pub fn rk4_step<F>(f: &F, point: Point, h: f64) -> Point
where
    F: Fn(f64, f64) -> f64,
{
    let Point { x, y } = point;
    let half = h / 2.0;

    let k1 = h * f(x, y);
    let k2 = h * f(x + half, y + k1 / 2.0);
    let k3 = h * f(x + half, y + k2 / 2.0);
    let k4 = h * f(x + h, y + k3);

    Point {
        x: x + h,
        y: y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0,
    }
}
