//! Interactive comparison of second- and fourth-order Runge–Kutta stepping.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- growth
//! cargo run --example plot --features plot -- growth 0.25
//! cargo run --example plot --features plot -- oscillator
//! cargo run --example plot --features plot -- oscillator 0.5
//! ```
//!
//! # Modes
//!
//! - **growth [h]** — Integrate `y' = y` from `y(0) = 1` to `x = 3`. Overlays
//!   RK2, RK4, and `eˣ`. Larger steps make RK2 fall visibly behind.
//!
//! - **oscillator [h]** — Integrate `y'' = -y` from `y(0) = 0`, `y'(0) = 1`
//!   over three periods. Overlays RK2, RK4, and `sin x`; the step table is
//!   printed to stdout.

use std::{error::Error, f64::consts::TAU};

use kutta_core::{Accuracy, PhasePoint, Point};
use kutta_observers::{PlotObserver, ShowConfig, Table};
use kutta_solvers::ode::runge_kutta::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "growth".into());
    let step = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size — expected a number, e.g. 0.1");
            std::process::exit(1);
        });
    if step.is_some_and(|h| !(h.is_finite() && h > 0.0)) {
        eprintln!("Step size must be a positive number");
        std::process::exit(1);
    }

    match mode.as_str() {
        "growth" => growth(step.unwrap_or(0.1)),
        "oscillator" => oscillator(step.unwrap_or(0.2)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [growth|oscillator] [h]");
            std::process::exit(1);
        }
    }
}

/// Legend label for a stepping order, e.g. "RK4".
fn label(accuracy: Accuracy) -> String {
    format!("RK{}", accuracy.order())
}

/// Number of steps of size `h` needed to cover `span`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn steps_for(span: f64, h: f64) -> usize {
    (span / h).ceil() as usize
}

fn growth(h: f64) -> Result<(), Box<dyn Error>> {
    let start = Point::new(0.0, 1.0);
    let steps = steps_for(3.0, h);

    let rk2 = runge_kutta::integrate(start, h, steps, Accuracy::SecondOrder, |_, y| y);
    let rk4 = runge_kutta::integrate(start, h, steps, Accuracy::FourthOrder, |_, y| y);

    let mut obs = PlotObserver::<3>::new([
        label(Accuracy::SecondOrder).as_str(),
        label(Accuracy::FourthOrder).as_str(),
        "exact",
    ]);
    obs.record_trace(0, &rk2);
    obs.record_trace(1, &rk4);
    for sample in &rk4 {
        obs.record(sample.x, [None, None, Some(sample.x.exp())]);
    }

    obs.show(ShowConfig::new().title(format!("y' = y, h = {h}")).legend())?;
    Ok(())
}

fn oscillator(h: f64) -> Result<(), Box<dyn Error>> {
    let start = PhasePoint::new(0.0, 0.0, 1.0);
    let config = Config::new(h, steps_for(3.0 * TAU, h)).accuracy(Accuracy::FourthOrder);

    let mut table = Table::<PhasePoint>::new().precision(4);
    let rk4 = runge_kutta::solve_second_order(start, |_, y, _| -y, &config, &mut table)?;
    print!("{table}");

    let rk2 = runge_kutta::integrate_second_order(
        start,
        h,
        config.steps,
        Accuracy::SecondOrder,
        |_, y, _| -y,
    );

    let mut obs = PlotObserver::<3>::new([
        label(Accuracy::SecondOrder).as_str(),
        label(Accuracy::FourthOrder).as_str(),
        "sin x",
    ]);
    obs.record_trace(0, &rk2);
    obs.record_trace(1, &rk4.samples);
    for sample in &rk4.samples {
        obs.record(sample.x, [None, None, Some(sample.x.sin())]);
    }

    obs.show(ShowConfig::new().title(format!("y'' = -y, h = {h}")).legend())?;
    Ok(())
}
