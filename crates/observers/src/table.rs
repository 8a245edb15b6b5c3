//! Text listing of a trajectory.

use std::fmt;

use kutta_core::{Observer, PhasePoint, Point, Sample};

use crate::traits::HasSample;

/// A sample that can be rendered as a table row.
pub trait Row: Sample {
    /// Column headers, in the order [`Row::cells`] returns values.
    const HEADER: &'static [&'static str];

    /// Returns the values for each column.
    fn cells(&self) -> Vec<f64>;
}

impl Row for Point {
    const HEADER: &'static [&'static str] = &["x", "y"];

    fn cells(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }
}

impl Row for PhasePoint {
    const HEADER: &'static [&'static str] = &["x", "y", "z"];

    fn cells(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }
}

/// An observer that records every sample for a tabular listing.
///
/// Pass `&mut Table` as the solver observer, then print it with `{}`.
/// Each row is prefixed by its step number.
///
/// ```
/// use kutta_core::Point;
/// use kutta_observers::Table;
/// use kutta_solvers::ode::runge_kutta::{self, Config};
///
/// let mut table = Table::<Point>::new().precision(3);
/// runge_kutta::solve(Point::new(0.0, 1.0), |_, y| y, &Config::new(0.5, 2), &mut table)?;
///
/// assert_eq!(table.rows().len(), 3);
/// println!("{table}");
/// # Ok::<(), runge_kutta::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table<S> {
    rows: Vec<(usize, S)>,
    precision: usize,
}

impl<S: Row> Table<S> {
    /// Creates an empty table that prints six decimal places.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            precision: 6,
        }
    }

    /// Sets the number of decimal places printed per cell.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Appends a row.
    pub fn record(&mut self, step: usize, sample: S) {
        self.rows.push((step, sample));
    }

    /// Returns the recorded rows as `(step, sample)` pairs.
    #[must_use]
    pub fn rows(&self) -> &[(usize, S)] {
        &self.rows
    }
}

impl<S: Row> Default for Table<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Row> fmt::Display for Table<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step_width = self
            .rows
            .last()
            .map_or(1, |(step, _)| step.to_string().len())
            .max(4);
        let width = self.precision + 8;

        write!(f, "{:>step_width$}", "step")?;
        for name in S::HEADER {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        for (step, sample) in &self.rows {
            write!(f, "{step:>step_width$}")?;
            for value in sample.cells() {
                write!(f, " {value:>width$.prec$}", prec = self.precision)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<E, A> Observer<E, A> for Table<E::Sample>
where
    E: HasSample,
    E::Sample: Row,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.step(), event.sample());
        None
    }
}

/// Allows `&mut Table` to be passed to solvers that take an observer by value,
/// so the table can be printed after the run.
impl<E, A> Observer<E, A> for &mut Table<E::Sample>
where
    E: HasSample,
    E::Sample: Row,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
