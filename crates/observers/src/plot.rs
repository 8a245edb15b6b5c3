//! Chart observer for visualizing trajectories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use kutta_core::{Observer, PhasePoint, Point, Sample};
use kutta_solvers::ode::runge_kutta::Event;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// ```ignore
/// obs.show(ShowConfig::new().title("y' = y").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implemented for the Runge–Kutta events: `Event<Point>` yields one trace
/// (`y`) and `Event<PhasePoint>` yields two (`y`, `z`), all against `x`.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace. `None` skips that trace for this event.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for Event<Point> {
    fn x(&self) -> Option<f64> {
        Some(self.sample.x)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.sample.y)]
    }
}

impl Plottable<2> for Event<PhasePoint> {
    fn x(&self) -> Option<f64> {
        Some(self.sample.x)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.sample.y), Some(self.sample.z)]
    }
}

/// An observer that collects traces during a run and displays them via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Observer path** — pass `&mut PlotObserver` to
///   [`runge_kutta::solve`](kutta_solvers::ode::runge_kutta::solve) or
///   [`runge_kutta::solve_second_order`](kutta_solvers::ode::runge_kutta::solve_second_order).
/// - **Manual path** — call [`record`][PlotObserver::record] or
///   [`record_trace`][PlotObserver::record_trace], e.g. to overlay several
///   pure-entry-point trajectories and an exact solution.
///
/// Non-finite points are dropped when recorded.
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single x value across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                push_finite(points, x, y);
            }
        }
    }

    /// Records the `y` values of a whole trajectory into one trace.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_trace<S: Sample>(&mut self, trace: usize, samples: &[S]) {
        let points = &mut self.data[trace];
        for sample in samples {
            push_finite(points, sample.x(), sample.y());
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                }))
            }),
        )
    }
}

fn push_finite(points: &mut Vec<[f64; 2]>, x: f64, y: f64) {
    if x.is_finite() && y.is_finite() {
        points.push([x, y]);
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory").x_axis_label("x");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
