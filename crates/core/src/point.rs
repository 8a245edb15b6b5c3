/// Common view of a trajectory sample.
///
/// Both sample types expose the independent variable `x` and the solution
/// value `y`, which is all that generic drivers and observers need.
pub trait Sample: Copy {
    /// The independent variable at this sample.
    fn x(&self) -> f64;

    /// The approximate solution value at this sample.
    fn y(&self) -> f64;

    /// Returns `true` if every component of the sample is finite.
    fn is_finite(&self) -> bool;
}

/// A sample of a first-order scalar trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The independent variable.
    pub x: f64,
    /// The approximate solution at `x`.
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sample for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A sample of a second-order equation reduced to a first-order system.
///
/// `y` approximates the solution of `y'' = f(x, y, y')` and `z` carries its
/// first derivative `y'`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhasePoint {
    /// The independent variable.
    pub x: f64,
    /// The approximate solution at `x`.
    pub y: f64,
    /// The approximate first derivative of the solution at `x`.
    pub z: f64,
}

impl PhasePoint {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drops the derivative, keeping only `(x, y)`.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Sample for PhasePoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<PhasePoint> for Point {
    fn from(sample: PhasePoint) -> Self {
        sample.point()
    }
}
