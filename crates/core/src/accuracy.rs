/// Stepping order used for every step of a run.
///
/// The order is chosen once per request and never changes mid-run; nothing
/// inspects intermediate error to switch between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Accuracy {
    /// Two-stage method with global error `O(h²)`.
    ///
    /// Evaluates the slope at both ends of the step and averages them.
    #[default]
    SecondOrder,

    /// Classical four-stage Runge–Kutta method with global error `O(h⁴)`.
    FourthOrder,
}

impl Accuracy {
    /// Maps a "use the higher order" flag to an accuracy.
    ///
    /// `true` selects [`Accuracy::FourthOrder`], `false` selects
    /// [`Accuracy::SecondOrder`].
    #[must_use]
    pub fn from_high_order(high_order: bool) -> Self {
        if high_order {
            Self::FourthOrder
        } else {
            Self::SecondOrder
        }
    }

    /// Number of derivative evaluations per step.
    #[must_use]
    pub fn stages(self) -> usize {
        match self {
            Self::SecondOrder => 2,
            Self::FourthOrder => 4,
        }
    }

    /// Order of the global truncation error.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::SecondOrder => 2,
            Self::FourthOrder => 4,
        }
    }
}

impl From<bool> for Accuracy {
    fn from(high_order: bool) -> Self {
        Self::from_high_order(high_order)
    }
}
