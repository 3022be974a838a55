use crate::core::{Container, ContainerError, ContainerKind, Freeze};

/// Merge-only snapshot of a [`Summing`](crate::primitives::sum::Summing).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summed {
    entries: f64,
    sum: f64,
}

impl Summed {
    pub(crate) fn new(entries: f64, sum: f64) -> Self {
        Self { entries, sum }
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Weighted mean of the quantity, `NaN` when nothing was included.
    pub fn mean(&self) -> f64 {
        if self.entries > 0.0 {
            self.sum / self.entries
        } else {
            f64::NAN
        }
    }
}

impl Container for Summed {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Sum
    }

    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Summed::default()
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        Ok(Summed::new(
            self.entries + other.entries,
            self.sum + other.sum,
        ))
    }
}

impl Freeze for Summed {
    type Frozen = Summed;

    fn freeze(&self) -> Summed {
        *self
    }
}
