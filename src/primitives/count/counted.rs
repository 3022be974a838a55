use crate::core::{Container, ContainerError, ContainerKind, Freeze};

/// Merge-only snapshot of a [`Counting`](crate::primitives::count::Counting).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Counted {
    entries: f64,
}

impl Counted {
    pub(crate) fn new(entries: f64) -> Self {
        Self { entries }
    }
}

impl Container for Counted {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Count
    }

    #[inline]
    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Counted::new(0.0)
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        Ok(Counted::new(self.entries + other.entries))
    }
}

impl Freeze for Counted {
    type Frozen = Counted;

    fn freeze(&self) -> Counted {
        *self
    }
}
