use crate::core::{Aggregation, Container, ContainerError, ContainerKind, Freeze};
use crate::primitives::count::Counted;

/// Live weighted tally.
///
/// Accepts any datum type: only the weight matters, and it is added
/// unconditionally (there is no selection to veto it).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Counting {
    entries: f64,
}

impl Container for Counting {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Count
    }

    #[inline]
    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Counting::default()
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        Ok(Counting {
            entries: self.entries + other.entries,
        })
    }
}

impl<D: ?Sized> Aggregation<D> for Counting {
    #[inline]
    fn fill(&mut self, _datum: &D, weight: f64) {
        self.entries += weight;
    }
}

impl Freeze for Counting {
    type Frozen = Counted;

    fn freeze(&self) -> Counted {
        Counted::new(self.entries)
    }
}
