use crate::core::{Aggregation, Container, ContainerError, ContainerKind, Freeze, UserFcn};
use crate::primitives::sum::Summed;
use std::fmt::{Debug, Formatter};

/// Live accumulator of a weighted count and a weighted sum of a quantity.
///
/// Each fill computes `w = weight * selection(datum)`. When `w > 0` the datum
/// contributes `w` to `entries` and `quantity(datum) * w` to `sum`; otherwise
/// it is excluded entirely.
pub struct Summing<D: ?Sized> {
    quantity: UserFcn<D>,
    selection: UserFcn<D>,
    entries: f64,
    sum: f64,
}

impl<D: ?Sized> Summing<D> {
    pub(crate) fn new(quantity: UserFcn<D>, selection: UserFcn<D>) -> Self {
        Self {
            quantity,
            selection,
            entries: 0.0,
            sum: 0.0,
        }
    }

    pub fn quantity(&self) -> &UserFcn<D> {
        &self.quantity
    }

    pub fn selection(&self) -> &UserFcn<D> {
        &self.selection
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

impl<D: ?Sized> Container for Summing<D> {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Sum
    }

    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Summing::new(self.quantity.clone(), self.selection.clone())
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        let quantity = self.quantity.merged(&other.quantity, "Sum", "quantity")?;
        let selection = self.selection.merged(&other.selection, "Sum", "selection")?;

        Ok(Summing {
            quantity,
            selection,
            entries: self.entries + other.entries,
            sum: self.sum + other.sum,
        })
    }
}

impl<D: ?Sized> Aggregation<D> for Summing<D> {
    fn fill(&mut self, datum: &D, weight: f64) {
        let w = weight * self.selection.call(datum);
        if w > 0.0 {
            let q = self.quantity.call(datum);
            self.entries += w;
            self.sum += q * w;
        }
    }
}

impl<D: ?Sized> Freeze for Summing<D> {
    type Frozen = Summed;

    fn freeze(&self) -> Summed {
        Summed::new(self.entries, self.sum)
    }
}

impl<D: ?Sized> Clone for Summing<D> {
    fn clone(&self) -> Self {
        Self {
            quantity: self.quantity.clone(),
            selection: self.selection.clone(),
            entries: self.entries,
            sum: self.sum,
        }
    }
}

impl<D: ?Sized> PartialEq for Summing<D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.sum == other.sum
    }
}

impl<D: ?Sized> Debug for Summing<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summing")
            .field("quantity", &self.quantity)
            .field("selection", &self.selection)
            .field("entries", &self.entries)
            .field("sum", &self.sum)
            .finish()
    }
}
