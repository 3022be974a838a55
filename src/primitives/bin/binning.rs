use crate::core::{Aggregation, Container, ContainerError, ContainerKind, Freeze, UserFcn};
use crate::primitives::bin::{BinMethods, Binned, Slot, check_same_geometry};
use crate::primitives::count::Counting;
use std::fmt::{Debug, Formatter};

/// Live binning of a quantity over `[low, high)`.
///
/// Each of the `num` equal-width bins owns its own nested aggregator of type
/// `V`. Filling routes a datum to the aggregator of the bin its quantity
/// falls in. Data below `low`, at or above `high`, or with a NaN quantity is
/// filled into the underflow, overflow and nanflow aggregators of type `F`
/// instead. These are plain counters unless built with
/// [`Bin::ing_with_flows`](crate::primitives::Bin::ing_with_flows).
///
/// `entries` counts every datum that passes the selection, wherever it
/// lands, so it can exceed the sum of the bins' own entries.
pub struct Binning<D: ?Sized, V, F = Counting> {
    low: f64,
    high: f64,
    quantity: UserFcn<D>,
    selection: UserFcn<D>,
    entries: f64,
    values: Vec<V>,
    underflow: F,
    overflow: F,
    nanflow: F,
}

impl<D: ?Sized, V, F> Binning<D, V, F>
where
    V: Container + Aggregation<D>,
    F: Container + Aggregation<D>,
{
    /// Geometry must already be validated.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        low: f64,
        high: f64,
        quantity: UserFcn<D>,
        selection: UserFcn<D>,
        values: Vec<V>,
        underflow: F,
        overflow: F,
        nanflow: F,
    ) -> Self {
        Self {
            low,
            high,
            quantity,
            selection,
            entries: 0.0,
            values,
            underflow,
            overflow,
            nanflow,
        }
    }

    pub fn quantity(&self) -> &UserFcn<D> {
        &self.quantity
    }

    pub fn selection(&self) -> &UserFcn<D> {
        &self.selection
    }

    /// Nested aggregators in bin order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    pub fn underflow(&self) -> &F {
        &self.underflow
    }

    pub fn overflow(&self) -> &F {
        &self.overflow
    }

    pub fn nanflow(&self) -> &F {
        &self.nanflow
    }

    /// Entries of each bin's nested aggregator.
    pub fn bin_entries(&self) -> Vec<f64> {
        self.values.iter().map(Container::entries).collect()
    }
}

impl<D: ?Sized, V, F> BinMethods for Binning<D, V, F> {
    fn num(&self) -> usize {
        self.values.len()
    }

    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }
}

impl<D: ?Sized, V, F> Container for Binning<D, V, F>
where
    V: Container + Aggregation<D>,
    F: Container + Aggregation<D>,
{
    fn kind(&self) -> ContainerKind {
        ContainerKind::Bin
    }

    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Binning::new(
            self.low,
            self.high,
            self.quantity.clone(),
            self.selection.clone(),
            self.values.iter().map(Container::zero).collect(),
            self.underflow.zero(),
            self.overflow.zero(),
            self.nanflow.zero(),
        )
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        check_same_geometry(self, other)?;
        let quantity = self.quantity.merged(&other.quantity, "Bin", "quantity")?;
        let selection = self.selection.merged(&other.selection, "Bin", "selection")?;

        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.plus(b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Binning {
            low: self.low,
            high: self.high,
            quantity,
            selection,
            entries: self.entries + other.entries,
            values,
            underflow: self.underflow.plus(&other.underflow)?,
            overflow: self.overflow.plus(&other.overflow)?,
            nanflow: self.nanflow.plus(&other.nanflow)?,
        })
    }
}

impl<D: ?Sized, V, F> Aggregation<D> for Binning<D, V, F>
where
    V: Container + Aggregation<D>,
    F: Container + Aggregation<D>,
{
    fn fill(&mut self, datum: &D, weight: f64) {
        let w = weight * self.selection.call(datum);
        if w <= 0.0 || w.is_nan() {
            return;
        }

        let q = self.quantity.call(datum);
        self.entries += w;
        match self.classify(q) {
            Slot::Bin(index) => self.values[index].fill(datum, w),
            Slot::Underflow => self.underflow.fill(datum, w),
            Slot::Overflow => self.overflow.fill(datum, w),
            Slot::NaN => self.nanflow.fill(datum, w),
        }
    }
}

impl<D: ?Sized, V, F> Freeze for Binning<D, V, F>
where
    V: Container + Aggregation<D> + Freeze,
    F: Container + Aggregation<D> + Freeze,
{
    type Frozen = Binned<V::Frozen, F::Frozen>;

    fn freeze(&self) -> Self::Frozen {
        Binned::from_parts(
            self.low,
            self.high,
            self.entries,
            self.values.iter().map(Freeze::freeze).collect(),
            self.underflow.freeze(),
            self.overflow.freeze(),
            self.nanflow.freeze(),
        )
    }
}

impl<D: ?Sized, V: Clone, F: Clone> Clone for Binning<D, V, F> {
    fn clone(&self) -> Self {
        Self {
            low: self.low,
            high: self.high,
            quantity: self.quantity.clone(),
            selection: self.selection.clone(),
            entries: self.entries,
            values: self.values.clone(),
            underflow: self.underflow.clone(),
            overflow: self.overflow.clone(),
            nanflow: self.nanflow.clone(),
        }
    }
}

impl<D: ?Sized, V: PartialEq, F: PartialEq> PartialEq for Binning<D, V, F> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low
            && self.high == other.high
            && self.entries == other.entries
            && self.values == other.values
            && self.underflow == other.underflow
            && self.overflow == other.overflow
            && self.nanflow == other.nanflow
    }
}

impl<D: ?Sized, V: Debug, F: Debug> Debug for Binning<D, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binning")
            .field("low", &self.low)
            .field("high", &self.high)
            .field("quantity", &self.quantity)
            .field("selection", &self.selection)
            .field("entries", &self.entries)
            .field("values", &self.values)
            .field("underflow", &self.underflow)
            .field("overflow", &self.overflow)
            .field("nanflow", &self.nanflow)
            .finish()
    }
}
