use crate::core::{Container, ContainerError, ContainerKind, Freeze};
use crate::primitives::bin::{BinMethods, check_same_geometry};
use crate::primitives::count::Counted;

/// Merge-only snapshot of a [`Binning`](crate::primitives::bin::Binning).
#[derive(Debug, Clone, PartialEq)]
pub struct Binned<V, F = Counted> {
    low: f64,
    high: f64,
    entries: f64,
    values: Vec<V>,
    underflow: F,
    overflow: F,
    nanflow: F,
}

impl<V, F> Binned<V, F> {
    /// Parts must already satisfy the geometry and entries invariants.
    pub(crate) fn from_parts(
        low: f64,
        high: f64,
        entries: f64,
        values: Vec<V>,
        underflow: F,
        overflow: F,
        nanflow: F,
    ) -> Self {
        Self {
            low,
            high,
            entries,
            values,
            underflow,
            overflow,
            nanflow,
        }
    }

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
}

impl<V: Container, F> Binned<V, F> {
    pub fn bin_entries(&self) -> Vec<f64> {
        self.values.iter().map(Container::entries).collect()
    }
}

impl<V, F> BinMethods for Binned<V, F> {
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

impl<V: Container, F: Container> Container for Binned<V, F> {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Bin
    }

    fn entries(&self) -> f64 {
        self.entries
    }

    fn zero(&self) -> Self {
        Binned::from_parts(
            self.low,
            self.high,
            0.0,
            self.values.iter().map(Container::zero).collect(),
            self.underflow.zero(),
            self.overflow.zero(),
            self.nanflow.zero(),
        )
    }

    fn plus(&self, other: &Self) -> Result<Self, ContainerError> {
        check_same_geometry(self, other)?;

        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a.plus(b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Binned::from_parts(
            self.low,
            self.high,
            self.entries + other.entries,
            values,
            self.underflow.plus(&other.underflow)?,
            self.overflow.plus(&other.overflow)?,
            self.nanflow.plus(&other.nanflow)?,
        ))
    }
}

impl<V: Freeze, F: Freeze> Freeze for Binned<V, F> {
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
