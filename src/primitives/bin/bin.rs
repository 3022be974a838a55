use crate::config::BinParameters;
use crate::core::{Aggregation, Container, ContainerError, ContainerKind, UserFcn, check_entries};
use crate::primitives::bin::{Binned, Binning, check_geometry};
use crate::primitives::count::{Count, Counted, Counting};

/// Entry points for the Bin family: equal-width bins over `[low, high)`,
/// each holding a nested container.
pub struct Bin;

impl Bin {
    pub const KIND: ContainerKind = ContainerKind::Bin;

    /// Live binning whose bins each start as `value.zero()`.
    pub fn ing<D, V>(
        num: usize,
        low: f64,
        high: f64,
        quantity: UserFcn<D>,
        selection: UserFcn<D>,
        value: V,
    ) -> Result<Binning<D, V>, ContainerError>
    where
        D: ?Sized,
        V: Container + Aggregation<D>,
    {
        Bin::ing_with_flows(
            num,
            low,
            high,
            quantity,
            selection,
            value,
            Count::ing(),
            Count::ing(),
            Count::ing(),
        )
    }

    /// Live binning whose out-of-range data goes to caller-supplied
    /// aggregators rather than plain counters.
    ///
    /// The flow aggregators are used as given, so any data they already
    /// hold is carried into the result.
    #[allow(clippy::too_many_arguments)]
    pub fn ing_with_flows<D, V, F>(
        num: usize,
        low: f64,
        high: f64,
        quantity: UserFcn<D>,
        selection: UserFcn<D>,
        value: V,
        underflow: F,
        overflow: F,
        nanflow: F,
    ) -> Result<Binning<D, V, F>, ContainerError>
    where
        D: ?Sized,
        V: Container + Aggregation<D>,
        F: Container + Aggregation<D>,
    {
        check_geometry(low, high, num)?;
        let values = (0..num).map(|_| value.zero()).collect();
        Ok(Binning::new(
            low, high, quantity, selection, values, underflow, overflow, nanflow,
        ))
    }

    /// Plain histogram: unweighted binning with a counter in every bin.
    pub fn histogram<D: ?Sized>(
        num: usize,
        low: f64,
        high: f64,
        quantity: UserFcn<D>,
    ) -> Result<Binning<D, Counting>, ContainerError> {
        Bin::ing(num, low, high, quantity, UserFcn::unweighted(), Count::ing())
    }

    /// Live binning with geometry taken from configuration.
    pub fn ing_from_parameters<D, V>(
        params: &BinParameters,
        quantity: UserFcn<D>,
        selection: UserFcn<D>,
        value: V,
    ) -> Result<Binning<D, V>, ContainerError>
    where
        D: ?Sized,
        V: Container + Aggregation<D>,
    {
        Bin::ing(params.num, params.low, params.high, quantity, selection, value)
    }

    /// Frozen binning from known totals, with empty out-of-range counters.
    pub fn ed<V: Container>(
        low: f64,
        high: f64,
        entries: f64,
        values: Vec<V>,
    ) -> Result<Binned<V>, ContainerError> {
        let empty = Counted::default();
        Bin::ed_with_flows(low, high, entries, values, empty, empty, empty)
    }

    /// Frozen binning from known totals, including the underflow, overflow
    /// and nanflow containers.
    pub fn ed_with_flows<V: Container, F: Container>(
        low: f64,
        high: f64,
        entries: f64,
        values: Vec<V>,
        underflow: F,
        overflow: F,
        nanflow: F,
    ) -> Result<Binned<V, F>, ContainerError> {
        if values.is_empty() {
            log::debug!("rejected Bin::ed: no values");
            return Err(ContainerError::EmptyValues);
        }
        check_geometry(low, high, values.len())?;
        check_entries(entries).inspect_err(|e| log::debug!("rejected Bin::ed: {e}"))?;

        Ok(Binned::from_parts(
            low, high, entries, values, underflow, overflow, nanflow,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::bin::BinMethods;

    #[test]
    fn ing_validates_geometry() {
        let q = || UserFcn::new(|x: &f64| *x);
        assert!(Bin::histogram(3, 0.0, 1.0, q()).is_ok());
        assert_eq!(
            Bin::histogram(3, 1.0, 0.0, q()).unwrap_err(),
            ContainerError::InvalidRange {
                low: 1.0,
                high: 0.0
            }
        );
        assert_eq!(
            Bin::histogram(0, 0.0, 1.0, q()).unwrap_err(),
            ContainerError::InvalidNum(0)
        );
        assert!(Bin::histogram(3, 0.0, f64::INFINITY, q()).is_err());
        assert_eq!(
            Bin::histogram(2, -1e308, 1e308, q()).unwrap_err(),
            ContainerError::NonFiniteRange {
                low: -1e308,
                high: 1e308
            }
        );
    }

    #[test]
    fn ing_builds_zeroed_bins() {
        let h = Bin::histogram(4, -2.0, 2.0, UserFcn::new(|x: &f64| *x)).unwrap();
        assert_eq!(h.num(), 4);
        assert_eq!(h.entries(), 0.0);
        assert_eq!(h.bin_entries(), vec![0.0; 4]);
        assert_eq!(h.name(), "Bin");
        assert_eq!(h.selection().name(), Some("unweighted"));
    }

    #[test]
    fn ing_from_parameters_uses_geometry() {
        let params = BinParameters {
            num: 8,
            low: -1.0,
            high: 3.0,
        };
        let h = Bin::ing_from_parameters(
            &params,
            UserFcn::new(|x: &f64| *x),
            UserFcn::unweighted(),
            Count::ing(),
        )
        .unwrap();
        assert_eq!((h.num(), h.low(), h.high()), (8, -1.0, 3.0));
    }

    #[test]
    fn ed_reports_empty_values() {
        assert_eq!(
            Bin::ed(0.0, 1.0, 0.0, Vec::<Counted>::new()).unwrap_err(),
            ContainerError::EmptyValues
        );
    }
}
