use crate::core::{ContainerError, ContainerKind, UserFcn, check_entries};
use crate::primitives::sum::{Summed, Summing};

/// Entry points for the Sum family: weighted count plus weighted sum of a
/// quantity.
pub struct Sum;

impl Sum {
    pub const KIND: ContainerKind = ContainerKind::Sum;

    /// Live summer starting at zero.
    pub fn ing<D: ?Sized>(quantity: UserFcn<D>, selection: UserFcn<D>) -> Summing<D> {
        Summing::new(quantity, selection)
    }

    /// Live summer that includes every datum with its external weight.
    pub fn ing_unweighted<D: ?Sized>(quantity: UserFcn<D>) -> Summing<D> {
        Summing::new(quantity, UserFcn::unweighted())
    }

    /// Frozen summer built from known totals.
    pub fn ed(entries: f64, sum: f64) -> Result<Summed, ContainerError> {
        check_entries(entries).inspect_err(|e| log::debug!("rejected Sum::ed: {e}"))?;
        Ok(Summed::new(entries, sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Container;

    #[test]
    fn ed_validates_entries() {
        let s = Sum::ed(2.0, -3.5).unwrap();
        assert_eq!(s.entries(), 2.0);
        assert_eq!(s.sum(), -3.5);
        assert_eq!(s.name(), "Sum");
        assert!(matches!(
            Sum::ed(-1.0, 0.0),
            Err(ContainerError::NegativeEntries(_))
        ));
    }

    #[test]
    fn ing_starts_empty() {
        let s = Sum::ing_unweighted(UserFcn::new(|x: &f64| *x));
        assert_eq!(s.entries(), 0.0);
        assert_eq!(s.sum(), 0.0);
    }
}
