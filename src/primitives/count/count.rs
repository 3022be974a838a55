use crate::core::{ContainerError, ContainerKind, check_entries};
use crate::primitives::count::{Counted, Counting};

/// Entry points for the Count family: a plain weighted tally.
pub struct Count;

impl Count {
    pub const KIND: ContainerKind = ContainerKind::Count;

    /// Live counter starting at zero.
    pub fn ing() -> Counting {
        Counting::default()
    }

    /// Frozen counter built from a known total.
    pub fn ed(entries: f64) -> Result<Counted, ContainerError> {
        check_entries(entries).inspect_err(|e| log::debug!("rejected Count::ed: {e}"))?;
        Ok(Counted::new(entries))
    }
}
