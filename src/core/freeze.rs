use crate::core::Container;

/// Conversion of a live aggregator into its merge-only snapshot.
///
/// Frozen containers freeze to a copy of themselves, so a tree of any depth
/// can be frozen as long as every level implements this trait.
pub trait Freeze {
    type Frozen: Container + Clone;

    fn freeze(&self) -> Self::Frozen;
}
