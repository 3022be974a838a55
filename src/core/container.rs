use crate::core::{ContainerError, ContainerKind};

/// Mergeable summary of data.
///
/// Every implementation forms a commutative monoid: [`zero`] is the identity
/// and [`plus`] is the (associative, commutative) combining operation. Merging
/// the summaries of any partition of a dataset, in any order, yields the same
/// result as summarizing the whole dataset at once, up to floating-point
/// summation order.
///
/// [`zero`]: Container::zero
/// [`plus`]: Container::plus
pub trait Container: Sized {
    /// Family this container belongs to.
    fn kind(&self) -> ContainerKind;

    /// Family name, e.g. `"Count"`, `"Sum"` or `"Bin"`.
    fn name(&self) -> &'static str {
        self.kind().into()
    }

    /// Total weight of all data included so far.
    fn entries(&self) -> f64;

    /// Returns a sibling with the same configuration and all numeric state
    /// reset to the identity.
    fn zero(&self) -> Self;

    /// Combines two containers into a new one.
    ///
    /// Never mutates either operand. Fails if the operands have incompatible
    /// structure (e.g. different binning geometry anywhere in the tree).
    fn plus(&self, other: &Self) -> Result<Self, ContainerError>;
}
