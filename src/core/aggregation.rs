/// Capability of consuming data one datum at a time.
///
/// `fill` only mutates `self`. Calling it in a different order over the same
/// data changes the result only through floating-point summation order.
pub trait Aggregation<D: ?Sized> {
    /// Incorporates `datum` with the given weight.
    fn fill(&mut self, datum: &D, weight: f64);

    /// Incorporates `datum` with unit weight.
    #[inline]
    fn fill_unweighted(&mut self, datum: &D) {
        self.fill(datum, 1.0)
    }

    /// Fills every datum of `data` with unit weight.
    fn fill_all<'a, I>(&mut self, data: I)
    where
        I: IntoIterator<Item = &'a D>,
        D: 'a,
    {
        for datum in data {
            self.fill(datum, 1.0);
        }
    }
}
