use crate::core::ContainerError;
use std::cmp::Ordering;
use std::ops::Range;

/// Where a value lands relative to a binning geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Bin(usize),
    Underflow,
    Overflow,
    NaN,
}

/// Index arithmetic over `num` equal-width bins covering `[low, high)`.
///
/// Shared by live and frozen binnings; it knows nothing about what each bin
/// stores.
pub trait BinMethods {
    fn num(&self) -> usize;
    fn low(&self) -> f64;
    fn high(&self) -> f64;

    #[inline]
    fn under(&self, x: f64) -> bool {
        !x.is_nan() && x < self.low()
    }

    #[inline]
    fn over(&self, x: f64) -> bool {
        !x.is_nan() && x >= self.high()
    }

    #[inline]
    fn nan(&self, x: f64) -> bool {
        x.is_nan()
    }

    /// Index of the bin containing `x`, or `None` when `x` is below `low`,
    /// at or above `high`, or NaN.
    fn bin(&self, x: f64) -> Option<usize> {
        if self.under(x) || self.over(x) || self.nan(x) {
            return None;
        }
        let num = self.num();
        let index = (num as f64 * (x - self.low()) / (self.high() - self.low())).floor() as usize;
        // rounding can push values just below `high` onto `num`
        Some(index.min(num - 1))
    }

    fn classify(&self, x: f64) -> Slot {
        if self.nan(x) {
            Slot::NaN
        } else if self.under(x) {
            Slot::Underflow
        } else if self.over(x) {
            Slot::Overflow
        } else {
            self.bin(x).map_or(Slot::NaN, Slot::Bin)
        }
    }

    fn indexes(&self) -> Range<usize> {
        0..self.num()
    }

    /// Half-open interval `[start, end)` covered by bin `index`.
    fn range(&self, index: usize) -> (f64, f64) {
        let width = self.high() - self.low();
        let num = self.num() as f64;
        (
            width * index as f64 / num + self.low(),
            width * (index + 1) as f64 / num + self.low(),
        )
    }
}

pub(crate) fn check_geometry(low: f64, high: f64, num: usize) -> Result<(), ContainerError> {
    // NaN bounds compare as unordered and are rejected here too
    let checked = if low.partial_cmp(&high) != Some(Ordering::Less) {
        Err(ContainerError::InvalidRange { low, high })
    } else if !(high - low).is_finite() {
        Err(ContainerError::NonFiniteRange { low, high })
    } else if num < 1 {
        Err(ContainerError::InvalidNum(num))
    } else {
        Ok(())
    };
    checked.inspect_err(|e| log::debug!("rejected Bin geometry: {e}"))
}

/// Merge compatibility requires exactly equal geometry.
pub(crate) fn check_same_geometry<A, B>(a: &A, b: &B) -> Result<(), ContainerError>
where
    A: BinMethods + ?Sized,
    B: BinMethods + ?Sized,
{
    let checked = if a.low() != b.low() {
        Err(ContainerError::incompatible("Bin", "low", a.low(), b.low()))
    } else if a.high() != b.high() {
        Err(ContainerError::incompatible("Bin", "high", a.high(), b.high()))
    } else if a.num() != b.num() {
        Err(ContainerError::incompatible(
            "Bin",
            "number of values",
            a.num(),
            b.num(),
        ))
    } else {
        Ok(())
    };
    checked.inspect_err(|e| log::debug!("rejected Bin merge: {e}"))
}
