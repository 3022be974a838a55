pub mod bin;
pub mod count;
pub mod sum;

pub use bin::{Bin, BinMethods, Binned, Binning};
pub use count::{Count, Counted, Counting};
pub use sum::{Sum, Summed, Summing};
