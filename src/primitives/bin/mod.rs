mod bin;
mod bin_methods;
mod binned;
mod binning;

pub use bin::Bin;
pub use bin_methods::{BinMethods, Slot};
pub use binned::Binned;
pub use binning::Binning;

pub(crate) use bin_methods::{check_geometry, check_same_geometry};
