mod sum;
mod summed;
mod summing;

pub use sum::Sum;
pub use summed::Summed;
pub use summing::Summing;
