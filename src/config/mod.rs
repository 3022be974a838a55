mod bin_parameters;
mod error;

pub use bin_parameters::BinParameters;
pub use error::ConfigError;
