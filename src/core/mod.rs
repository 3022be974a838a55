mod aggregation;
mod container;
mod error;
mod freeze;
mod kind;
mod user_fcn;

pub use aggregation::Aggregation;
pub use container::Container;
pub use error::ContainerError;
pub use freeze::Freeze;
pub use kind::ContainerKind;
pub use user_fcn::UserFcn;

pub(crate) use error::check_entries;
