//! Composable, mergeable aggregators.
//!
//! A container summarizes data incrementally with `fill` and combines with
//! other containers of the same shape through `plus`. Containers nest: a
//! [`Binning`](primitives::Binning) holds an independent aggregator in every
//! bin, so trees such as "histogram of sums" or "histogram of histograms"
//! merge exactly like their leaves.
//!
//! Each family has a live form built by an `ing` constructor and a frozen,
//! merge-only form built by an `ed` constructor from known totals:
//!
//! | family  | live        | frozen    |
//! |---------|-------------|-----------|
//! | [`Count`](primitives::Count) | `Counting` | `Counted` |
//! | [`Sum`](primitives::Sum)     | `Summing`  | `Summed`  |
//! | [`Bin`](primitives::Bin)     | `Binning`  | `Binned`  |
//!
//! A single container is not synchronized: fill it from one owner. Merging
//! is pure, so shard-local containers can be reduced in parallel in any
//! order (see [`utils::reduce`]). Floating-point sums depend slightly on
//! fill and merge order; results agree up to rounding.

pub mod config;
pub mod core;
pub mod primitives;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{Aggregation, Container, ContainerError, ContainerKind, Freeze, UserFcn};
