//! Benchmark selection and resolution against portfolio snapshots.
//!
//! Benchmark values are looked up through an ordered chain of strategies so
//! the legacy-field fallback can be tested on its own.

mod benchmark_model;
mod benchmark_resolver;
mod benchmark_traits;

pub use benchmark_model::*;
pub use benchmark_resolver::*;
pub use benchmark_traits::*;
