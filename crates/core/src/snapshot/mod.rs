//! Portfolio valuation snapshots as delivered by the fetch layer.

mod snapshot_model;

pub use snapshot_model::*;
