use rust_decimal::Decimal;

use super::BenchmarkKey;
use crate::snapshot::Snapshot;

/// One step of the benchmark resolution chain.
///
/// Each strategy either produces the benchmark value for a snapshot or
/// declines, letting the next strategy try.
pub trait BenchmarkLookup: Send + Sync {
    fn lookup(&self, snapshot: &Snapshot, key: BenchmarkKey) -> Option<Decimal>;

    /// Short name used in debug logs.
    fn name(&self) -> &'static str;
}
