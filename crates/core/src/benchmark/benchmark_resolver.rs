use log::{debug, warn};
use rust_decimal::Decimal;

use super::{BenchmarkKey, BenchmarkLookup, BenchmarkNotice, BenchmarkOutcome, Remediation};
use crate::performance::{cumulative_returns, ReturnOutcome};
use crate::series::ValuePoint;
use crate::snapshot::Snapshot;

/// Reads the value stored under the benchmark's own key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedLookup;

impl BenchmarkLookup for KeyedLookup {
    fn lookup(&self, snapshot: &Snapshot, key: BenchmarkKey) -> Option<Decimal> {
        snapshot.benchmark_value(key)
    }

    fn name(&self) -> &'static str {
        "keyed"
    }
}

/// Falls back to the single legacy benchmark field, but only for the key that
/// field was historically recorded for.
#[derive(Debug, Clone, Copy)]
pub struct LegacyFallback {
    pub legacy_key: BenchmarkKey,
}

impl LegacyFallback {
    pub fn new(legacy_key: BenchmarkKey) -> Self {
        Self { legacy_key }
    }
}

impl BenchmarkLookup for LegacyFallback {
    fn lookup(&self, snapshot: &Snapshot, key: BenchmarkKey) -> Option<Decimal> {
        if key == self.legacy_key {
            snapshot.legacy_benchmark_value
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}

/// Resolves benchmark series from snapshots through an ordered chain of
/// lookup strategies.
pub struct BenchmarkResolver {
    chain: Vec<Box<dyn BenchmarkLookup>>,
}

impl BenchmarkResolver {
    /// Keyed values first, then the legacy field for `legacy_key`.
    pub fn standard(legacy_key: BenchmarkKey) -> Self {
        Self::with_chain(vec![
            Box::new(KeyedLookup),
            Box::new(LegacyFallback::new(legacy_key)),
        ])
    }

    pub fn with_chain(chain: Vec<Box<dyn BenchmarkLookup>>) -> Self {
        Self { chain }
    }

    /// Value for one snapshot from the first strategy that has one.
    pub fn lookup(&self, snapshot: &Snapshot, key: BenchmarkKey) -> Option<Decimal> {
        self.chain.iter().find_map(|strategy| {
            let value = strategy.lookup(snapshot, key);
            if value.is_some() {
                debug!(
                    "Benchmark {} on {} resolved by {} lookup",
                    key,
                    snapshot.date,
                    strategy.name()
                );
            }
            value
        })
    }

    /// `(date, value)` pairs for `key`, skipping snapshots with no value.
    pub fn resolve(&self, snapshots: &[Snapshot], key: BenchmarkKey) -> Vec<ValuePoint> {
        snapshots
            .iter()
            .filter_map(|snapshot| {
                self.lookup(snapshot, key)
                    .map(|value| ValuePoint::new(snapshot.date, value))
            })
            .collect()
    }

    /// Rebased benchmark returns over the windowed snapshots.
    ///
    /// The benchmark is rebased on its own first resolved point, which may be
    /// later than the window's first snapshot.
    pub fn compare(&self, window: &[Snapshot], key: BenchmarkKey) -> BenchmarkOutcome {
        let resolved = self.resolve(window, key);
        match cumulative_returns(&resolved) {
            ReturnOutcome::Available(series) => BenchmarkOutcome::Available { key, series },
            ReturnOutcome::InsufficientData { available } => {
                warn!(
                    "Benchmark {} unavailable for window of {} snapshots ({} resolved points).",
                    key,
                    window.len(),
                    available
                );
                let remediation = match (window.first(), window.last()) {
                    (Some(first), Some(last)) => Some(Remediation::Backfill {
                        from: first.date,
                        to: last.date,
                    }),
                    _ => None,
                };
                BenchmarkOutcome::Unavailable(BenchmarkNotice {
                    key,
                    resolved_points: available,
                    remediation,
                })
            }
        }
    }
}

impl Default for BenchmarkResolver {
    fn default() -> Self {
        Self::standard(BenchmarkKey::default())
    }
}
