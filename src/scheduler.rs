// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed-interval collection loop.

use crate::db::CsvLogStore;
use crate::error::Result;
use crate::services::FleetUpService;
use std::time::Duration;
use tokio::time::Instant;

/// Drives the fetch-then-persist cycle on a fixed cadence.
///
/// The cadence is anchored to the loop's start: each wake time is the
/// previous target plus the interval, so cycle duration never accumulates
/// drift. A cycle that overruns the interval leaves the next target in the
/// past and the next cycle starts immediately; ticks are never skipped to
/// catch up. Exactly one cycle is in flight at a time.
pub struct Collector {
    service: FleetUpService,
    store: CsvLogStore,
}

impl Collector {
    pub fn new(service: FleetUpService, store: CsvLogStore) -> Self {
        Self { service, store }
    }

    /// Run collection cycles forever.
    ///
    /// A failed cycle is logged and the loop continues; only external
    /// termination stops the process.
    pub async fn run(mut self, interval: Duration) {
        tracing::info!(
            interval_secs = interval.as_secs(),
            "Starting periodic collection"
        );

        let mut target = Instant::now();
        loop {
            match self.run_cycle().await {
                Ok(count) => tracing::info!(records = count, "Collection cycle complete"),
                Err(e) => tracing::error!(error = %e, "Collection cycle failed"),
            }

            target = next_wake(target, interval);
            // Past targets return immediately, which is the overrun behavior.
            tokio::time::sleep_until(target).await;
        }
    }

    /// One fetch-then-persist cycle.
    async fn run_cycle(&mut self) -> Result<usize> {
        tracing::info!("Starting data collection cycle");
        let locations = self.service.fetch().await?;

        if !locations.is_empty() {
            let sample = locations.iter().take(2).collect::<Vec<_>>();
            tracing::debug!(total = locations.len(), ?sample, "Collected location sample");
        }

        self.store.append(&locations)
    }
}

/// Next wake time, anchored to the previous target rather than to the
/// cycle's completion time.
fn next_wake(previous_target: Instant, interval: Duration) -> Instant {
    previous_target + interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_is_anchored_to_the_previous_target() {
        let interval = Duration::from_secs(10);
        let start = Instant::now();

        // A cycle that takes 3 units still wakes 10 units after the previous
        // target, leaving a 7-unit sleep.
        let target = next_wake(start, interval);
        assert_eq!(target - start, interval);

        let after_short_cycle = start + Duration::from_secs(3);
        assert_eq!(target - after_short_cycle, Duration::from_secs(7));
    }

    #[test]
    fn overrun_cycle_starts_immediately_without_skipping() {
        let interval = Duration::from_secs(10);
        let start = Instant::now();
        let target = next_wake(start, interval);

        // A 15-unit cycle leaves the target in the past: no sleep, and the
        // following target stays anchored at start + 20 rather than being
        // pushed out to completion + 10.
        let after_overrun = start + Duration::from_secs(15);
        assert!(target < after_overrun);
        assert_eq!(next_wake(target, interval) - start, Duration::from_secs(20));
    }
}
