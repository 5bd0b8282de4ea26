//! Running totals over daily reports, plus logging setup.

use pondlife_data::DailyReport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Accumulates what happened across simulated days.
pub struct Metrics {
    days: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    produced: AtomicU64,
    breeding_failures: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    summary_interval: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_summary_interval(30)
    }

    /// A summary line is logged every `days` simulated days; 0 disables it.
    #[must_use]
    pub fn with_summary_interval(days: u64) -> Self {
        Self {
            days: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            produced: AtomicU64::new(0),
            breeding_failures: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            summary_interval: days,
        }
    }

    pub fn record_day(&self, report: &DailyReport) {
        let day = self.days.fetch_add(1, Ordering::Relaxed) + 1;
        self.deaths
            .fetch_add(report.died.len() as u64, Ordering::Relaxed);
        self.produced
            .fetch_add(report.produced.len() as u64, Ordering::Relaxed);
        for p in &report.produced {
            self.increment_counter(&format!("produce.{}", p.quality));
        }
        if let Some(birth) = &report.bred {
            self.births.fetch_add(1, Ordering::Relaxed);
            if birth.new_discovery {
                self.increment_counter("discoveries");
            }
        }
        if let Some(reason) = report.breeding_failed_reason {
            self.breeding_failures.fetch_add(1, Ordering::Relaxed);
            self.increment_counter(&format!("breeding_failed.{reason}"));
        }

        if self.summary_interval > 0 && day % self.summary_interval == 0 {
            tracing::info!(
                day,
                births = self.births(),
                deaths = self.deaths(),
                produced = self.produced(),
                water_quality = report.water_quality,
                "Pond summary"
            );
        }
    }

    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn days(&self) -> u64 {
        self.days.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn breeding_failures(&self) -> u64 {
        self.breeding_failures.load(Ordering::Relaxed)
    }
}

/// Installs a global fmt subscriber on stderr, filtered by `RUST_LOG` and
/// defaulting to `info`. Later calls are ignored.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pondlife_data::{Birth, BreedingFailure, Produce, QualityTier};
    use uuid::Uuid;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.days(), 0);
        assert_eq!(metrics.counter("anything"), 0);
    }

    #[test]
    fn test_record_day() {
        let metrics = Metrics::with_summary_interval(1);
        let report = DailyReport {
            produced: vec![
                Produce::new("koi_roe", QualityTier::Gold),
                Produce::new("koi_roe", QualityTier::Normal),
            ],
            died: vec!["Old".into()],
            bred: Some(Birth {
                id: Uuid::from_u128(1),
                name: "Showa".into(),
                variant_id: Some("showa".into()),
                new_discovery: true,
            }),
            ..Default::default()
        };
        metrics.record_day(&report);
        metrics.record_day(&DailyReport {
            breeding_failed_reason: Some(BreedingFailure::PondFull),
            ..Default::default()
        });

        assert_eq!(metrics.days(), 2);
        assert_eq!(metrics.births(), 1);
        assert_eq!(metrics.deaths(), 1);
        assert_eq!(metrics.produced(), 2);
        assert_eq!(metrics.breeding_failures(), 1);
        assert_eq!(metrics.counter("produce.gold"), 1);
        assert_eq!(metrics.counter("discoveries"), 1);
        assert_eq!(metrics.counter("breeding_failed.pond full"), 1);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
