use super::App;
use crate::model::state::{DailyReport, DiscoverySet, Pond};
use crate::model::PondEngine;
use uuid::Uuid;

/// Water level at which the keeper cleans, above the disease threshold.
const CLEAN_MARGIN: f32 = 10.0;

impl App {
    /// Tends the pond, advances one day and harvests the output.
    pub fn run_day(&mut self) -> DailyReport {
        self.tend();
        let report = self.engine.advance_day(
            &mut self.pond,
            &mut self.discovery,
            &self.skills,
            &mut self.rng,
        );
        self.day += 1;
        if let Err(e) = self.engine.harvest_into(&mut self.pond, &mut self.inventory) {
            tracing::debug!(error = %e, "Harvest skipped");
        }
        self.metrics.record_day(&report);
        report
    }

    pub fn run(&mut self, days: u32) -> Vec<DailyReport> {
        (0..days).map(|_| self.run_day()).collect()
    }

    fn tend(&mut self) {
        let engine = &self.engine;
        if !self.pond.built {
            return;
        }
        if let Err(e) = engine.feed(&mut self.pond, &mut self.inventory, &mut self.wallet) {
            tracing::debug!(error = %e, "Could not feed");
        }
        if self.pond.water_quality < engine.config().health.disease_threshold + CLEAN_MARGIN {
            if let Err(e) = engine.clean(&mut self.pond, &mut self.inventory, &mut self.wallet) {
                tracing::debug!(error = %e, "Could not clean");
            }
        }
        let sick: Vec<Uuid> = self.pond.sick().map(|i| i.id).collect();
        for id in sick {
            if let Err(e) = engine.medicate(&mut self.pond, id, &mut self.inventory, &mut self.wallet) {
                tracing::debug!(error = %e, "Could not medicate");
            }
        }
        if !self.pond.is_breeding() && engine.free_slots(&self.pond) > 0 {
            if let Some((a, b)) = pick_pair(engine, &self.pond, &self.discovery) {
                if let Err(e) = engine.start_breeding(&mut self.pond, a, b) {
                    tracing::debug!(error = %e, "Could not start breeding");
                }
            }
        }
    }
}

/// Prefers a pair that would produce an undiscovered variant, then any
/// compatible pair.
fn pick_pair(engine: &PondEngine, pond: &Pond, discovery: &DiscoverySet) -> Option<(Uuid, Uuid)> {
    let candidates: Vec<_> = pond.breeding_candidates().collect();
    let mut fallback = None;
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if a.species_id != b.species_id {
                continue;
            }
            if let (Some(va), Some(vb)) = (&a.variant_id, &b.variant_id) {
                let new_variant = engine
                    .registry()
                    .lookup_offspring(&a.species_id, va, vb)
                    .is_some_and(|v| !discovery.contains(&v.id));
                if new_variant {
                    return Some((a.id, b.id));
                }
            }
            fallback.get_or_insert((a.id, b.id));
        }
    }
    fallback
}
