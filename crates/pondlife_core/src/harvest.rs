use crate::collaborators::Inventory;
use crate::engine::PondEngine;
use crate::error::{PondError, Result};
use pondlife_data::{Pond, Produce};

impl PondEngine {
    /// Drains today's output buffer. Allowed once per day.
    pub fn collect_output(&self, pond: &mut Pond) -> Result<Vec<Produce>> {
        Self::ensure_built(pond)?;
        if pond.collected_today {
            return Err(PondError::AlreadyCollected);
        }
        pond.collected_today = true;
        Ok(std::mem::take(&mut pond.pending_output))
    }

    /// Collects and deposits today's output. Anything the inventory refuses
    /// stays in the buffer until the next tick. Returns what was delivered.
    pub fn harvest_into(&self, pond: &mut Pond, inventory: &mut dyn Inventory) -> Result<Vec<Produce>> {
        let output = self.collect_output(pond)?;
        let (delivered, refused): (Vec<Produce>, Vec<Produce>) = output
            .into_iter()
            .partition(|p| inventory.deposit(&p.item, 1, p.quality));
        if !refused.is_empty() {
            tracing::warn!(count = refused.len(), "Inventory refused pond output");
        }
        pond.pending_output = refused;
        Ok(delivered)
    }
}
