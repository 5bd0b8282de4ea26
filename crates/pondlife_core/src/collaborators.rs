//! Narrow interfaces to the host's inventory, currency and skill systems.
//!
//! The engine never assumes a collaborator call succeeds; every mutation is
//! checked before pond state changes. In-memory implementations are provided
//! for headless runs and tests.

use crate::config::{Cost, MaterialCost};
use crate::error::{PondError, Result};
use pondlife_data::QualityTier;
use std::collections::{BTreeMap, HashMap};

pub trait Inventory {
    fn has_quantity(&self, item: &str, quantity: u32) -> bool;
    fn withdraw(&mut self, item: &str, quantity: u32) -> bool;
    fn deposit(&mut self, item: &str, quantity: u32, quality: QualityTier) -> bool;
}

pub trait Wallet {
    fn balance(&self) -> u64;
    /// Deducts fully or not at all.
    fn spend(&mut self, amount: u64) -> bool;
}

pub trait SkillSource {
    fn level(&self, skill: &str) -> u32;
}

/// Charges a cost all-or-nothing.
///
/// Everything is checked up front; if a collaborator still refuses midway,
/// materials already withdrawn are deposited back before returning the error.
pub fn charge(cost: &Cost, inventory: &mut dyn Inventory, wallet: &mut dyn Wallet) -> Result<()> {
    let available = wallet.balance();
    if available < cost.gold {
        return Err(PondError::InsufficientFunds {
            needed: cost.gold,
            available,
        });
    }
    let materials: Vec<&MaterialCost> = cost.materials.iter().filter(|m| m.quantity > 0).collect();
    if let Some(m) = materials
        .iter()
        .find(|m| !inventory.has_quantity(&m.item, m.quantity))
    {
        return Err(missing(m));
    }

    let mut taken: Vec<&MaterialCost> = Vec::with_capacity(materials.len());
    for m in materials {
        if !inventory.withdraw(&m.item, m.quantity) {
            refund(inventory, &taken);
            return Err(missing(m));
        }
        taken.push(m);
    }

    if cost.gold > 0 && !wallet.spend(cost.gold) {
        refund(inventory, &taken);
        return Err(PondError::InsufficientFunds {
            needed: cost.gold,
            available: wallet.balance(),
        });
    }
    Ok(())
}

fn missing(m: &MaterialCost) -> PondError {
    PondError::MissingMaterial {
        item: m.item.clone(),
        quantity: m.quantity,
    }
}

// Refunds go back at normal quality.
fn refund(inventory: &mut dyn Inventory, taken: &[&MaterialCost]) {
    for m in taken {
        if !inventory.deposit(&m.item, m.quantity, QualityTier::Normal) {
            tracing::warn!(item = %m.item, quantity = m.quantity, "Refund rejected by inventory");
        }
    }
}

/// Stack-based inventory with an optional limit on distinct stacks.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    stacks: BTreeMap<(String, QualityTier), u32>,
    slot_limit: Option<usize>,
}

impl MemoryInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slot_limit(mut self, slots: usize) -> Self {
        self.slot_limit = Some(slots);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: &str, quantity: u32) -> Self {
        self.add(item, quantity, QualityTier::Normal);
        self
    }

    /// Adds without slot checks.
    pub fn add(&mut self, item: &str, quantity: u32, quality: QualityTier) {
        if quantity > 0 {
            *self.stacks.entry((item.to_string(), quality)).or_insert(0) += quantity;
        }
    }

    #[must_use]
    pub fn count(&self, item: &str) -> u32 {
        QualityTier::ALL
            .iter()
            .map(|&q| self.count_quality(item, q))
            .sum()
    }

    #[must_use]
    pub fn count_quality(&self, item: &str, quality: QualityTier) -> u32 {
        self.stacks
            .get(&(item.to_string(), quality))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn slots_used(&self) -> usize {
        self.stacks.len()
    }
}

impl Inventory for MemoryInventory {
    fn has_quantity(&self, item: &str, quantity: u32) -> bool {
        self.count(item) >= quantity
    }

    // Lowest quality goes first.
    fn withdraw(&mut self, item: &str, quantity: u32) -> bool {
        if !self.has_quantity(item, quantity) {
            return false;
        }
        let mut remaining = quantity;
        for q in QualityTier::ALL {
            if remaining == 0 {
                break;
            }
            let key = (item.to_string(), q);
            if let Some(stack) = self.stacks.get_mut(&key) {
                let take = remaining.min(*stack);
                *stack -= take;
                remaining -= take;
                if *stack == 0 {
                    self.stacks.remove(&key);
                }
            }
        }
        true
    }

    fn deposit(&mut self, item: &str, quantity: u32, quality: QualityTier) -> bool {
        let key = (item.to_string(), quality);
        let needs_slot = !self.stacks.contains_key(&key);
        if needs_slot && self.slot_limit.is_some_and(|limit| self.stacks.len() >= limit) {
            return false;
        }
        self.add(item, quantity, quality);
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWallet {
    pub gold: u64,
}

impl MemoryWallet {
    #[must_use]
    pub fn new(gold: u64) -> Self {
        Self { gold }
    }

    pub fn earn(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }
}

impl Wallet for MemoryWallet {
    fn balance(&self) -> u64 {
        self.gold
    }

    fn spend(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}

/// Fixed skill table; unknown skills read as level 0.
#[derive(Debug, Clone, Default)]
pub struct FixedSkills(HashMap<String, u32>);

impl FixedSkills {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, skill: &str, level: u32) -> Self {
        self.0.insert(skill.to_string(), level);
        self
    }
}

impl SkillSource for FixedSkills {
    fn level(&self, skill: &str) -> u32 {
        self.0.get(skill).copied().unwrap_or(0)
    }
}
