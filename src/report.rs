//! Camp head counts and fairness metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Leaders available | Available leaders with at least one qualification |
//! | Craft available | Available boats, Beach included |
//! | Camper positions | Sum of available boat capacities |
//! | Campers available | Available campers |
//! | Turn spread | max − min turns on a craft type among eligible persons |
//!
//! A leader is eligible for a craft type when qualified to skipper it;
//! every available camper is eligible for every craft type.

use serde::{Deserialize, Serialize};

use crate::allocation::Availability;
use crate::camp::{Camp, CampPlan};
use crate::error::AllocationResult;
use crate::ledger::BalanceLedger;
use crate::models::CraftType;

/// What a camp has to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampSummary {
    /// Leaders that can be pooled.
    pub leaders_available: usize,
    /// Boats that can be pooled (Beach included).
    pub craft_available: usize,
    /// Camper seats per session if every available boat sailed.
    pub camper_positions: u64,
    /// Campers that can be pooled.
    pub campers_available: usize,
}

impl CampSummary {
    /// Counts a camp-wide availability snapshot.
    pub fn from_availability(availability: &Availability) -> Self {
        Self {
            leaders_available: availability.leaders.len(),
            craft_available: availability.boats.len(),
            camper_positions: availability.boats.iter().map(|b| u64::from(b.capacity)).sum(),
            campers_available: availability.campers.len(),
        }
    }
}

/// Turn distribution on one craft type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftSpread {
    /// Craft type measured.
    pub craft_type: CraftType,
    /// Number of eligible persons.
    pub eligible: usize,
    /// Fewest turns among them.
    pub min_turns: u32,
    /// Most turns among them.
    pub max_turns: u32,
}

impl CraftSpread {
    /// max − min.
    #[inline]
    pub fn spread(&self) -> u32 {
        self.max_turns - self.min_turns
    }
}

/// Per-craft turn spread for leaders and campers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Leader spreads, one per craft type with at least one qualified leader.
    pub leaders: Vec<CraftSpread>,
    /// Camper spreads, one per craft type (empty if there are no campers).
    pub campers: Vec<CraftSpread>,
}

impl FairnessReport {
    /// Computes spreads from a finished plan.
    ///
    /// # Arguments
    /// * `camp` - The camp the plan came from (for leader qualifications).
    /// * `plan` - The finished plan.
    ///
    /// # Errors
    /// `UnknownLedgerEntry` if `camp` names a person the plan's ledger
    /// does not track (the plan came from a different camp).
    pub fn calculate(camp: &Camp, plan: &CampPlan) -> AllocationResult<Self> {
        let mut leaders = Vec::new();
        let mut campers = Vec::new();

        for craft in plan.ledger.craft_types() {
            let eligible = camp
                .availability()
                .leaders
                .iter()
                .filter(|l| l.qualifies_for(craft))
                .map(|l| l.id.as_str());
            if let Some(spread) = spread_of(&plan.ledger, craft, eligible)? {
                leaders.push(spread);
            }

            let all_campers = plan.camper_ids.iter().map(String::as_str);
            if let Some(spread) = spread_of(&plan.ledger, craft, all_campers)? {
                campers.push(spread);
            }
        }

        Ok(Self { leaders, campers })
    }

    /// Leader spread on a craft type.
    pub fn leader_spread(&self, craft_type: &CraftType) -> Option<&CraftSpread> {
        self.leaders.iter().find(|s| &s.craft_type == craft_type)
    }

    /// Camper spread on a craft type.
    pub fn camper_spread(&self, craft_type: &CraftType) -> Option<&CraftSpread> {
        self.campers.iter().find(|s| &s.craft_type == craft_type)
    }
}

fn spread_of<'a>(
    ledger: &BalanceLedger,
    craft_type: &CraftType,
    persons: impl Iterator<Item = &'a str>,
) -> AllocationResult<Option<CraftSpread>> {
    let turns = persons
        .map(|p| ledger.turns_for(p, craft_type))
        .collect::<AllocationResult<Vec<u32>>>()?;

    let (Some(&min_turns), Some(&max_turns)) = (turns.iter().min(), turns.iter().max()) else {
        return Ok(None);
    };
    Ok(Some(CraftSpread {
        craft_type: craft_type.clone(),
        eligible: turns.len(),
        min_turns,
        max_turns,
    }))
}
