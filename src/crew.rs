//! Crew formation: pairing leaders with boats for one time slot.
//!
//! # Algorithm
//!
//! For each craft type in priority order, repeatedly:
//! 1. Take the first remaining boat of that type.
//! 2. Take the qualified leader with the fewest turns on that type.
//! 3. Form a crew with the boat's capacity.
//!
//! A craft type stops as soon as its target is met or either pool runs
//! dry. Running dry is not a failure; the slot just sails short.
//!
//! The crews formed here keep their leader and boat for every session of
//! the slot. Only the camper seats change between sessions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CrewTarget;
use crate::error::AllocationResult;
use crate::ledger::BalanceLedger;
use crate::models::{Boat, CraftType, Leader};
use crate::pool::AvailabilityPool;

/// A leader skippering a boat for one time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAssignment {
    /// Skipper id.
    pub leader: String,
    /// Boat id.
    pub boat: String,
    /// Craft type of the boat.
    pub craft_type: CraftType,
    /// Camper seats per session.
    pub capacity: u32,
}

impl CrewAssignment {
    /// Creates a crew assignment.
    pub fn new(
        leader: impl Into<String>,
        boat: impl Into<String>,
        craft_type: CraftType,
        capacity: u32,
    ) -> Self {
        Self {
            leader: leader.into(),
            boat: boat.into(),
            craft_type,
            capacity,
        }
    }
}

/// Forms the crews for one time slot.
///
/// `leaders` and `boats` are the slot's own pools; whatever is left in
/// them afterwards is simply not sailing this slot. Only a ledger lookup
/// failure is returned as an error.
pub fn form_crews<R: Rng + ?Sized>(
    targets: &[CrewTarget],
    leaders: &mut AvailabilityPool<Leader>,
    boats: &mut AvailabilityPool<Boat>,
    ledger: &BalanceLedger,
    rng: &mut R,
) -> AllocationResult<Vec<CrewAssignment>> {
    let mut crews = Vec::new();

    for target in targets {
        let craft_type = &target.craft_type;
        let mut formed = 0usize;

        while target.wants_more(formed) {
            let boat = match boats.take_first_of_category(craft_type) {
                Ok(boat) => boat,
                Err(e) if e.is_shortage() => break,
                Err(e) => return Err(e),
            };
            let leader = match leaders.take_qualified_least_turns(craft_type, ledger, rng) {
                Ok(leader) => leader,
                // The boat just taken stays ashore: it is dropped with the
                // slot's pool copy, not returned.
                Err(e) if e.is_shortage() => {
                    debug!(craft = %craft_type, boat = %boat.id, "no qualified leader left, boat stays ashore");
                    break;
                }
                Err(e) => return Err(e),
            };

            crews.push(CrewAssignment::new(
                leader.id,
                boat.id,
                craft_type.clone(),
                boat.capacity,
            ));
            formed += 1;
        }

        if let Some(max) = target.max_crews.filter(|&max| formed < max) {
            debug!(craft = %craft_type, formed, target = max, "crew target not reached");
        }
    }

    Ok(crews)
}
