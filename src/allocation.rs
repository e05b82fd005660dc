//! Allocation: everything that happens in one time slot.
//!
//! Crew formation runs once on fresh leader and boat pools, then the
//! configured number of camper sessions run strictly in order, each one
//! writing its turns to the ledger before the next one selects.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AllocationConfig;
use crate::crew::{form_crews, CrewAssignment};
use crate::error::AllocationResult;
use crate::ledger::BalanceLedger;
use crate::models::{Boat, Camper, Leader, ScheduleEntry, TimeSlot};
use crate::pool::AvailabilityPool;
use crate::session::Session;

/// Camp-wide availability, computed once and never mutated.
///
/// Every pool is built as a copy of one of these lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Availability {
    /// Available leaders holding at least one qualification.
    pub leaders: Vec<Leader>,
    /// Available boats, in input order.
    pub boats: Vec<Boat>,
    /// Available campers.
    pub campers: Vec<Camper>,
}

/// The roster for one time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// When.
    pub slot: TimeSlot,
    /// Duty groups in scope (informational; campers are not filtered).
    pub duty_groups: Vec<String>,
    /// Leader/boat pairings, fixed for all sessions.
    pub crews: Vec<CrewAssignment>,
    /// Camper sessions in order.
    pub sessions: Vec<Session>,
}

impl Allocation {
    /// Builds the allocation for one schedule entry.
    pub fn build<R: Rng + ?Sized>(
        entry: &ScheduleEntry,
        known_duty_groups: &[String],
        availability: &Availability,
        config: &AllocationConfig,
        ledger: &mut BalanceLedger,
        rng: &mut R,
    ) -> AllocationResult<Self> {
        let duty_groups = entry.resolve_duty_groups(known_duty_groups);
        for group in duty_groups.iter().filter(|g| !known_duty_groups.contains(*g)) {
            warn!(slot = %entry.slot, duty_group = %group, "schedule names an unknown duty group");
        }

        let mut leaders = AvailabilityPool::from_snapshot(&availability.leaders);
        let mut boats = AvailabilityPool::from_snapshot(&availability.boats);
        let crews = form_crews(&config.crew_targets, &mut leaders, &mut boats, ledger, rng)?;

        let mut sessions = Vec::with_capacity(config.sessions_per_slot as usize);
        for number in 1..=config.sessions_per_slot {
            sessions.push(Session::assign(
                number,
                &crews,
                &availability.campers,
                ledger,
                rng,
            )?);
        }

        info!(
            slot = %entry.slot,
            crews = crews.len(),
            idle_leaders = leaders.len(),
            idle_boats = boats.len(),
            "allocation built"
        );

        Ok(Self {
            slot: entry.slot.clone(),
            duty_groups,
            crews,
            sessions,
        })
    }

    /// Campers on crew `crew_index` in session `number` (1-based).
    pub fn campers(&self, number: u32, crew_index: usize) -> &[String] {
        self.session(number)
            .map(|s| s.campers_for(crew_index))
            .unwrap_or_default()
    }

    /// Session by 1-based number.
    pub fn session(&self, number: u32) -> Option<&Session> {
        self.sessions.iter().find(|s| s.number == number)
    }

    /// Crew skippered by a leader.
    pub fn crew_for_leader(&self, leader: &str) -> Option<&CrewAssignment> {
        self.crews.iter().find(|c| c.leader == leader)
    }
}
