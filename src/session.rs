//! Session assignment: seating campers on the slot's crews.
//!
//! Each session starts from a fresh camper pool built from the camp-wide
//! snapshot, so a camper can sail every session of a slot, possibly on a
//! different craft each time. Within a session nobody is seated twice.
//!
//! Turns are logged while seating and written to the ledger only after
//! every crew is filled, so all crews of one session see the same counts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crew::CrewAssignment;
use crate::error::AllocationResult;
use crate::ledger::{BalanceLedger, TurnEntry};
use crate::models::Camper;
use crate::pool::AvailabilityPool;

/// Campers seated on one crew for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCrew {
    /// Boat id of the crew this seating belongs to.
    pub boat: String,
    /// Seated camper ids, in selection order.
    pub campers: Vec<String>,
}

/// One camper session of a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session number, starting at 1.
    pub number: u32,
    /// Seating per crew, parallel to the allocation's crew list.
    pub crews: Vec<SessionCrew>,
    /// Turns handed out in this session (leaders first, then campers).
    pub log: Vec<TurnEntry>,
}

impl Session {
    /// Seats campers on `crews` and records the session's turns.
    ///
    /// # Algorithm
    /// 1. Log one turn per crew leader.
    /// 2. For each crew in order, take least-turns campers for its craft
    ///    type until its capacity is reached or the pool is empty.
    /// 3. Apply the log to the ledger.
    pub fn assign<R: Rng + ?Sized>(
        number: u32,
        crews: &[CrewAssignment],
        campers: &[Camper],
        ledger: &mut BalanceLedger,
        rng: &mut R,
    ) -> AllocationResult<Self> {
        let mut pool = AvailabilityPool::from_snapshot(campers);
        let mut log: Vec<TurnEntry> = crews
            .iter()
            .map(|c| TurnEntry::new(c.leader.as_str(), c.craft_type.clone()))
            .collect();
        let mut seated = Vec::with_capacity(crews.len());

        for crew in crews {
            let mut seating = SessionCrew {
                boat: crew.boat.clone(),
                campers: Vec::new(),
            };
            let mut remaining = crew.capacity;

            while remaining > 0 {
                let camper = match pool.take_qualified_least_turns(&crew.craft_type, ledger, rng) {
                    Ok(camper) => camper,
                    Err(e) if e.is_shortage() => break,
                    Err(e) => return Err(e),
                };
                log.push(TurnEntry::new(camper.id.as_str(), crew.craft_type.clone()));
                seating.campers.push(camper.id);
                remaining -= 1;
            }

            if remaining > 0 {
                debug!(session = number, boat = %crew.boat, empty_seats = remaining, "ran out of campers");
            }
            seated.push(seating);
        }

        ledger.record_all(&log)?;
        debug!(session = number, crews = crews.len(), turns = log.len(), "session filled");

        Ok(Self {
            number,
            crews: seated,
            log,
        })
    }

    /// Campers seated on the crew at `index`.
    pub fn campers_for(&self, index: usize) -> &[String] {
        self.crews
            .get(index)
            .map(|c| c.campers.as_slice())
            .unwrap_or_default()
    }

    /// Campers seated on a boat.
    pub fn campers_on(&self, boat: &str) -> Option<&[String]> {
        self.crews
            .iter()
            .find(|c| c.boat == boat)
            .map(|c| c.campers.as_slice())
    }

    /// Every camper seated in this session.
    pub fn seated_campers(&self) -> impl Iterator<Item = &str> {
        self.crews
            .iter()
            .flat_map(|c| c.campers.iter().map(String::as_str))
    }
}
