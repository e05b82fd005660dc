//! Roster: the four input tables.
//!
//! The roster is the in-memory form of whatever tabular source the caller
//! reads (spreadsheet, delimited file, database). Order matters: boats are
//! taken first-fit in input order and the schedule runs in input order.

use serde::{Deserialize, Serialize};

use super::{Boat, Camper, Leader, ScheduleEntry};

/// All input records for one camp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Camper table.
    #[serde(default)]
    pub campers: Vec<Camper>,
    /// Leader table.
    #[serde(default)]
    pub leaders: Vec<Leader>,
    /// Boat table.
    #[serde(default)]
    pub boats: Vec<Boat>,
    /// Schedule table.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a camper.
    pub fn with_camper(mut self, camper: Camper) -> Self {
        self.campers.push(camper);
        self
    }

    /// Adds a leader.
    pub fn with_leader(mut self, leader: Leader) -> Self {
        self.leaders.push(leader);
        self
    }

    /// Adds a boat.
    pub fn with_boat(mut self, boat: Boat) -> Self {
        self.boats.push(boat);
        self
    }

    /// Adds a schedule entry.
    pub fn with_entry(mut self, entry: ScheduleEntry) -> Self {
        self.schedule.push(entry);
        self
    }

    /// Distinct duty groups over all campers, in first-seen order.
    pub fn duty_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for camper in &self.campers {
            if !groups.contains(&camper.duty_group) {
                groups.push(camper.duty_group.clone());
            }
        }
        groups
    }
}
