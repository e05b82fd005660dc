//! Leader and camper records.
//!
//! Both are passive values supplied by the caller. A person's id is
//! also their key in the balance ledger, so ids must be unique across
//! leaders and campers alike.

use serde::{Deserialize, Serialize};

use super::{CraftType, Qualification};

/// Competency flags held by a leader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifications {
    /// Powerboat skipper's ticket (Rescue Boat).
    #[serde(default)]
    pub skippers_ticket: bool,
    /// Vagabond-competent.
    #[serde(default)]
    pub vagabond: bool,
    /// Catamaran-competent.
    #[serde(default)]
    pub cat: bool,
    /// Race-control-competent.
    #[serde(default)]
    pub race_control: bool,
}

impl Qualifications {
    /// Whether a given qualification is held.
    pub fn has(&self, qualification: Qualification) -> bool {
        match qualification {
            Qualification::SkippersTicket => self.skippers_ticket,
            Qualification::RaceControl => self.race_control,
            Qualification::Vagabond => self.vagabond,
            Qualification::Cat => self.cat,
        }
    }

    /// Sets a qualification flag.
    pub fn grant(&mut self, qualification: Qualification) {
        match qualification {
            Qualification::SkippersTicket => self.skippers_ticket = true,
            Qualification::RaceControl => self.race_control = true,
            Qualification::Vagabond => self.vagabond = true,
            Qualification::Cat => self.cat = true,
        }
    }

    /// Whether at least one recognized qualification is held.
    pub fn any(&self) -> bool {
        CraftType::QUALIFICATIONS.iter().any(|&q| self.has(q))
    }
}

/// A leader who can skipper boats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    /// Unique name or id.
    pub id: String,
    /// Whether the leader is on camp.
    pub available: bool,
    /// Competency flags.
    #[serde(default)]
    pub qualifications: Qualifications,
}

impl Leader {
    /// Creates an available leader with no qualifications.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            available: true,
            qualifications: Qualifications::default(),
        }
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Adds a qualification.
    pub fn with_qualification(mut self, qualification: Qualification) -> Self {
        self.qualifications.grant(qualification);
        self
    }

    /// Whether this leader may skipper a craft of the given type.
    pub fn qualifies_for(&self, craft_type: &CraftType) -> bool {
        craft_type
            .required_qualification()
            .map_or(true, |q| self.qualifications.has(q))
    }

    /// Whether the leader takes part in allocation at all:
    /// available and holding at least one qualification.
    pub fn is_eligible(&self) -> bool {
        self.available && self.qualifications.any()
    }
}

/// A camper who sails as crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camper {
    /// Unique name or id.
    pub id: String,
    /// Whether the camper is on camp.
    pub available: bool,
    /// Duty group tag.
    #[serde(default)]
    pub duty_group: String,
}

impl Camper {
    /// Creates an available camper.
    pub fn new(id: impl Into<String>, duty_group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            available: true,
            duty_group: duty_group.into(),
        }
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}
