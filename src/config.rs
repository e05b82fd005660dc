//! Allocation configuration.
//!
//! The crew-formation priority list, the number of camper sessions per
//! time slot and the tie-break seed. The value is plain data: callers
//! deserialize it from whatever source they like.

use serde::{Deserialize, Serialize};

use crate::models::CraftType;

/// How many crews of one craft type to form per time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewTarget {
    /// Craft type to crew.
    pub craft_type: CraftType,
    /// Upper bound on crews. `None` = as many as boats and leaders allow.
    #[serde(default)]
    pub max_crews: Option<usize>,
}

impl CrewTarget {
    /// Target with an upper bound.
    pub fn at_most(craft_type: CraftType, max_crews: usize) -> Self {
        Self {
            craft_type,
            max_crews: Some(max_crews),
        }
    }

    /// Target without an upper bound.
    pub fn unbounded(craft_type: CraftType) -> Self {
        Self {
            craft_type,
            max_crews: None,
        }
    }

    /// Whether another crew may be formed after `formed` crews.
    #[inline]
    pub fn wants_more(&self, formed: usize) -> bool {
        self.max_crews.map_or(true, |max| formed < max)
    }
}

/// Allocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Craft types in crew-formation priority order.
    #[serde(default = "default_crew_targets")]
    pub crew_targets: Vec<CrewTarget>,
    /// Camper sessions per time slot.
    #[serde(default = "default_sessions_per_slot")]
    pub sessions_per_slot: u32,
    /// Tie-break seed. `None` = OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Rescue Boat ≤ 2, Race Control ≤ 1, then Vagabond, Cat and Beach unbounded.
pub fn default_crew_targets() -> Vec<CrewTarget> {
    vec![
        CrewTarget::at_most(CraftType::RescueBoat, 2),
        CrewTarget::at_most(CraftType::RaceControl, 1),
        CrewTarget::unbounded(CraftType::Vagabond),
        CrewTarget::unbounded(CraftType::Cat),
        CrewTarget::unbounded(CraftType::Beach),
    ]
}

fn default_sessions_per_slot() -> u32 {
    3
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            crew_targets: default_crew_targets(),
            sessions_per_slot: default_sessions_per_slot(),
            seed: None,
        }
    }
}

impl AllocationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the crew-formation priority list.
    pub fn with_crew_targets(mut self, targets: Vec<CrewTarget>) -> Self {
        self.crew_targets = targets;
        self
    }

    /// Sets the number of camper sessions per time slot.
    pub fn with_sessions_per_slot(mut self, sessions: u32) -> Self {
        self.sessions_per_slot = sessions;
        self
    }
}
