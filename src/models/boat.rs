//! Boat model.
//!
//! A boat is a unit of equipment of some craft type. Its capacity is the
//! number of camper seats it offers per session; a Beach "boat" stands for
//! the shore-based activity and usually carries a large capacity.

use serde::{Deserialize, Serialize};

use super::CraftType;

/// A boat (or shore activity) that can be crewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// Unique boat identifier.
    pub id: String,
    /// Craft category.
    pub craft_type: CraftType,
    /// Camper seats per session.
    pub capacity: u32,
    /// Whether the boat can be used on this camp.
    pub available: bool,
}

impl Boat {
    /// Creates an available boat with no camper seats.
    pub fn new(id: impl Into<String>, craft_type: CraftType) -> Self {
        Self {
            id: id.into(),
            craft_type,
            capacity: 0,
            available: true,
        }
    }

    /// Sets the camper capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}
