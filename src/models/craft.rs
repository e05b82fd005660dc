//! Craft type model.
//!
//! A craft type is the equipment-and-role category a boat belongs to.
//! It decides which leader qualification is needed to skipper the boat
//! and is the key dimension of turn accounting in the balance ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a boat (and of the role sailed on it).
///
/// Serialized as its display string, so input tables can use the same
/// text that appears on the printed roster ("Rescue Boat", "Cat", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CraftType {
    /// Powered safety boat; the skipper needs a skipper's ticket.
    RescueBoat,
    /// Race committee boat.
    RaceControl,
    /// Vagabond dinghy.
    Vagabond,
    /// Catamaran.
    Cat,
    /// Shore-based catch-all activity. Needs no qualification.
    Beach,
    /// Any other boat type found in the input.
    Custom(String),
}

/// A leader competency that unlocks one or more craft types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    /// Powerboat skipper's ticket.
    SkippersTicket,
    /// Competent to run race control.
    RaceControl,
    /// Competent to sail a Vagabond.
    Vagabond,
    /// Competent to sail a catamaran.
    Cat,
}

impl CraftType {
    /// All recognized qualifications, in crew-formation priority order.
    pub const QUALIFICATIONS: [Qualification; 4] = [
        Qualification::SkippersTicket,
        Qualification::RaceControl,
        Qualification::Vagabond,
        Qualification::Cat,
    ];

    /// The qualification a leader must hold to skipper this craft.
    ///
    /// `None` means general availability is enough.
    pub fn required_qualification(&self) -> Option<Qualification> {
        match self {
            CraftType::RescueBoat => Some(Qualification::SkippersTicket),
            CraftType::RaceControl => Some(Qualification::RaceControl),
            CraftType::Vagabond => Some(Qualification::Vagabond),
            CraftType::Cat => Some(Qualification::Cat),
            CraftType::Beach | CraftType::Custom(_) => None,
        }
    }

    /// Whether this is the shore-based catch-all.
    #[inline]
    pub fn is_beach(&self) -> bool {
        matches!(self, CraftType::Beach)
    }

    /// Display label.
    pub fn as_str(&self) -> &str {
        match self {
            CraftType::RescueBoat => "Rescue Boat",
            CraftType::RaceControl => "Race Control",
            CraftType::Vagabond => "Vagabond",
            CraftType::Cat => "Cat",
            CraftType::Beach => "Beach",
            CraftType::Custom(name) => name,
        }
    }
}

impl From<&str> for CraftType {
    fn from(label: &str) -> Self {
        match label {
            "Rescue Boat" => CraftType::RescueBoat,
            "Race Control" => CraftType::RaceControl,
            "Vagabond" => CraftType::Vagabond,
            "Cat" => CraftType::Cat,
            "Beach" => CraftType::Beach,
            other => CraftType::Custom(other.to_string()),
        }
    }
}

impl From<String> for CraftType {
    fn from(label: String) -> Self {
        match CraftType::from(label.as_str()) {
            CraftType::Custom(_) => CraftType::Custom(label),
            known => known,
        }
    }
}

impl From<CraftType> for String {
    fn from(craft: CraftType) -> Self {
        match craft {
            CraftType::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
