//! Roster domain models.
//!
//! Passive value types for the allocation inputs. None of them carry
//! behavior beyond small queries and builders.
//!
//! # Domain Mappings
//!
//! | sail-roster | Sailing camp | Generic rostering |
//! |-------------|--------------|-------------------|
//! | Leader | Skipper | Qualified staff |
//! | Camper | Crew | Participant |
//! | Boat | Dinghy, RIB, beach | Equipment / station |
//! | CraftType | Boat class | Role category |
//! | ScheduleEntry | Sailing period | Shift |

mod boat;
mod craft;
mod person;
mod roster;
mod schedule;

pub use boat::Boat;
pub use craft::{CraftType, Qualification};
pub use person::{Camper, Leader, Qualifications};
pub use roster::Roster;
pub use schedule::{ScheduleEntry, TimeSlot};
