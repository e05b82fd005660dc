//! Fairness-balanced crew rostering for multi-session activity camps.
//!
//! Assigns leaders and boats to each time slot of a schedule, then seats
//! campers on those crews for each session of the slot, always preferring
//! whoever has had the fewest turns on that kind of craft so far.
//!
//! # Modules
//!
//! - **`models`**: Input records: `Leader`, `Camper`, `Boat`, `CraftType`,
//!   `ScheduleEntry`, `Roster`
//! - **`ledger`**: `BalanceLedger`, the turn counts that drive selection
//! - **`pool`**: `AvailabilityPool`, scoped without-replacement selection
//! - **`crew`**: Leader/boat pairing for one time slot
//! - **`session`**: Camper seating for one session
//! - **`allocation`**: One time slot (crews + sessions)
//! - **`camp`**: The whole schedule
//! - **`config`**: Crew targets, sessions per slot, tie-break seed
//! - **`validation`**: Input integrity checks (duplicate IDs, ID collisions)
//! - **`report`**: Head counts and per-craft turn spread
//!
//! # Algorithm
//!
//! Greedy first-fit with a least-turns tie-break. It is not an optimal
//! assignment solver; it aims for an even spread of turns over the whole
//! schedule. Randomness comes only from the generator passed to
//! [`camp::Camp::plan`], so a fixed seed reproduces a plan exactly.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sail_roster::camp::Camp;
//! use sail_roster::config::AllocationConfig;
//! use sail_roster::models::{Boat, Camper, CraftType, Leader, Qualification, Roster, ScheduleEntry};
//!
//! let roster = Roster::new()
//!     .with_leader(Leader::new("Ann").with_qualification(Qualification::Cat))
//!     .with_camper(Camper::new("Cal", "Red"))
//!     .with_boat(Boat::new("Cat1", CraftType::Cat).with_capacity(2))
//!     .with_entry(ScheduleEntry::parse("Mon AM", None).unwrap());
//!
//! let camp = Camp::new(roster, AllocationConfig::default()).unwrap();
//! let plan = camp.plan(&mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(plan.allocations[0].campers(1, 0), ["Cal".to_string()]);
//! ```

pub mod allocation;
pub mod camp;
pub mod config;
pub mod crew;
pub mod error;
pub mod ledger;
pub mod models;
pub mod pool;
pub mod report;
pub mod session;
pub mod validation;

pub use error::{AllocationError, AllocationResult};
