//! Camp: the top-level scheduler.
//!
//! # Algorithm
//!
//! 1. Compute camp-wide availability once (leaders need availability and
//!    at least one qualification; boats and campers need availability).
//! 2. Seed the balance ledger with zero turns for every available person
//!    on every boat type in the input.
//! 3. For each schedule entry, in order, build one [`Allocation`],
//!    threading the same ledger through all of them.
//!
//! No slot is revisited. A slot that comes up short (too few leaders,
//! boats or campers) is kept as is; only an inconsistent ledger lookup
//! aborts the run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::allocation::{Allocation, Availability};
use crate::config::AllocationConfig;
use crate::error::{AllocationError, AllocationResult};
use crate::ledger::BalanceLedger;
use crate::models::{CraftType, Roster, TimeSlot};
use crate::report::CampSummary;
use crate::validation::validate_roster;

/// A validated camp, ready to be planned.
///
/// # Example
///
/// ```
/// use sail_roster::camp::Camp;
/// use sail_roster::config::AllocationConfig;
/// use sail_roster::models::{Boat, Camper, CraftType, Leader, Qualification, Roster, ScheduleEntry, TimeSlot};
///
/// let roster = Roster::new()
///     .with_leader(Leader::new("Ann").with_qualification(Qualification::SkippersTicket))
///     .with_leader(Leader::new("Ben").with_qualification(Qualification::Cat))
///     .with_camper(Camper::new("Cal", "Red"))
///     .with_camper(Camper::new("Dot", "Red"))
///     .with_boat(Boat::new("RB1", CraftType::RescueBoat).with_capacity(1))
///     .with_boat(Boat::new("Cat1", CraftType::Cat).with_capacity(2))
///     .with_entry(ScheduleEntry::new(TimeSlot::new("Mon", "AM")));
///
/// let camp = Camp::new(roster, AllocationConfig::new().with_seed(7)).unwrap();
/// let plan = camp.plan_seeded().unwrap();
///
/// assert_eq!(plan.allocations.len(), 1);
/// assert_eq!(plan.allocations[0].crews.len(), 2);
/// assert_eq!(plan.ledger.turns_for("Ann", &CraftType::RescueBoat), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct Camp {
    roster: Roster,
    config: AllocationConfig,
    availability: Availability,
    duty_groups: Vec<String>,
    craft_types: Vec<CraftType>,
}

/// Result of planning a camp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampPlan {
    /// One allocation per schedule entry, in schedule order.
    pub allocations: Vec<Allocation>,
    /// Final turn counts for every available leader and camper.
    pub ledger: BalanceLedger,
    /// Leader ids in the ledger.
    pub leader_ids: Vec<String>,
    /// Camper ids in the ledger.
    pub camper_ids: Vec<String>,
}

impl Camp {
    /// Validates the roster and computes camp-wide availability.
    pub fn new(roster: Roster, config: AllocationConfig) -> AllocationResult<Self> {
        validate_roster(&roster).map_err(AllocationError::InvalidRoster)?;

        let availability = Availability {
            leaders: roster
                .leaders
                .iter()
                .filter(|l| l.is_eligible())
                .cloned()
                .collect(),
            boats: roster.boats.iter().filter(|b| b.available).cloned().collect(),
            campers: roster.campers.iter().filter(|c| c.available).cloned().collect(),
        };

        let mut craft_types: Vec<CraftType> = Vec::new();
        for boat in &roster.boats {
            if !craft_types.contains(&boat.craft_type) {
                craft_types.push(boat.craft_type.clone());
            }
        }

        let duty_groups = roster.duty_groups();

        Ok(Self {
            roster,
            config,
            availability,
            duty_groups,
            craft_types,
        })
    }

    /// Plans every schedule entry with an injected tie-break generator.
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> AllocationResult<CampPlan> {
        let mut ledger = self.initial_ledger();
        let mut allocations = Vec::with_capacity(self.roster.schedule.len());

        for entry in &self.roster.schedule {
            allocations.push(Allocation::build(
                entry,
                &self.duty_groups,
                &self.availability,
                &self.config,
                &mut ledger,
                rng,
            )?);
        }

        info!(
            slots = allocations.len(),
            leaders = self.availability.leaders.len(),
            campers = self.availability.campers.len(),
            "camp planned"
        );

        Ok(CampPlan {
            allocations,
            ledger,
            leader_ids: self.availability.leaders.iter().map(|l| l.id.clone()).collect(),
            camper_ids: self.availability.campers.iter().map(|c| c.id.clone()).collect(),
        })
    }

    /// Plans with a generator seeded from the config (OS entropy if unset).
    pub fn plan_seeded(&self) -> AllocationResult<CampPlan> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.plan(&mut rng)
    }

    /// Zero-turn ledger for every available person and boat type.
    pub fn initial_ledger(&self) -> BalanceLedger {
        let persons = self
            .availability
            .leaders
            .iter()
            .map(|l| l.id.as_str())
            .chain(self.availability.campers.iter().map(|c| c.id.as_str()));
        BalanceLedger::new(persons, &self.craft_types)
    }

    /// Head counts of what the camp has to work with.
    pub fn summary(&self) -> CampSummary {
        CampSummary::from_availability(&self.availability)
    }

    /// Camp-wide availability snapshot.
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// All duty groups, in first-seen order.
    pub fn duty_groups(&self) -> &[String] {
        &self.duty_groups
    }

    /// Input roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Allocation settings.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }
}

impl CampPlan {
    /// Turn counts of leaders only.
    pub fn leader_turns(&self) -> BalanceLedger {
        self.ledger.subset(self.leader_ids.iter().map(String::as_str))
    }

    /// Turn counts of campers only.
    pub fn camper_turns(&self) -> BalanceLedger {
        self.ledger.subset(self.camper_ids.iter().map(String::as_str))
    }

    /// Allocation for a time slot.
    pub fn allocation(&self, slot: &TimeSlot) -> Option<&Allocation> {
        self.allocations.iter().find(|a| &a.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrewTarget;
    use crate::models::{Boat, Camper, Leader, Qualification, ScheduleEntry};
    use std::collections::HashSet;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new()
            .with_leader(
                Leader::new("Ann")
                    .with_qualification(Qualification::SkippersTicket)
                    .with_qualification(Qualification::Vagabond),
            )
            .with_leader(
                Leader::new("Ben")
                    .with_qualification(Qualification::SkippersTicket)
                    .with_qualification(Qualification::Cat),
            )
            .with_leader(Leader::new("Cid").with_qualification(Qualification::RaceControl))
            .with_leader(Leader::new("Dee").with_qualification(Qualification::Vagabond))
            .with_leader(
                Leader::new("Eve")
                    .with_qualification(Qualification::Cat)
                    .with_qualification(Qualification::Vagabond),
            )
            .with_leader(Leader::new("Fay").with_qualification(Qualification::Cat))
            .with_leader(Leader::new("Gus")) // no tickets, never sails
            .with_leader(
                Leader::new("Hal")
                    .with_qualification(Qualification::SkippersTicket)
                    .with_availability(false),
            )
            .with_boat(Boat::new("RB1", CraftType::RescueBoat).with_capacity(1))
            .with_boat(Boat::new("RB2", CraftType::RescueBoat).with_capacity(1))
            .with_boat(Boat::new("RC", CraftType::RaceControl).with_capacity(2))
            .with_boat(Boat::new("Vag1", CraftType::Vagabond).with_capacity(3))
            .with_boat(Boat::new("Vag2", CraftType::Vagabond).with_capacity(3))
            .with_boat(Boat::new("Cat1", CraftType::Cat).with_capacity(2))
            .with_boat(Boat::new("Cat2", CraftType::Cat).with_capacity(2).with_availability(false))
            .with_boat(Boat::new("Beach", CraftType::Beach).with_capacity(40));

        for i in 0..18 {
            let group = if i % 2 == 0 { "Red" } else { "Blue" };
            roster = roster.with_camper(Camper::new(format!("C{i:02}"), group));
        }
        roster = roster.with_camper(Camper::new("Sick", "Red").with_availability(false));

        for slot in ["Mon AM", "Mon PM", "Tue AM", "Tue PM", "Wed AM"] {
            roster = roster.with_entry(ScheduleEntry::parse(slot, None).unwrap());
        }
        roster
    }

    fn plan(seed: u64) -> CampPlan {
        Camp::new(sample_roster(), AllocationConfig::new().with_seed(seed))
            .unwrap()
            .plan_seeded()
            .unwrap()
    }

    #[test]
    fn test_availability_computed_once() {
        let camp = Camp::new(sample_roster(), AllocationConfig::default()).unwrap();
        let avail = camp.availability();
        let leaders: Vec<&str> = avail.leaders.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(leaders, vec!["Ann", "Ben", "Cid", "Dee", "Eve", "Fay"]);
        assert_eq!(avail.boats.len(), 7);
        assert_eq!(avail.campers.len(), 18);
        assert_eq!(camp.duty_groups(), &["Red".to_string(), "Blue".to_string()]);
    }

    #[test]
    fn test_initial_ledger_seeded() {
        let camp = Camp::new(sample_roster(), AllocationConfig::default()).unwrap();
        let ledger = camp.initial_ledger();
        assert_eq!(ledger.len(), 24);
        assert_eq!(ledger.craft_types().len(), 5);
        assert!(!ledger.contains("Gus"));
        assert!(!ledger.contains("Sick"));
        assert_eq!(ledger.turns_for("C00", &CraftType::Beach), Ok(0));
    }

    #[test]
    fn test_one_allocation_per_entry_in_order() {
        let plan = plan(1);
        let slots: Vec<String> = plan.allocations.iter().map(|a| a.slot.to_string()).collect();
        assert_eq!(slots, vec!["Mon AM", "Mon PM", "Tue AM", "Tue PM", "Wed AM"]);
        assert!(plan.allocation(&TimeSlot::new("Tue", "PM")).is_some());
        assert!(plan.allocation(&TimeSlot::new("Sun", "AM")).is_none());
    }

    #[test]
    fn test_pools_reset_every_slot() {
        let plan = plan(2);
        // Same leaders and boats are used in every slot
        let first: HashSet<&str> = plan.allocations[0]
            .crews
            .iter()
            .map(|c| c.boat.as_str())
            .collect();
        for a in &plan.allocations {
            let boats: HashSet<&str> = a.crews.iter().map(|c| c.boat.as_str()).collect();
            assert_eq!(boats, first);
            assert_eq!(a.crews.len(), 6);
        }
    }

    #[test]
    fn test_constraints_hold_everywhere() {
        let camp = Camp::new(sample_roster(), AllocationConfig::new().with_seed(5)).unwrap();
        let plan = camp.plan_seeded().unwrap();

        for a in &plan.allocations {
            let leaders: HashSet<&str> = a.crews.iter().map(|c| c.leader.as_str()).collect();
            let boats: HashSet<&str> = a.crews.iter().map(|c| c.boat.as_str()).collect();
            assert_eq!(leaders.len(), a.crews.len());
            assert_eq!(boats.len(), a.crews.len());

            for crew in &a.crews {
                let leader = camp
                    .roster()
                    .leaders
                    .iter()
                    .find(|l| l.id == crew.leader)
                    .unwrap();
                assert!(leader.qualifies_for(&crew.craft_type));
            }

            for session in &a.sessions {
                for (seating, crew) in session.crews.iter().zip(&a.crews) {
                    assert!(seating.campers.len() <= crew.capacity as usize);
                }
                let seated: Vec<&str> = session.seated_campers().collect();
                let unique: HashSet<&str> = seated.iter().copied().collect();
                assert_eq!(seated.len(), unique.len());
            }
        }
    }

    #[test]
    fn test_same_seed_same_ledger() {
        let a = plan(99);
        let b = plan(99);
        assert_eq!(a.ledger, b.ledger);
        assert_eq!(a.allocations, b.allocations);
    }

    #[test]
    fn test_turn_views_split() {
        let plan = plan(4);
        let leaders = plan.leader_turns();
        let campers = plan.camper_turns();
        assert_eq!(leaders.len(), 6);
        assert_eq!(campers.len(), 18);
        assert!(leaders.contains("Ann"));
        assert!(!leaders.contains("C00"));
        // 5 slots × 3 sessions, every leader sails every session
        for id in &plan.leader_ids {
            assert_eq!(leaders.total_turns(id), Some(15));
        }
    }

    #[test]
    fn test_invalid_roster_rejected() {
        let roster = sample_roster().with_camper(Camper::new("Ann", "Red"));
        let err = Camp::new(roster, AllocationConfig::default()).unwrap_err();
        assert!(matches!(err, AllocationError::InvalidRoster(ref errors) if !errors.is_empty()));
    }

    #[test]
    fn test_empty_schedule() {
        let mut roster = sample_roster();
        roster.schedule.clear();
        let plan = Camp::new(roster, AllocationConfig::new().with_seed(0))
            .unwrap()
            .plan_seeded()
            .unwrap();
        assert!(plan.allocations.is_empty());
        assert_eq!(plan.ledger.total_turns("Ann"), Some(0));
    }

    #[test]
    fn test_custom_targets_and_session_count() {
        let kayak = CraftType::from("Kayak");
        let roster = Roster::new()
            .with_leader(Leader::new("A").with_qualification(Qualification::Cat))
            .with_leader(Leader::new("B").with_qualification(Qualification::Vagabond))
            .with_boat(Boat::new("K1", kayak.clone()).with_capacity(1))
            .with_boat(Boat::new("Cat1", CraftType::Cat).with_capacity(2))
            .with_camper(Camper::new("C1", "Red"))
            .with_camper(Camper::new("C2", "Red"))
            .with_camper(Camper::new("C3", "Blue"))
            .with_entry(ScheduleEntry::parse("Mon AM", None).unwrap())
            .with_entry(ScheduleEntry::parse("Mon PM", None).unwrap());

        for seed in 0..8 {
            let config = AllocationConfig::new()
                .with_seed(seed)
                .with_sessions_per_slot(2)
                .with_crew_targets(vec![
                    CrewTarget::unbounded(kayak.clone()),
                    CrewTarget::at_most(CraftType::Cat, 1),
                ]);
            let plan = Camp::new(roster.clone(), config).unwrap().plan_seeded().unwrap();

            let mut kayak_leaders = Vec::new();
            for a in &plan.allocations {
                assert_eq!(a.sessions.len(), 2);

                // Kayak is filled first and needs no ticket, so it can take
                // the only Cat skipper and leave Cat1 ashore
                let crews: Vec<(&str, &str)> = a
                    .crews
                    .iter()
                    .map(|c| (c.leader.as_str(), c.boat.as_str()))
                    .collect();
                match crews[0] {
                    ("A", "K1") => assert_eq!(crews, [("A", "K1")]),
                    ("B", "K1") => assert_eq!(crews, [("B", "K1"), ("A", "Cat1")]),
                    other => panic!("unexpected first crew {other:?}"),
                }
                kayak_leaders.push(crews[0].0);
            }

            // Least turns hands the Kayak to the other leader in the second slot
            kayak_leaders.sort_unstable();
            assert_eq!(kayak_leaders, ["A", "B"]);

            let leaders = plan.leader_turns();
            assert_eq!(leaders.turns_for("A", &kayak), Ok(2));
            assert_eq!(leaders.turns_for("B", &kayak), Ok(2));
            assert_eq!(leaders.turns_for("A", &CraftType::Cat), Ok(2));
            assert_eq!(leaders.turns_for("B", &CraftType::Cat), Ok(0));
        }
    }
}
