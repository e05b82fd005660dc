//! Availability pools: scoped, consumable candidate sets.
//!
//! A pool is an independent copy of a camp-wide availability snapshot.
//! Taking a member removes it, so nobody is handed out twice within the
//! pool's scope (one time slot for leaders and boats, one session for
//! campers). Dropping the pool and building a new one from the snapshot
//! is the reset; the snapshot itself is never touched.
//!
//! # Selection
//!
//! - Boats: first-fit by craft type, in input order.
//! - People: least turns on the requested craft type among qualified
//!   members, ties broken uniformly at random.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::{AllocationError, AllocationResult};
use crate::ledger::BalanceLedger;
use crate::models::{Boat, Camper, CraftType, Leader};

/// Something that can be selected out of a pool by least turns.
pub trait PoolMember: Clone {
    /// Ledger key.
    fn id(&self) -> &str;

    /// Whether the member may fill a seat of the given craft type.
    fn qualifies_for(&self, _craft_type: &CraftType) -> bool {
        true
    }
}

impl PoolMember for Leader {
    fn id(&self) -> &str {
        &self.id
    }

    fn qualifies_for(&self, craft_type: &CraftType) -> bool {
        Leader::qualifies_for(self, craft_type)
    }
}

impl PoolMember for Camper {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A without-replacement selection over a roster subset.
#[derive(Debug, Clone)]
pub struct AvailabilityPool<T> {
    members: Vec<T>,
}

impl<T: Clone> AvailabilityPool<T> {
    /// Builds a fresh pool from a snapshot, leaving the snapshot intact.
    pub fn from_snapshot(snapshot: &[T]) -> Self {
        Self {
            members: snapshot.to_vec(),
        }
    }

    /// Remaining members, in input order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Number of remaining members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the pool is exhausted.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl AvailabilityPool<Boat> {
    /// Takes the first remaining boat of a craft type.
    pub fn take_first_of_category(&mut self, craft_type: &CraftType) -> AllocationResult<Boat> {
        let idx = self
            .members
            .iter()
            .position(|b| &b.craft_type == craft_type)
            .ok_or_else(|| AllocationError::NoBoatAvailable(craft_type.clone()))?;
        Ok(self.members.remove(idx))
    }
}

impl<T: PoolMember> AvailabilityPool<T> {
    /// Takes a qualified member with the fewest turns on `craft_type`.
    ///
    /// # Algorithm
    /// 1. Keep members qualified for the craft type.
    /// 2. Look up each one's turn count in the ledger.
    /// 3. Draw uniformly among those at the minimum count.
    /// 4. Remove the drawn member from the pool.
    pub fn take_qualified_least_turns<R: Rng + ?Sized>(
        &mut self,
        craft_type: &CraftType,
        ledger: &BalanceLedger,
        rng: &mut R,
    ) -> AllocationResult<T> {
        let mut scored: Vec<(usize, u32)> = Vec::new();
        for (idx, member) in self.members.iter().enumerate() {
            if member.qualifies_for(craft_type) {
                scored.push((idx, ledger.turns_for(member.id(), craft_type)?));
            }
        }

        let least = scored
            .iter()
            .map(|&(_, turns)| turns)
            .min()
            .ok_or_else(|| AllocationError::NoCandidateAvailable(craft_type.clone()))?;

        let tied: Vec<usize> = scored
            .iter()
            .filter(|&&(_, turns)| turns == least)
            .map(|&(idx, _)| idx)
            .collect();

        let &idx = tied
            .choose(rng)
            .ok_or_else(|| AllocationError::NoCandidateAvailable(craft_type.clone()))?;
        Ok(self.members.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Qualification;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_boats() -> Vec<Boat> {
        vec![
            Boat::new("RB1", CraftType::RescueBoat).with_capacity(1),
            Boat::new("Cat1", CraftType::Cat).with_capacity(2),
            Boat::new("RB2", CraftType::RescueBoat).with_capacity(1),
        ]
    }

    fn sample_campers() -> Vec<Camper> {
        ["C1", "C2", "C3", "C4"]
            .iter()
            .map(|id| Camper::new(*id, "Red"))
            .collect()
    }

    fn camper_ledger(campers: &[Camper]) -> BalanceLedger {
        BalanceLedger::new(
            campers.iter().map(|c| c.id.as_str()),
            &[CraftType::Cat, CraftType::Beach],
        )
    }

    #[test]
    fn test_take_first_of_category_in_input_order() {
        let boats = sample_boats();
        let mut pool = AvailabilityPool::from_snapshot(&boats);

        assert_eq!(pool.take_first_of_category(&CraftType::RescueBoat).unwrap().id, "RB1");
        assert_eq!(pool.take_first_of_category(&CraftType::RescueBoat).unwrap().id, "RB2");
        assert_eq!(
            pool.take_first_of_category(&CraftType::RescueBoat),
            Err(AllocationError::NoBoatAvailable(CraftType::RescueBoat))
        );
        assert_eq!(pool.len(), 1);
        // Snapshot untouched
        assert_eq!(boats.len(), 3);
    }

    #[test]
    fn test_least_turns_is_preferred() {
        let campers = sample_campers();
        let mut ledger = camper_ledger(&campers);
        for id in ["C1", "C2", "C4"] {
            ledger.record_turn(id, &CraftType::Cat).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut pool = AvailabilityPool::from_snapshot(&campers);
            let picked = pool
                .take_qualified_least_turns(&CraftType::Cat, &ledger, &mut rng)
                .unwrap();
            assert_eq!(picked.id, "C3");
        }
    }

    #[test]
    fn test_high_turn_member_waits_until_others_exhausted() {
        let campers = sample_campers();
        let mut ledger = camper_ledger(&campers);
        ledger.record_turn("C2", &CraftType::Cat).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = AvailabilityPool::from_snapshot(&campers);
        let mut order = Vec::new();
        while let Ok(c) = pool.take_qualified_least_turns(&CraftType::Cat, &ledger, &mut rng) {
            order.push(c.id);
        }
        assert_eq!(order.len(), 4);
        assert_eq!(order.last().map(String::as_str), Some("C2"));
    }

    #[test]
    fn test_without_replacement() {
        let campers = sample_campers();
        let ledger = camper_ledger(&campers);
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = AvailabilityPool::from_snapshot(&campers);

        let mut seen = Vec::new();
        for _ in 0..4 {
            let c = pool
                .take_qualified_least_turns(&CraftType::Beach, &ledger, &mut rng)
                .unwrap();
            assert!(!seen.contains(&c.id));
            seen.push(c.id);
        }
        assert!(pool.is_empty());
        assert_eq!(
            pool.take_qualified_least_turns(&CraftType::Beach, &ledger, &mut rng)
                .unwrap_err(),
            AllocationError::NoCandidateAvailable(CraftType::Beach)
        );
    }

    #[test]
    fn test_leader_qualification_filter() {
        let leaders = vec![
            Leader::new("L1").with_qualification(Qualification::Cat),
            Leader::new("L2").with_qualification(Qualification::SkippersTicket),
            Leader::new("L3").with_qualification(Qualification::Vagabond),
        ];
        let ledger = BalanceLedger::new(
            leaders.iter().map(|l| l.id.as_str()),
            &[CraftType::RescueBoat, CraftType::Cat, CraftType::Beach],
        );
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = AvailabilityPool::from_snapshot(&leaders);

        let skipper = pool
            .take_qualified_least_turns(&CraftType::RescueBoat, &ledger, &mut rng)
            .unwrap();
        assert_eq!(skipper.id, "L2");
        assert!(pool
            .take_qualified_least_turns(&CraftType::RescueBoat, &ledger, &mut rng)
            .is_err());
        // Beach takes anyone left
        assert!(pool
            .take_qualified_least_turns(&CraftType::Beach, &ledger, &mut rng)
            .is_ok());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_unseeded_member_is_fatal() {
        let campers = sample_campers();
        let ledger = BalanceLedger::new(["C1"], &[CraftType::Cat]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = AvailabilityPool::from_snapshot(&campers);

        let err = pool
            .take_qualified_least_turns(&CraftType::Cat, &ledger, &mut rng)
            .unwrap_err();
        assert!(!err.is_shortage());
        // Nothing removed on a fatal lookup
        assert_eq!(pool.len(), 4);
    }
}
