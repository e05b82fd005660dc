//! Balance ledger: cumulative turn counts per person and craft type.
//!
//! Every selection of a leader or camper reads this ledger to find the
//! least-served candidates, and every session writes back what it handed
//! out. The ledger lives for the whole schedule and counts only grow.
//!
//! # Invariant
//! Every seeded person has an entry for every seeded craft type. Asking
//! for anything else is an inconsistent roster, reported as
//! [`AllocationError::UnknownLedgerEntry`] instead of being defaulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AllocationError, AllocationResult};
use crate::models::CraftType;

/// One logical assignment: a person took a turn on a craft type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Leader or camper id.
    pub person: String,
    /// Craft type sailed.
    pub craft_type: CraftType,
}

impl TurnEntry {
    /// Creates a turn entry.
    pub fn new(person: impl Into<String>, craft_type: CraftType) -> Self {
        Self {
            person: person.into(),
            craft_type,
        }
    }
}

/// Person × craft type turn counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceLedger {
    /// Column order (craft types as first seen in the boat table).
    craft_types: Vec<CraftType>,
    /// person id → craft type → turns.
    turns: BTreeMap<String, BTreeMap<CraftType, u32>>,
}

impl BalanceLedger {
    /// Seeds a ledger with a zero count for every person × craft type pair.
    ///
    /// Duplicate craft types are collapsed, keeping first-seen order.
    pub fn new<P, S>(persons: P, craft_types: &[CraftType]) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<CraftType> = Vec::with_capacity(craft_types.len());
        for craft in craft_types {
            if !columns.contains(craft) {
                columns.push(craft.clone());
            }
        }

        let zeroes: BTreeMap<CraftType, u32> = columns.iter().map(|c| (c.clone(), 0)).collect();
        let turns = persons
            .into_iter()
            .map(|p| (p.into(), zeroes.clone()))
            .collect();

        Self {
            craft_types: columns,
            turns,
        }
    }

    /// Turns a person has had on a craft type.
    pub fn turns_for(&self, person: &str, craft_type: &CraftType) -> AllocationResult<u32> {
        self.turns
            .get(person)
            .and_then(|row| row.get(craft_type))
            .copied()
            .ok_or_else(|| unknown_entry(person, craft_type))
    }

    /// Adds one turn. Call exactly once per logical assignment.
    pub fn record_turn(&mut self, person: &str, craft_type: &CraftType) -> AllocationResult<()> {
        let count = self
            .turns
            .get_mut(person)
            .and_then(|row| row.get_mut(craft_type))
            .ok_or_else(|| unknown_entry(person, craft_type))?;
        *count += 1;
        Ok(())
    }

    /// Applies a batch of turn entries in order.
    pub fn record_all<'a, I>(&mut self, entries: I) -> AllocationResult<()>
    where
        I: IntoIterator<Item = &'a TurnEntry>,
    {
        for entry in entries {
            self.record_turn(&entry.person, &entry.craft_type)?;
        }
        Ok(())
    }

    /// Craft type columns, in seeding order.
    pub fn craft_types(&self) -> &[CraftType] {
        &self.craft_types
    }

    /// Person ids, sorted.
    pub fn persons(&self) -> impl Iterator<Item = &str> {
        self.turns.keys().map(String::as_str)
    }

    /// Whether the person has a ledger row.
    pub fn contains(&self, person: &str) -> bool {
        self.turns.contains_key(person)
    }

    /// Full row for a person.
    pub fn row(&self, person: &str) -> Option<&BTreeMap<CraftType, u32>> {
        self.turns.get(person)
    }

    /// Total turns across all craft types for a person.
    pub fn total_turns(&self, person: &str) -> Option<u32> {
        self.row(person).map(|row| row.values().sum())
    }

    /// Copy of the ledger restricted to the given persons.
    ///
    /// Ids without a row are ignored.
    pub fn subset<'a, I>(&self, persons: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let turns = persons
            .into_iter()
            .filter_map(|p| self.row(p).map(|row| (p.to_string(), row.clone())))
            .collect();
        Self {
            craft_types: self.craft_types.clone(),
            turns,
        }
    }

    /// Number of persons tracked.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no persons are tracked.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

fn unknown_entry(person: &str, craft_type: &CraftType) -> AllocationError {
    AllocationError::UnknownLedgerEntry {
        person: person.to_string(),
        craft_type: craft_type.clone(),
    }
}
