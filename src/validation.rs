//! Input validation for a camp roster.
//!
//! Checks structural integrity of the input tables before any
//! allocation runs. Detects:
//! - Duplicate leader, camper or boat IDs
//! - A leader and a camper sharing an ID (the balance ledger is keyed by ID)
//! - Time slots scheduled more than once
//!
//! All problems are collected, not just the first.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Roster;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two records of the same table share an ID.
    DuplicateId,
    /// A leader and a camper share an ID.
    AmbiguousPerson,
    /// The same time slot appears twice in the schedule.
    DuplicateTimeSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables of a camp.
///
/// Checks:
/// 1. No duplicate leader IDs
/// 2. No duplicate camper IDs
/// 3. No duplicate boat IDs
/// 4. No ID used by both a leader and a camper
/// 5. No time slot scheduled twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let leader_ids = collect_unique(
        roster.leaders.iter().map(|l| l.id.as_str()),
        "leader",
        &mut errors,
    );
    let camper_ids = collect_unique(
        roster.campers.iter().map(|c| c.id.as_str()),
        "camper",
        &mut errors,
    );
    collect_unique(
        roster.boats.iter().map(|b| b.id.as_str()),
        "boat",
        &mut errors,
    );

    let mut shared: Vec<&str> = leader_ids.intersection(&camper_ids).copied().collect();
    shared.sort_unstable();
    for id in shared {
        errors.push(ValidationError::new(
            ValidationErrorKind::AmbiguousPerson,
            format!("ID '{id}' is used by both a leader and a camper"),
        ));
    }

    let mut slots = HashSet::new();
    for entry in &roster.schedule {
        if !slots.insert(&entry.slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTimeSlot,
                format!("Time slot '{}' is scheduled more than once", entry.slot),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    table: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {table} ID: {id}"),
            ));
        }
    }
    seen
}
