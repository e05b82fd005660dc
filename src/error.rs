//! Allocation error types.

use thiserror::Error;

use crate::models::CraftType;
use crate::validation::ValidationError;

/// Errors that can occur while building a roster.
///
/// The two shortage variants are recovered by the loop that hit them;
/// everything else aborts the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("no boat of type '{0}' left in the pool")]
    NoBoatAvailable(CraftType),

    #[error("no candidate for '{0}' left in the pool")]
    NoCandidateAvailable(CraftType),

    #[error("balance ledger has no entry for '{person}' in '{craft_type}'")]
    UnknownLedgerEntry {
        person: String,
        craft_type: CraftType,
    },

    #[error("invalid time slot '{0}': expected '<day> <time>'")]
    InvalidTimeSlot(String),

    #[error("roster failed validation with {} problem(s)", .0.len())]
    InvalidRoster(Vec<ValidationError>),
}

impl AllocationError {
    /// Whether this is a pool shortage (recoverable: the slot runs short).
    pub fn is_shortage(&self) -> bool {
        matches!(
            self,
            AllocationError::NoBoatAvailable(_) | AllocationError::NoCandidateAvailable(_)
        )
    }
}

pub type AllocationResult<T> = Result<T, AllocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortage_classification() {
        assert!(AllocationError::NoBoatAvailable(CraftType::Cat).is_shortage());
        assert!(AllocationError::NoCandidateAvailable(CraftType::Beach).is_shortage());
        assert!(!AllocationError::InvalidTimeSlot("x".into()).is_shortage());
        assert!(!AllocationError::UnknownLedgerEntry {
            person: "Ann".into(),
            craft_type: CraftType::Cat,
        }
        .is_shortage());
    }

    #[test]
    fn test_messages() {
        let e = AllocationError::NoBoatAvailable(CraftType::RescueBoat);
        assert_eq!(e.to_string(), "no boat of type 'Rescue Boat' left in the pool");

        let e = AllocationError::UnknownLedgerEntry {
            person: "Zed".into(),
            craft_type: CraftType::Vagabond,
        };
        assert_eq!(
            e.to_string(),
            "balance ledger has no entry for 'Zed' in 'Vagabond'"
        );
    }
}
