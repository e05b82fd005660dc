//! Schedule model.
//!
//! A schedule is an ordered list of time slots. Each slot gets one full
//! allocation: crew formation followed by the camper sessions. A slot may
//! name the duty groups it is meant for; an empty filter means everyone.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AllocationError, AllocationResult};

/// A scheduled period, identified by day and time (e.g. "Mon AM").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day label.
    pub day: String,
    /// Time-of-day label.
    pub time: String,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }

    /// Parses a "<day> <time>" identifier.
    ///
    /// The first whitespace-separated token is the day; the trimmed
    /// remainder is the time.
    pub fn parse(raw: &str) -> AllocationResult<Self> {
        let trimmed = raw.trim();
        let (day, time) = trimmed
            .split_once(char::is_whitespace)
            .map(|(d, t)| (d, t.trim()))
            .ok_or_else(|| AllocationError::InvalidTimeSlot(raw.to_string()))?;
        if day.is_empty() || time.is_empty() {
            return Err(AllocationError::InvalidTimeSlot(raw.to_string()));
        }
        Ok(Self::new(day, time))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// One row of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// When the allocation happens.
    pub slot: TimeSlot,
    /// Duty groups in scope. `None` = all duty groups.
    #[serde(default)]
    pub duty_groups: Option<Vec<String>>,
}

impl ScheduleEntry {
    /// Creates an entry that applies to every duty group.
    pub fn new(slot: TimeSlot) -> Self {
        Self {
            slot,
            duty_groups: None,
        }
    }

    /// Restricts the entry to the given duty groups.
    pub fn with_duty_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.duty_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Builds an entry from raw table cells.
    ///
    /// `duty_filter` is a comma-separated list; items are trimmed and
    /// empty items dropped. A missing or blank filter applies to all groups.
    pub fn parse(slot: &str, duty_filter: Option<&str>) -> AllocationResult<Self> {
        let slot = TimeSlot::parse(slot)?;
        let groups: Vec<String> = duty_filter
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            slot,
            duty_groups: if groups.is_empty() { None } else { Some(groups) },
        })
    }

    /// Resolves the duty-group scope against the groups known to the camp.
    pub fn resolve_duty_groups(&self, known: &[String]) -> Vec<String> {
        match &self.duty_groups {
            Some(groups) => groups.clone(),
            None => known.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_parse() {
        let s = TimeSlot::parse("Mon AM").unwrap();
        assert_eq!(s.day, "Mon");
        assert_eq!(s.time, "AM");
        assert_eq!(s.to_string(), "Mon AM");

        let s = TimeSlot::parse("  Tue   10:00 - 12:00 ").unwrap();
        assert_eq!(s.day, "Tue");
        assert_eq!(s.time, "10:00 - 12:00");
    }

    #[test]
    fn test_time_slot_parse_rejects_single_token() {
        assert_eq!(
            TimeSlot::parse("Monday"),
            Err(AllocationError::InvalidTimeSlot("Monday".into()))
        );
        assert!(TimeSlot::parse("   ").is_err());
    }

    #[test]
    fn test_entry_parse_duty_filter() {
        let e = ScheduleEntry::parse("Mon PM", Some(" Red, Blue ,,")).unwrap();
        assert_eq!(e.duty_groups, Some(vec!["Red".to_string(), "Blue".to_string()]));

        let e = ScheduleEntry::parse("Mon PM", Some("  ")).unwrap();
        assert_eq!(e.duty_groups, None);

        let e = ScheduleEntry::parse("Mon PM", None).unwrap();
        assert_eq!(e.duty_groups, None);
    }

    #[test]
    fn test_resolve_duty_groups() {
        let known = vec!["Red".to_string(), "Blue".to_string(), "Green".to_string()];

        let all = ScheduleEntry::new(TimeSlot::new("Wed", "AM"));
        assert_eq!(all.resolve_duty_groups(&known), known);

        let some = ScheduleEntry::new(TimeSlot::new("Wed", "PM")).with_duty_groups(["Green"]);
        assert_eq!(some.resolve_duty_groups(&known), vec!["Green".to_string()]);
    }
}
