//! Travel rules and gap validation.
//!
//! Consecutive meetings in a candidate schedule must leave enough time to
//! get from one to the next. The minimum acceptable gap depends on whether
//! the transition stays on one campus, and campus pairs with good transit
//! links can carry their own exception. A negative gap is an overlap and
//! is never acceptable.
//!
//! The rules are an explicit immutable value passed into each validation
//! call; there is no module-level state, so the generator stays pure and
//! testable in isolation.

use serde::{Deserialize, Serialize};

use crate::models::{MeetingInterval, Section};

/// A minimum-gap exception for one unordered campus pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusPairRule {
    pub campus_a: String,
    pub campus_b: String,
    pub min_minutes: i32,
}

impl CampusPairRule {
    /// Creates an exception for a campus pair.
    pub fn new(campus_a: impl Into<String>, campus_b: impl Into<String>, min_minutes: i32) -> Self {
        Self {
            campus_a: campus_a.into(),
            campus_b: campus_b.into(),
            min_minutes,
        }
    }

    /// Whether this rule covers the pair, in either direction.
    pub fn covers(&self, from: &str, to: &str) -> bool {
        (self.campus_a == from && self.campus_b == to)
            || (self.campus_a == to && self.campus_b == from)
    }
}

/// Minimum travel times between consecutive meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRules {
    /// Minimum gap within one campus (minutes).
    pub min_travel_time: i32,
    /// Minimum gap between different campuses (minutes).
    pub min_travel_time_between_campuses: i32,
    /// Campus pairs with their own minimum, overriding the cross-campus
    /// default.
    pub exceptions: Vec<CampusPairRule>,
}

impl TravelRules {
    /// Creates rules with no exceptions.
    pub fn new(min_travel_time: i32, min_travel_time_between_campuses: i32) -> Self {
        Self {
            min_travel_time,
            min_travel_time_between_campuses,
            exceptions: Vec::new(),
        }
    }

    /// Adds a campus-pair exception.
    pub fn with_exception(mut self, exception: CampusPairRule) -> Self {
        self.exceptions.push(exception);
        self
    }
}

impl Default for TravelRules {
    /// The registration-system rules: 20 minutes on one campus, 40 between
    /// campuses, with two well-connected pairs allowed 20.
    fn default() -> Self {
        Self::new(20, 40)
            .with_exception(CampusPairRule::new("COLLEGE AVENUE", "DOWNTOWN NB", 20))
            .with_exception(CampusPairRule::new("BUSCH", "LIVINGSTON", 20))
    }
}

/// Outcome of checking one transition between consecutive meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelCheck {
    /// The gap satisfies the applicable rule.
    Valid,
    /// Overlap or too-short transition; the whole candidate is rejected.
    Invalid,
    /// A side has no concrete time, so the gap is undefined and the rule
    /// is not enforced.
    Skipped,
}

/// Checks one transition against the rules.
///
/// `gap` is `next.start - prev.end`, or `None` when either side has no
/// concrete meeting time. Rule order: overlap, same campus, campus-pair
/// exception, cross-campus default.
pub fn check_leg(
    from_campus: &str,
    to_campus: &str,
    gap: Option<i32>,
    rules: &TravelRules,
) -> TravelCheck {
    let gap = match gap {
        Some(gap) => gap,
        None => return TravelCheck::Skipped,
    };
    if gap < 0 {
        return TravelCheck::Invalid;
    }
    let minimum = if from_campus == to_campus {
        rules.min_travel_time
    } else {
        rules
            .exceptions
            .iter()
            .find(|e| e.covers(from_campus, to_campus))
            .map_or(rules.min_travel_time_between_campuses, |e| e.min_minutes)
    };
    if gap >= minimum {
        TravelCheck::Valid
    } else {
        TravelCheck::Invalid
    }
}

/// Validates all transitions across a candidate set of sections.
///
/// Flattens every section's meetings, sorts them by start minute, and
/// checks each consecutive pair, failing fast on the first invalid gap.
/// Sections without concrete meetings contribute nothing and constrain
/// nothing.
pub fn validate_sections(sections: &[&Section], rules: &TravelRules) -> bool {
    let mut meetings: Vec<&MeetingInterval> =
        sections.iter().flat_map(|s| s.meetings.iter()).collect();
    meetings.sort_by_key(|m| m.start_minute);

    for pair in meetings.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let gap = next.start_minute - prev.end_minute;
        let check = check_leg(
            &prev.location.campus,
            &next.location.campus,
            Some(gap),
            rules,
        );
        if check == TravelCheck::Invalid {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawMeetingTime, SectionRecord};

    fn rules() -> TravelRules {
        TravelRules::default()
    }

    fn section_at(campus: &str, day: &str, start: &str, end: &str) -> Section {
        Section::from_record(
            &SectionRecord::new("1", "01")
                .with_meeting(RawMeetingTime::new(day, start, end, "A").with_campus(campus)),
        )
    }

    #[test]
    fn test_same_campus_gap() {
        assert_eq!(
            check_leg("BUSCH", "BUSCH", Some(20), &rules()),
            TravelCheck::Valid
        );
        assert_eq!(
            check_leg("BUSCH", "BUSCH", Some(19), &rules()),
            TravelCheck::Invalid
        );
    }

    #[test]
    fn test_overlap_is_invalid() {
        assert_eq!(
            check_leg("BUSCH", "BUSCH", Some(-1), &rules()),
            TravelCheck::Invalid
        );
        // Overlap beats every other rule, exceptions included.
        assert_eq!(
            check_leg("BUSCH", "LIVINGSTON", Some(-5), &rules()),
            TravelCheck::Invalid
        );
    }

    #[test]
    fn test_cross_campus_default() {
        assert_eq!(
            check_leg("BUSCH", "COLLEGE AVENUE", Some(40), &rules()),
            TravelCheck::Valid
        );
        assert_eq!(
            check_leg("BUSCH", "COLLEGE AVENUE", Some(39), &rules()),
            TravelCheck::Invalid
        );
    }

    #[test]
    fn test_exception_pair_both_directions() {
        assert_eq!(
            check_leg("BUSCH", "LIVINGSTON", Some(20), &rules()),
            TravelCheck::Valid
        );
        assert_eq!(
            check_leg("LIVINGSTON", "BUSCH", Some(20), &rules()),
            TravelCheck::Valid
        );
        assert_eq!(
            check_leg("LIVINGSTON", "BUSCH", Some(19), &rules()),
            TravelCheck::Invalid
        );
    }

    #[test]
    fn test_undefined_gap_skipped() {
        assert_eq!(
            check_leg("BUSCH", "LIVINGSTON", None, &rules()),
            TravelCheck::Skipped
        );
    }

    #[test]
    fn test_validate_sections_accepts_wide_gap() {
        let a = section_at("BUSCH", "M", "0900", "0950");
        let b = section_at("BUSCH", "M", "1010", "1100");
        assert!(validate_sections(&[&a, &b], &rules()));
    }

    #[test]
    fn test_validate_sections_rejects_short_gap() {
        let a = section_at("BUSCH", "M", "0900", "0950");
        let b = section_at("BUSCH", "M", "1005", "1100");
        assert!(!validate_sections(&[&a, &b], &rules()));
    }

    #[test]
    fn test_validate_sections_rejects_overlap() {
        let a = section_at("BUSCH", "M", "0900", "0950");
        let b = section_at("LIVINGSTON", "M", "0930", "1030");
        assert!(!validate_sections(&[&a, &b], &rules()));
    }

    #[test]
    fn test_validate_sections_ignores_asynchronous() {
        let a = section_at("BUSCH", "M", "0900", "0950");
        let online = Section::from_record(&SectionRecord::new("2", "90"));
        assert!(validate_sections(&[&a, &online], &rules()));
    }

    #[test]
    fn test_validate_sections_different_days_unconstrained() {
        // Monday's last meeting to Tuesday's first is a huge gap; fine.
        let a = section_at("BUSCH", "M", "0900", "0950");
        let b = section_at("CAMDEN", "T", "0900", "0950");
        assert!(validate_sections(&[&a, &b], &rules()));
    }
}
