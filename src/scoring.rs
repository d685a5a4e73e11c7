//! Section scoring and per-course ordering.
//!
//! Scoring is an additive points accumulator per section. The only term
//! currently contributing is time-window fit: the fraction of a section's
//! meeting minutes falling inside the caller's desired windows. Further
//! preference dimensions (instructor ratings, seat pressure) add terms to
//! the same accumulator without changing any existing contract.
//!
//! After annotation, each course's sections are ordered so the generator
//! visits the most-preferred sections first: fraction of requirements met,
//! then points, both descending, stable on ties.

use std::cmp::Ordering;

use crate::models::{Section, TimeRange};
use crate::requirements::{requirement_matches, CourseRequirements};

/// Fraction of a section's meeting minutes inside the desired windows.
///
/// Sums the positive overlap of every (meeting, window) pair and divides
/// by total meeting minutes. A fully asynchronous section scores 1.0 —
/// there is no time constraint for it to violate.
pub fn percent_in_ranges(section: &Section, ranges: &[TimeRange]) -> f64 {
    if section.is_asynchronous() {
        return 1.0;
    }
    let total = section.total_meeting_minutes();
    if total == 0 {
        return 1.0;
    }
    let matched: i32 = section
        .meetings
        .iter()
        .map(|meeting| {
            ranges
                .iter()
                .map(|range| range.overlap_minutes(meeting))
                .sum::<i32>()
        })
        .sum();
    f64::from(matched) / f64::from(total)
}

/// Scores a section and tallies its requirement coverage.
///
/// Adds the time-window term to `points`, then evaluates every declared
/// requirement: each one counts toward `num_requirements`, and matches are
/// recorded in `requirements_met`.
pub fn annotate(section: &mut Section, requirements: &CourseRequirements) {
    if let Some(ranges) = &requirements.meeting_times_ranges {
        section.points += percent_in_ranges(section, ranges);
    }
    for (key, value) in &requirements.requirements {
        section.num_requirements += 1;
        if requirement_matches(section, key, value) {
            section.requirements_met.push(key.clone());
        }
    }
}

/// Orders a course's sections for the generator.
///
/// Primary key: fraction of requirements met, descending. Secondary key:
/// points, descending. The sort is stable, so ties keep input order.
pub fn order_sections(sections: &mut [Section]) {
    sections.sort_by(|a, b| {
        let by_met = b
            .percent_requirements_met()
            .partial_cmp(&a.percent_requirements_met())
            .unwrap_or(Ordering::Equal);
        if by_met != Ordering::Equal {
            return by_met;
        }
        b.points.partial_cmp(&a.points).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawMeetingTime, SectionRecord};

    fn timed_section(index: &str, day: &str, start: &str, end: &str) -> Section {
        Section::from_record(
            &SectionRecord::new(index, "01")
                .with_meeting(RawMeetingTime::new(day, start, end, "A")),
        )
    }

    #[test]
    fn test_percent_in_ranges_full_overlap() {
        let section = timed_section("1", "M", "0900", "0950");
        let ranges = vec![TimeRange::new(0, 1440)];
        assert_eq!(percent_in_ranges(&section, &ranges), 1.0);
    }

    #[test]
    fn test_percent_in_ranges_partial_overlap() {
        // Meeting 540..590, window 540..565: half the meeting matches.
        let section = timed_section("1", "M", "0900", "0950");
        let ranges = vec![TimeRange::new(540, 565)];
        assert!((percent_in_ranges(&section, &ranges) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_percent_in_ranges_disjoint() {
        let section = timed_section("1", "M", "0900", "0950");
        let ranges = vec![TimeRange::new(2000, 3000)];
        assert_eq!(percent_in_ranges(&section, &ranges), 0.0);
    }

    #[test]
    fn test_percent_in_ranges_asynchronous() {
        let section = Section::from_record(&SectionRecord::new("1", "90"));
        assert_eq!(percent_in_ranges(&section, &[TimeRange::new(0, 1)]), 1.0);
    }

    #[test]
    fn test_annotate_points_and_tally() {
        let mut section = timed_section("1", "M", "0900", "0950");
        let requirements = CourseRequirements::new()
            .with_requirement("printed", "Y")
            .with_requirement("openStatus", false)
            .with_meeting_times_ranges(vec![TimeRange::new(0, 1440)]);

        annotate(&mut section, &requirements);
        assert_eq!(section.points, 1.0);
        assert_eq!(section.num_requirements, 2);
        assert_eq!(section.requirements_met, vec!["printed".to_string()]);
        assert_eq!(section.percent_requirements_met(), 0.5);
    }

    #[test]
    fn test_annotate_without_ranges_leaves_points() {
        let mut section = timed_section("1", "M", "0900", "0950");
        annotate(&mut section, &CourseRequirements::new());
        assert_eq!(section.points, 0.0);
        assert_eq!(section.num_requirements, 0);
    }

    #[test]
    fn test_order_sections_two_keys() {
        let mut a = timed_section("a", "M", "0900", "0950");
        a.num_requirements = 2;
        a.requirements_met = vec!["printed".into()];
        a.points = 0.9;

        let mut b = timed_section("b", "M", "0900", "0950");
        b.num_requirements = 2;
        b.requirements_met = vec!["printed".into(), "openStatus".into()];
        b.points = 0.1;

        let mut c = timed_section("c", "M", "0900", "0950");
        c.num_requirements = 2;
        c.requirements_met = vec!["printed".into()];
        c.points = 0.95;

        let mut sections = vec![a, b, c];
        order_sections(&mut sections);
        // b leads on requirement coverage; c beats a on points.
        assert_eq!(sections[0].index, "b");
        assert_eq!(sections[1].index, "c");
        assert_eq!(sections[2].index, "a");
    }

    #[test]
    fn test_order_sections_stable_on_ties() {
        let first = timed_section("first", "M", "0900", "0950");
        let second = timed_section("second", "T", "0900", "0950");
        let mut sections = vec![first, second];
        order_sections(&mut sections);
        assert_eq!(sections[0].index, "first");
        assert_eq!(sections[1].index, "second");
    }
}
