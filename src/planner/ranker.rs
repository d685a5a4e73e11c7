//! Schedule assembly and ranking.
//!
//! Assembly turns a complete validated selection (one section per course)
//! into an immutable [`Schedule`]: courses reordered by earliest meeting
//! time, per-section annotations aggregated into schedule-level metrics,
//! and entries rendered full or as one-line summaries. Ranking sorts the
//! finished schedule list by the caller's chosen 2-key order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::models::{
    Schedule, ScheduleEntry, ScheduledSection, Section, Weekday, MINUTES_PER_DAY,
};

/// Builds a schedule from a complete validated selection.
///
/// Courses are ordered by each chosen section's earliest meeting minute
/// (fully-online sections carry the end-of-week sentinel, so they land
/// last; ties keep input order). `points` is the mean of per-section
/// points; `percent_requirements_met` is total satisfied over total
/// declared across all sections, defined as 1.0 when nothing was declared.
pub fn assemble(selection: &[(&str, &Section)], full_form: bool) -> Schedule {
    let mut ordered = selection.to_vec();
    ordered.sort_by_key(|(_, section)| section.earliest_meeting_minute);

    let mut list = Vec::with_capacity(ordered.len());
    let mut requirements_met = BTreeMap::new();
    let mut met_total = 0usize;
    let mut declared_total = 0usize;
    let mut points_total = 0.0f64;

    for (course_id, section) in &ordered {
        met_total += section.requirements_met.len();
        declared_total += section.num_requirements;
        points_total += section.points;
        requirements_met.insert(course_id.to_string(), section.requirements_met.clone());
        list.push(if full_form {
            ScheduleEntry::Full(ScheduledSection {
                course_id: course_id.to_string(),
                section: (*section).clone(),
            })
        } else {
            ScheduleEntry::Summary(section_summary(course_id, section))
        });
    }

    let percent_requirements_met = if declared_total == 0 {
        1.0
    } else {
        met_total as f64 / declared_total as f64
    };
    let points = if ordered.is_empty() {
        0.0
    } else {
        points_total / ordered.len() as f64
    };

    Schedule {
        list,
        points,
        percent_requirements_met,
        requirements_met,
    }
}

/// Renders a section as a human-readable one-liner.
///
/// `section: <courseID>:<sectionNumber>, index: <index> --> <day>, <start>
/// to <end>` with one day/time clause per meeting, or
/// `Online/Asynchronous Content` for a section with no concrete meetings.
pub fn section_summary(course_id: &str, section: &Section) -> String {
    let mut line = format!(
        "section: {}:{}, index: {} -->",
        course_id, section.number, section.index
    );
    if section.is_asynchronous() {
        line.push_str(" Online/Asynchronous Content");
        return line;
    }
    for meeting in &section.meetings {
        let (day, start) = day_and_clock(meeting.start_minute);
        let (_, end) = day_and_clock(meeting.end_minute);
        let _ = write!(line, " {day}, {start} to {end}");
    }
    line
}

/// Splits a weekly minute into a day name and a 12-hour clock string.
fn day_and_clock(minute: i32) -> (&'static str, String) {
    let day = Weekday::from_index(minute / MINUTES_PER_DAY).map_or("???", Weekday::abbrev);
    let minute_of_day = minute % MINUTES_PER_DAY;
    let hours = minute_of_day / 60;
    let half = if hours / 12 >= 1 { "PM" } else { "AM" };
    (
        day,
        format!("{:>2}:{:02} {}", hours % 12, minute_of_day % 60, half),
    )
}

/// Sorts schedules by the configured 2-key order.
///
/// Default order is `(percent_requirements_met, points)`; `by_points`
/// swaps the keys. Both keys descend, and the sort is stable so remaining
/// ties keep generation order.
pub fn sort_schedules(schedules: &mut [Schedule], by_points: bool) {
    schedules.sort_by(|a, b| {
        let (primary_a, secondary_a, primary_b, secondary_b) = if by_points {
            (
                a.points,
                a.percent_requirements_met,
                b.points,
                b.percent_requirements_met,
            )
        } else {
            (
                a.percent_requirements_met,
                a.points,
                b.percent_requirements_met,
                b.points,
            )
        };
        let primary = primary_b.partial_cmp(&primary_a).unwrap_or(Ordering::Equal);
        if primary != Ordering::Equal {
            return primary;
        }
        secondary_b
            .partial_cmp(&secondary_a)
            .unwrap_or(Ordering::Equal)
    });
}
