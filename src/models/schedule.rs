//! Schedule (result) model.
//!
//! A schedule is one complete, validated assignment of exactly one section
//! per requested course, plus aggregate preference metrics. Schedules are
//! immutable value objects created only by the ranker
//! (`planner::ranker`); they are collected, globally sorted, and returned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::section::Section;

/// One course's chosen section within a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSection {
    pub course_id: String,
    pub section: Section,
}

/// A schedule entry: the full section record, or a one-line summary,
/// depending on `PlanOptions::full_form`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleEntry {
    Full(ScheduledSection),
    Summary(String),
}

/// A complete, validated schedule.
///
/// Entries are ordered by each chosen section's earliest meeting minute;
/// fully-online sections order last via the end-of-week sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Chosen sections, ordered by earliest meeting time.
    pub list: Vec<ScheduleEntry>,
    /// Mean of per-section points.
    pub points: f64,
    /// Satisfied requirements over declared requirements, across all
    /// sections. Defined as 1.0 when nothing was declared.
    pub percent_requirements_met: f64,
    /// Per-course breakdown: course id -> satisfied requirement keys.
    pub requirements_met: BTreeMap<String, Vec<String>>,
}

impl Schedule {
    /// Number of courses in this schedule.
    pub fn course_count(&self) -> usize {
        self.list.len()
    }

    /// Whether every section matched every requirement declared for it.
    pub fn meets_all_requirements(&self) -> bool {
        self.percent_requirements_met >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::SectionRecord;

    #[test]
    fn test_serializes_camel_case() {
        let schedule = Schedule {
            list: vec![ScheduleEntry::Summary("section: 01:198:111:03".into())],
            points: 0.5,
            percent_requirements_met: 1.0,
            requirements_met: BTreeMap::new(),
        };
        let json = serde_json::to_value(&schedule).unwrap();
        assert!(json.get("percentRequirementsMet").is_some());
        assert!(json.get("requirementsMet").is_some());
        // Summary entries serialize as bare strings.
        assert_eq!(json["list"][0], "section: 01:198:111:03");
    }

    #[test]
    fn test_full_entry_serializes_as_object() {
        let section = Section::from_record(&SectionRecord::new("10901", "03"));
        let entry = ScheduleEntry::Full(ScheduledSection {
            course_id: "01:198:111".into(),
            section,
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["courseId"], "01:198:111");
        assert_eq!(json["section"]["index"], "10901");
    }

    #[test]
    fn test_meets_all_requirements() {
        let mut schedule = Schedule {
            list: Vec::new(),
            points: 0.0,
            percent_requirements_met: 1.0,
            requirements_met: BTreeMap::new(),
        };
        assert!(schedule.meets_all_requirements());
        schedule.percent_requirements_met = 0.75;
        assert!(!schedule.meets_all_requirements());
    }
}
