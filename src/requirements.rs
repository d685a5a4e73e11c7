//! Requirement sets and match policies.
//!
//! A requirement is a caller-declared preference a section is checked
//! against. The match policy is determined by the shape of the declared
//! value, fixed at construction time rather than re-inspected per
//! comparison:
//!
//! - [`RequirementValue::Equals`]: the section attribute must equal the
//!   scalar exactly.
//! - [`RequirementValue::OneOf`]: the section attribute must be an element
//!   of the list.
//! - [`RequirementValue::Contains`]: the section's instructor list must
//!   contain an equal record.
//!
//! Desired meeting-time windows are carried beside the matchable
//! requirements ([`CourseRequirements::meeting_times_ranges`]) and are never
//! counted as a requirement; they feed scoring only.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{Instructor, Section, TimeRange};

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Text(String),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A declared requirement value; the variant is the match policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementValue {
    /// Equality against a scalar attribute.
    Equals(Scalar),
    /// Membership of a scalar attribute in a list.
    OneOf(Vec<Scalar>),
    /// Containment of a structured record in the section's instructor list.
    Contains(Instructor),
}

impl From<bool> for RequirementValue {
    fn from(value: bool) -> Self {
        Self::Equals(value.into())
    }
}

impl From<&str> for RequirementValue {
    fn from(value: &str) -> Self {
        Self::Equals(value.into())
    }
}

impl From<String> for RequirementValue {
    fn from(value: String) -> Self {
        Self::Equals(value.into())
    }
}

impl From<Scalar> for RequirementValue {
    fn from(value: Scalar) -> Self {
        Self::Equals(value)
    }
}

/// The requirements declared for one course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRequirements {
    /// Matchable requirements, keyed by attribute name.
    pub requirements: BTreeMap<String, RequirementValue>,
    /// Desired time windows; scoring only, never a requirement.
    pub meeting_times_ranges: Option<Vec<TimeRange>>,
}

impl CourseRequirements {
    /// Creates an empty requirement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a requirement for an attribute key.
    pub fn with_requirement(
        mut self,
        key: impl Into<String>,
        value: impl Into<RequirementValue>,
    ) -> Self {
        self.requirements.insert(key.into(), value.into());
        self
    }

    /// Declares an instructor-containment requirement.
    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.requirements.insert(
            "instructors".to_string(),
            RequirementValue::Contains(Instructor::new(name)),
        );
        self
    }

    /// Declares a membership requirement.
    pub fn with_one_of(mut self, key: impl Into<String>, values: Vec<Scalar>) -> Self {
        self.requirements
            .insert(key.into(), RequirementValue::OneOf(values));
        self
    }

    /// Sets the desired meeting-time windows.
    pub fn with_meeting_times_ranges(mut self, ranges: Vec<TimeRange>) -> Self {
        self.meeting_times_ranges = Some(ranges);
        self
    }

    /// Whether nothing at all is declared.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty() && self.meeting_times_ranges.is_none()
    }
}

/// Wildcard requirements plus per-course overrides.
///
/// An explicit two-level lookup: [`Self::effective`] merges the wildcard
/// entry with the course-specific one, the latter winning on key collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementSet {
    /// Requirements applied to every course.
    pub all: CourseRequirements,
    /// Per-course overrides, keyed by the original course id.
    pub by_course: HashMap<String, CourseRequirements>,
}

impl RequirementSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wildcard requirements.
    pub fn with_all(mut self, all: CourseRequirements) -> Self {
        self.all = all;
        self
    }

    /// Sets the overrides for one course.
    pub fn with_course(
        mut self,
        course_id: impl Into<String>,
        requirements: CourseRequirements,
    ) -> Self {
        self.by_course.insert(course_id.into(), requirements);
        self
    }

    /// The merged requirements for one course.
    ///
    /// Per-course values take precedence on key collision; the desired
    /// time windows follow the same precedence.
    pub fn effective(&self, course_id: &str) -> CourseRequirements {
        let mut merged = self.all.clone();
        if let Some(overrides) = self.by_course.get(course_id) {
            for (key, value) in &overrides.requirements {
                merged.requirements.insert(key.clone(), value.clone());
            }
            if overrides.meeting_times_ranges.is_some() {
                merged.meeting_times_ranges = overrides.meeting_times_ranges.clone();
            }
        }
        merged
    }
}

/// Whether a section satisfies one declared requirement.
///
/// A missing attribute or a shape mismatch is "not met", never an error.
pub fn requirement_matches(section: &Section, key: &str, value: &RequirementValue) -> bool {
    match value {
        RequirementValue::Contains(instructor) => {
            key == "instructors" && section.instructors.contains(instructor)
        }
        RequirementValue::OneOf(list) => {
            scalar_attribute(section, key).is_some_and(|attr| list.contains(&attr))
        }
        RequirementValue::Equals(scalar) => {
            scalar_attribute(section, key).is_some_and(|attr| attr == *scalar)
        }
    }
}

/// The section's scalar attribute for a requirement key, if it has one.
fn scalar_attribute(section: &Section, key: &str) -> Option<Scalar> {
    match key {
        "number" => Some(Scalar::Text(section.number.clone())),
        "index" => Some(Scalar::Text(section.index.clone())),
        "printed" => Some(Scalar::Text(section.printed.clone())),
        "openStatus" => Some(Scalar::Bool(section.open_status)),
        _ => None,
    }
}
