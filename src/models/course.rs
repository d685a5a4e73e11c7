//! Course identification.
//!
//! Course ids arrive as opaque `UNIT:SUBJECT:COURSE` triples
//! (e.g. `01:198:111`). Only the subject and course codes are semantically
//! used; the unit code is discarded.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// A parsed course reference.
///
/// Immutable once parsed; keeps the original id for display and for keying
/// per-course requirement overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    /// The original id as supplied, e.g. `01:198:111`.
    pub id: String,
    /// Second-to-last segment, e.g. `198`.
    pub subject_code: String,
    /// Last segment, e.g. `111`.
    pub course_code: String,
}

impl CourseQuery {
    /// Parses a `UNIT:SUBJECT:COURSE` id.
    ///
    /// The last two `:`-separated segments are the subject and course
    /// codes; anything before them is ignored. Ids with fewer than two
    /// segments are rejected.
    pub fn parse(id: &str) -> Result<Self, PlanError> {
        let segments: Vec<&str> = id.split(':').collect();
        if segments.len() < 2 {
            return Err(PlanError::MalformedCourseId(id.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            subject_code: segments[segments.len() - 2].to_string(),
            course_code: segments[segments.len() - 1].to_string(),
        })
    }
}
