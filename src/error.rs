//! Request-level error taxonomy.
//!
//! Only unresolvable course references are hard errors: the generator must
//! never search with a missing course. Everything else the pipeline can
//! recover from is reported, not raised — courses with zero eligible
//! sections and the batch-cap condition travel through
//! [`PlanResult`](crate::planner::PlanResult) fields, and malformed meeting
//! records are dropped during normalization.

use thiserror::Error;

/// A fatal planning-request error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The supplied course id is not `UNIT:SUBJECT:COURSE` shaped.
    #[error("course id `{0}` is not of the form UNIT:SUBJECT:COURSE")]
    MalformedCourseId(String),

    /// The subject code does not exist in the supplied catalog.
    #[error("{course_id}: subject code `{subject_code}` is not in the catalog")]
    UnknownSubject {
        course_id: String,
        subject_code: String,
    },

    /// The subject exists but the course number does not.
    #[error("{course_id}: course `{course_code}` is not offered under subject `{subject_code}`")]
    UnknownCourse {
        course_id: String,
        subject_code: String,
        course_code: String,
    },
}
