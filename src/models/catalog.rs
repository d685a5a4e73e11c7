//! In-memory course catalog.
//!
//! The catalog is supplied whole by the (out-of-scope) ingestion
//! collaborator: subjects, their courses, and each course's section
//! records. The planner only resolves course references against it —
//! lookup is by subject code first, then course number, and either miss is
//! fatal for the whole planning request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::course::CourseQuery;
use super::section::SectionRecord;
use crate::error::PlanError;

/// All sections offered for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    /// Course number within the subject, e.g. `111`.
    pub number: String,
    pub title: String,
    pub sections: Vec<SectionRecord>,
}

impl CourseListing {
    /// Creates an empty listing.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: String::new(),
            sections: Vec::new(),
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a section record.
    pub fn with_section(mut self, section: SectionRecord) -> Self {
        self.sections.push(section);
        self
    }
}

/// A subject and its course listings, keyed by course number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub code: String,
    courses: HashMap<String, CourseListing>,
}

impl Subject {
    /// Creates an empty subject.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            courses: HashMap::new(),
        }
    }

    /// Adds a course listing, keyed by its number.
    pub fn with_course(mut self, course: CourseListing) -> Self {
        self.courses.insert(course.number.clone(), course);
        self
    }

    /// Looks up a course by number.
    pub fn course(&self, number: &str) -> Option<&CourseListing> {
        self.courses.get(number)
    }
}

/// The supplied catalog, keyed by subject code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    subjects: HashMap<String, Subject>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subject, keyed by its code.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.insert(subject.code.clone(), subject);
        self
    }

    /// Resolves a course reference to its section records.
    ///
    /// Subject lookup failing and course lookup failing are distinct
    /// errors so the caller can tell which half of the reference is bad.
    pub fn resolve(&self, query: &CourseQuery) -> Result<&[SectionRecord], PlanError> {
        let subject =
            self.subjects
                .get(&query.subject_code)
                .ok_or_else(|| PlanError::UnknownSubject {
                    course_id: query.id.clone(),
                    subject_code: query.subject_code.clone(),
                })?;
        let course =
            subject
                .course(&query.course_code)
                .ok_or_else(|| PlanError::UnknownCourse {
                    course_id: query.id.clone(),
                    subject_code: query.subject_code.clone(),
                    course_code: query.course_code.clone(),
                })?;
        Ok(&course.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new().with_subject(
            Subject::new("198").with_course(
                CourseListing::new("111")
                    .with_title("INTRO COMPUTER SCI")
                    .with_section(SectionRecord::new("10901", "01")),
            ),
        )
    }

    #[test]
    fn test_resolve() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse("01:198:111").unwrap();
        let sections = catalog.resolve(&query).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].index, "10901");
    }

    #[test]
    fn test_resolve_unknown_subject() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse("01:999:111").unwrap();
        assert!(matches!(
            catalog.resolve(&query),
            Err(PlanError::UnknownSubject { .. })
        ));
    }

    #[test]
    fn test_resolve_unknown_course() {
        let catalog = sample_catalog();
        let query = CourseQuery::parse("01:198:999").unwrap();
        assert!(matches!(
            catalog.resolve(&query),
            Err(PlanError::UnknownCourse { .. })
        ));
    }
}
