//! Section model.
//!
//! A section is one offered instance of a course: its own meeting schedule,
//! instructors, and seat status. [`SectionRecord`] is the catalog wire
//! shape; [`Section`] is the normalized, annotated form the planner
//! searches over. Sections are built fresh per planning request and are
//! read-only during the search.

use serde::{Deserialize, Serialize};

use super::meeting::{MeetingInterval, RawMeetingTime, WEEK_MINUTES};

/// An instructor descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub name: String,
}

impl Instructor {
    /// Creates an instructor by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A section as delivered by the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionRecord {
    /// Registration index id.
    pub index: String,
    /// Section number within the course, e.g. `03`.
    pub number: String,
    /// Whether the section appears in the printed schedule (`Y`/`N`).
    pub printed: String,
    /// Whether seats are open.
    pub open_status: bool,
    pub instructors: Vec<Instructor>,
    pub meeting_times: Vec<RawMeetingTime>,
}

impl SectionRecord {
    /// Creates a record with the given index and section number.
    pub fn new(index: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            number: number.into(),
            printed: "Y".to_string(),
            open_status: true,
            ..Self::default()
        }
    }

    /// Adds a raw meeting time.
    pub fn with_meeting(mut self, meeting: RawMeetingTime) -> Self {
        self.meeting_times.push(meeting);
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructors.push(Instructor::new(name));
        self
    }

    /// Sets the printed flag.
    pub fn with_printed(mut self, printed: impl Into<String>) -> Self {
        self.printed = printed.into();
        self
    }

    /// Sets the open/closed seat status.
    pub fn with_open_status(mut self, open: bool) -> Self {
        self.open_status = open;
        self
    }
}

/// A normalized section with score and requirement annotations.
///
/// Invariant: `meetings` is sorted ascending by start minute and contains
/// no negative-duration interval. An empty `meetings` list means the
/// section is fully online/asynchronous; its `earliest_meeting_minute` is
/// the [`WEEK_MINUTES`] sentinel so it orders after every scheduled section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub index: String,
    pub number: String,
    pub printed: String,
    pub open_status: bool,
    pub instructors: Vec<Instructor>,
    pub meetings: Vec<MeetingInterval>,
    pub earliest_meeting_minute: i32,
    /// Additive preference score (see `scoring`).
    pub points: f64,
    /// Requirement keys this section satisfied.
    pub requirements_met: Vec<String>,
    /// Number of requirement keys evaluated against this section.
    pub num_requirements: usize,
}

impl Section {
    /// Normalizes a catalog record into a section.
    ///
    /// Asynchronous and malformed meeting records are dropped (the latter
    /// with a warning); surviving intervals are sorted ascending by start.
    pub fn from_record(record: &SectionRecord) -> Self {
        let mut meetings: Vec<MeetingInterval> = record
            .meeting_times
            .iter()
            .filter_map(MeetingInterval::from_raw)
            .collect();
        meetings.sort_by_key(|m| m.start_minute);
        let earliest = meetings.first().map_or(WEEK_MINUTES, |m| m.start_minute);

        Self {
            index: record.index.clone(),
            number: record.number.clone(),
            printed: record.printed.clone(),
            open_status: record.open_status,
            instructors: record.instructors.clone(),
            meetings,
            earliest_meeting_minute: earliest,
            points: 0.0,
            requirements_met: Vec::new(),
            num_requirements: 0,
        }
    }

    /// Whether this section has no concrete meetings.
    #[inline]
    pub fn is_asynchronous(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Sum of meeting durations (minutes).
    pub fn total_meeting_minutes(&self) -> i32 {
        self.meetings.iter().map(|m| m.duration_minutes()).sum()
    }

    /// Fraction of evaluated requirements this section satisfied.
    ///
    /// A section with no declared requirements is vacuously satisfied (1.0).
    pub fn percent_requirements_met(&self) -> f64 {
        if self.num_requirements == 0 {
            return 1.0;
        }
        self.requirements_met.len() as f64 / self.num_requirements as f64
    }
}
