//! Course-planning domain models.
//!
//! Provides the value types the planner operates on: parsed course
//! references, the supplied catalog, normalized meeting intervals on the
//! weekly minute scale, annotated sections, and the schedule result
//! object. All types are plain serde-derived data; the algorithms that
//! produce and consume them live in `requirements`, `scoring`, `travel`,
//! and `planner`.

mod catalog;
mod course;
pub mod meeting;
mod schedule;
mod section;

pub use catalog::{Catalog, CourseListing, Subject};
pub use course::CourseQuery;
pub use meeting::{
    Location, MeetingInterval, MeetingMode, RawMeetingTime, TimeRange, Weekday, MINUTES_PER_DAY,
    WEEK_MINUTES,
};
pub use schedule::{Schedule, ScheduleEntry, ScheduledSection};
pub use section::{Instructor, Section, SectionRecord};
