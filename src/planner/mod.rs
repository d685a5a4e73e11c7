//! Schedule planning pipeline.
//!
//! Ties the pieces together: resolve course references against the
//! supplied catalog, normalize and annotate each course's sections, run
//! the backtracking search under the travel rules, and rank the surviving
//! schedules.
//!
//! # Pipeline
//!
//! 1. Parse each course id and resolve it in the catalog (fatal on a miss).
//! 2. Build sections: normalize meeting times, score against the desired
//!    windows, tally requirement coverage, pre-sort per course.
//! 3. Short-circuit if any course has zero eligible sections.
//! 4. Enumerate valid combinations (bounded by the batch cap).
//! 5. Sort the schedule list by the configured 2-key order.
//!
//! The pipeline is synchronous and performs no I/O; catalog acquisition
//! and persistence belong to the embedding application.

mod generator;
mod ranker;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{Catalog, CourseQuery, Schedule, Section};
use crate::requirements::RequirementSet;
use crate::scoring;
use crate::travel::TravelRules;

use generator::PlannedCourse;

/// Output and search-bounding options for one planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanOptions {
    /// Hard cap on the number of schedules the search will emit.
    pub batch_size: usize,
    /// Sort by `(points, percent_requirements_met)` instead of the
    /// default `(percent_requirements_met, points)`.
    pub by_points: bool,
    /// Emit full section records instead of one-line summaries.
    pub full_form: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            batch_size: 500,
            by_points: false,
            full_form: false,
        }
    }
}

impl PlanOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch cap.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sorts primarily by points.
    pub fn with_by_points(mut self, by_points: bool) -> Self {
        self.by_points = by_points;
        self
    }

    /// Emits full section records.
    pub fn with_full_form(mut self, full_form: bool) -> Self {
        self.full_form = full_form;
        self
    }
}

/// One planning request: courses, preferences, options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    /// Course ids of the form `UNIT:SUBJECT:COURSE`.
    pub course_ids: Vec<String>,
    pub requirements: RequirementSet,
    pub options: PlanOptions,
}

impl PlanRequest {
    /// Creates a request for the given course ids.
    pub fn new<I, S>(course_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            course_ids: course_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the requirement set.
    pub fn with_requirements(mut self, requirements: RequirementSet) -> Self {
        self.requirements = requirements;
        self
    }

    /// Sets the options.
    pub fn with_options(mut self, options: PlanOptions) -> Self {
        self.options = options;
        self
    }
}

/// The outcome of a planning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Valid schedules, sorted by the configured keys.
    pub schedules: Vec<Schedule>,
    /// False iff the batch cap stopped the search, so callers can
    /// distinguish an exhausted space from a truncated one.
    pub complete: bool,
    /// Courses that resolved but yielded zero sections. Non-empty means
    /// the request was unsatisfiable and `schedules` is empty.
    pub courses_without_sections: Vec<String>,
}

impl PlanResult {
    /// Whether the batch cap cut the search short.
    pub fn hit_batch_cap(&self) -> bool {
        !self.complete
    }
}

/// The schedule planner.
///
/// Holds the travel rules; everything else arrives per request. The
/// planner has no internal state, so one instance can serve any number of
/// requests.
///
/// # Example
///
/// ```
/// use courseplan::models::{Catalog, CourseListing, RawMeetingTime, SectionRecord, Subject};
/// use courseplan::planner::{PlanRequest, Planner};
///
/// let catalog = Catalog::new().with_subject(
///     Subject::new("198").with_course(
///         CourseListing::new("111").with_section(
///             SectionRecord::new("10901", "01")
///                 .with_meeting(RawMeetingTime::new("M", "0900", "0950", "A")),
///         ),
///     ),
/// );
/// let result = Planner::new()
///     .generate(&catalog, &PlanRequest::new(["01:198:111"]))
///     .unwrap();
/// assert_eq!(result.schedules.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    travel_rules: TravelRules,
}

impl Planner {
    /// Creates a planner with the default travel rules.
    pub fn new() -> Self {
        Self {
            travel_rules: TravelRules::default(),
        }
    }

    /// Sets the travel rules.
    pub fn with_travel_rules(mut self, travel_rules: TravelRules) -> Self {
        self.travel_rules = travel_rules;
        self
    }

    /// Generates ranked schedules for a request.
    ///
    /// Fatal only when a course reference does not resolve; every other
    /// condition is reported through [`PlanResult`].
    pub fn generate(
        &self,
        catalog: &Catalog,
        request: &PlanRequest,
    ) -> Result<PlanResult, PlanError> {
        let mut courses = Vec::with_capacity(request.course_ids.len());
        for id in &request.course_ids {
            let query = CourseQuery::parse(id)?;
            let records = catalog.resolve(&query)?;
            let effective = request.requirements.effective(&query.id);

            let mut sections: Vec<Section> = records.iter().map(Section::from_record).collect();
            for section in &mut sections {
                scoring::annotate(section, &effective);
            }
            scoring::order_sections(&mut sections);
            courses.push(PlannedCourse {
                id: query.id,
                sections,
            });
        }

        // No combination can exist once any course is empty.
        let courses_without_sections: Vec<String> = courses
            .iter()
            .filter(|course| course.sections.is_empty())
            .map(|course| course.id.clone())
            .collect();
        if !courses_without_sections.is_empty() {
            for id in &courses_without_sections {
                log::warn!("{id} has no eligible sections");
            }
            return Ok(PlanResult {
                schedules: Vec::new(),
                complete: true,
                courses_without_sections,
            });
        }

        let outcome = generator::search(
            &courses,
            &self.travel_rules,
            request.options.batch_size,
            request.options.full_form,
        );
        let mut schedules = outcome.schedules;
        ranker::sort_schedules(&mut schedules, request.options.by_points);
        log::debug!(
            "{} schedules generated ({})",
            schedules.len(),
            if outcome.complete {
                "search exhausted"
            } else {
                "batch cap reached"
            }
        );
        Ok(PlanResult {
            schedules,
            complete: outcome.complete,
            courses_without_sections: Vec::new(),
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
