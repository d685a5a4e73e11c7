//! Backtracking schedule generator.
//!
//! # Algorithm
//!
//! Depth-first search over the per-course section lists, one pointer per
//! course. At depth `k`, each of course `k`'s sections (in pre-sorted
//! order) is appended to the validated prefix and the travel validator is
//! re-run over the whole prefix — the validator is the single source of
//! truth, and revalidation is cheap relative to the width of the search.
//! A valid full-depth prefix is assembled into a schedule; an invalid
//! extension is pruned and the next section is tried. The search stops
//! globally the moment the result list reaches the batch cap.
//!
//! Emission order is deterministic: lexicographic in pointer order over
//! the pre-sorted lists. Raising the cap therefore only ever extends the
//! result frontier, never reshuffles it.
//!
//! Termination: every pointer strictly advances over a finite list, so the
//! recursion is finite; worst case is the product of the per-course
//! section counts, bounded by pruning and the cap.

use crate::models::{Schedule, Section};
use crate::travel::{self, TravelRules};

use super::ranker;

/// One course ready for the search: its id and pre-sorted sections.
#[derive(Debug, Clone)]
pub(crate) struct PlannedCourse {
    pub id: String,
    pub sections: Vec<Section>,
}

/// What the search produced, and whether it saw the whole space.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub schedules: Vec<Schedule>,
    /// False iff the batch cap stopped the search.
    pub complete: bool,
}

/// Enumerates valid schedules, at most `batch_size` of them.
pub(crate) fn search(
    courses: &[PlannedCourse],
    rules: &TravelRules,
    batch_size: usize,
    full_form: bool,
) -> SearchOutcome {
    if courses.is_empty() || batch_size == 0 {
        return SearchOutcome {
            schedules: Vec::new(),
            complete: courses.is_empty(),
        };
    }
    log::debug!(
        "searching {} courses ({} combinations at most), batch cap {batch_size}",
        courses.len(),
        courses
            .iter()
            .map(|c| c.sections.len())
            .product::<usize>()
    );

    let mut schedules = Vec::new();
    let mut prefix: Vec<&Section> = Vec::with_capacity(courses.len());
    let complete = extend(
        courses,
        rules,
        batch_size,
        full_form,
        &mut prefix,
        &mut schedules,
    );
    if !complete {
        log::debug!("batch cap reached after {} schedules", schedules.len());
    }
    SearchOutcome {
        schedules,
        complete,
    }
}

/// Tries every section of the next unassigned course against the prefix.
///
/// Returns false when the batch cap was hit and the search must unwind.
fn extend<'a>(
    courses: &'a [PlannedCourse],
    rules: &TravelRules,
    batch_size: usize,
    full_form: bool,
    prefix: &mut Vec<&'a Section>,
    out: &mut Vec<Schedule>,
) -> bool {
    let depth = prefix.len();
    for section in &courses[depth].sections {
        prefix.push(section);
        if travel::validate_sections(prefix, rules) {
            if prefix.len() == courses.len() {
                let selection: Vec<(&str, &Section)> = courses
                    .iter()
                    .map(|course| course.id.as_str())
                    .zip(prefix.iter().copied())
                    .collect();
                out.push(ranker::assemble(&selection, full_form));
                if out.len() >= batch_size {
                    prefix.pop();
                    return false;
                }
            } else if !extend(courses, rules, batch_size, full_form, prefix, out) {
                prefix.pop();
                return false;
            }
        }
        prefix.pop();
    }
    true
}
