//! # course-schedule
//!
//! Decides whether every course in a catalog can be completed given its
//! prerequisite pairs, i.e. whether the `course -> prerequisite` graph is
//! acyclic.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod models;

pub use error::{Result, ScheduleError};
pub use graph::{completion_order, CycleDetector, CyclePath, PrerequisiteGraph};
pub use models::*;

/// Whether all `num_courses` courses can be finished.
///
/// Builds the prerequisite graph and resolves every course in order. A cycle
/// yields `Ok(false)`; only identifiers outside `0..num_courses` are errors.
pub fn can_finish<I>(num_courses: usize, prerequisites: I) -> Result<bool>
where
    I: IntoIterator,
    I::Item: Into<Prerequisite>,
{
    let graph = PrerequisiteGraph::build(num_courses, prerequisites)?;
    Ok(CycleDetector::new(&graph).can_finish_all())
}

/// The first cycle found while resolving courses in order, if any.
pub fn find_cycle<I>(num_courses: usize, prerequisites: I) -> Result<Option<CyclePath>>
where
    I: IntoIterator,
    I::Item: Into<Prerequisite>,
{
    let graph = PrerequisiteGraph::build(num_courses, prerequisites)?;
    let mut detector = CycleDetector::new(&graph);
    if detector.can_finish_all() {
        return Ok(None);
    }
    Ok(detector.into_cycle())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prerequisite() {
        assert!(can_finish(2, [(0, 1)]).unwrap());
    }

    #[test]
    fn test_mutual_prerequisites() {
        assert!(!can_finish(2, [(1, 0), (0, 1)]).unwrap());
    }

    #[test]
    fn test_diamond() {
        assert!(can_finish(4, [(1, 0), (2, 0), (3, 1), (3, 2)]).unwrap());
    }

    #[test]
    fn test_three_cycle() {
        assert!(!can_finish(3, [(1, 0), (0, 2), (2, 1)]).unwrap());
    }

    #[test]
    fn test_no_prerequisites() {
        for n in 0..5 {
            assert!(can_finish(n, Vec::<Prerequisite>::new()).unwrap());
        }
    }

    #[test]
    fn test_accepts_prerequisite_values() {
        let edges = vec![Prerequisite::new(1, 0), Prerequisite::new(0, 1)];
        assert!(!can_finish(2, edges).unwrap());
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        assert!(matches!(
            can_finish(1, [(0, 1)]),
            Err(ScheduleError::CourseOutOfRange { course: 1, .. })
        ));
    }

    #[test]
    fn test_find_cycle() {
        assert_eq!(find_cycle(2, [(0, 1)]).unwrap(), None);

        let cycle = find_cycle(3, [(1, 0), (0, 2), (2, 1)]).unwrap().unwrap();
        assert_eq!(cycle.path, vec![0, 2, 1, 0]);
    }
}
