//! Adjacency lists built from prerequisite pairs.

use crate::error::{Result, ScheduleError};
use crate::models::Prerequisite;
use tracing::debug;

/// Immutable prerequisite graph over courses `0..num_courses`.
///
/// `prerequisites_of(c)` lists every `d` such that the edge `(c, d)` was
/// given, in input order. Duplicate edges are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl PrerequisiteGraph {
    /// Build the adjacency lists, rejecting identifiers outside `0..num_courses`.
    pub fn build<I>(num_courses: usize, prerequisites: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Prerequisite>,
    {
        let mut adjacency = vec![Vec::new(); num_courses];
        let mut edge_count = 0;

        for edge in prerequisites {
            let Prerequisite {
                course,
                prerequisite,
            } = edge.into();
            for id in [course, prerequisite] {
                if id >= num_courses {
                    return Err(ScheduleError::CourseOutOfRange {
                        course: id,
                        num_courses,
                    });
                }
            }
            adjacency[course].push(prerequisite);
            edge_count += 1;
        }

        debug!(num_courses, edge_count, "built prerequisite graph");
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    pub fn num_courses(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Direct prerequisites of `course`, or `None` if it is out of range.
    pub fn prerequisites_of(&self, course: usize) -> Option<&[usize]> {
        self.adjacency.get(course).map(Vec::as_slice)
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}
