//! Cycle detection over the prerequisite graph.

use crate::error::{format_cycle, Result, ScheduleError};
use crate::graph::PrerequisiteGraph;
use std::collections::HashSet;
use tracing::debug;

/// A path representing a cycle in the prerequisite graph.
///
/// Runs in course -> prerequisite direction and ends with the course it
/// started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath {
    pub path: Vec<usize>,
}

impl CyclePath {
    /// Create a new cycle path.
    pub fn new(path: Vec<usize>) -> Self {
        Self { path }
    }

    /// Format the cycle as a string.
    pub fn format(&self) -> String {
        format_cycle(&self.path)
    }

    /// Number of distinct courses on the cycle.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One course under resolution and the index of its next prerequisite.
#[derive(Debug, Clone, Copy)]
struct Frame {
    course: usize,
    next: usize,
}

/// Depth-first resolver with a per-course memo.
///
/// `remaining[c]` holds the prerequisites of `c` still to be checked. Once
/// `c` is known to reach no cycle the entry is cleared, so an empty entry
/// means "resolved". The memo lives as long as the detector, the active
/// path only as long as one `can_resolve` query.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    remaining: Vec<Vec<usize>>,
    cycle: Option<CyclePath>,
}

impl CycleDetector {
    pub fn new(graph: &PrerequisiteGraph) -> Self {
        Self {
            remaining: graph.adjacency().to_vec(),
            cycle: None,
        }
    }

    /// Resolve `course` and everything it transitively requires.
    ///
    /// Returns `Ok(false)` when a back-edge to a course on the active path is
    /// found; the cycle is then available from [`CycleDetector::cycle`].
    pub fn can_resolve(&mut self, course: usize) -> Result<bool> {
        if course >= self.remaining.len() {
            return Err(ScheduleError::CourseOutOfRange {
                course,
                num_courses: self.remaining.len(),
            });
        }

        if self.remaining[course].is_empty() {
            return Ok(true);
        }

        let mut on_path: HashSet<usize> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();
        on_path.insert(course);
        stack.push(Frame { course, next: 0 });

        while let Some(&Frame { course: current, next }) = stack.last() {
            let Some(&prerequisite) = self.remaining[current].get(next) else {
                // Every prerequisite resolved: leave the path and memoize.
                on_path.remove(&current);
                self.remaining[current].clear();
                stack.pop();
                continue;
            };

            let top = stack.len() - 1;
            stack[top].next += 1;

            if on_path.contains(&prerequisite) {
                let path = cycle_from_stack(&stack, prerequisite);
                debug!(course, cycle = %format_cycle(&path), "cycle detected");
                self.cycle = Some(CyclePath::new(path));
                return Ok(false);
            }

            if self.remaining[prerequisite].is_empty() {
                continue;
            }

            on_path.insert(prerequisite);
            stack.push(Frame {
                course: prerequisite,
                next: 0,
            });
        }

        Ok(true)
    }

    /// Resolve every course in `0..num_courses`, stopping at the first cycle.
    pub fn can_finish_all(&mut self) -> bool {
        for course in 0..self.remaining.len() {
            // In range by construction.
            if !matches!(self.can_resolve(course), Ok(true)) {
                return false;
            }
        }
        true
    }

    /// Whether `course` is known to reach no cycle.
    pub fn is_cleared(&self, course: usize) -> bool {
        self.remaining.get(course).is_some_and(Vec::is_empty)
    }

    /// The most recently detected cycle, if any.
    pub fn cycle(&self) -> Option<&CyclePath> {
        self.cycle.as_ref()
    }

    pub fn into_cycle(self) -> Option<CyclePath> {
        self.cycle
    }
}

/// Slice the active path from `repeated` to the top of the stack and close it.
fn cycle_from_stack(stack: &[Frame], repeated: usize) -> Vec<usize> {
    let start = stack
        .iter()
        .position(|frame| frame.course == repeated)
        .unwrap_or(0);
    let mut path: Vec<usize> = stack[start..].iter().map(|frame| frame.course).collect();
    path.push(repeated);
    path
}
