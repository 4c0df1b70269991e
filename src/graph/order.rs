//! Completion ordering using Kahn's algorithm.

use crate::graph::PrerequisiteGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Order courses so that every prerequisite comes before the courses that
/// require it.
///
/// Among available courses the lowest-numbered one is taken first, so the
/// result is deterministic. Returns `None` when the graph has a cycle.
pub fn completion_order(graph: &PrerequisiteGraph) -> Option<Vec<usize>> {
    let n = graph.num_courses();

    // in_degree[c] counts the prerequisite edges of c still untaken;
    // dependents[p] lists the courses that require p.
    let mut in_degree = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (course, prerequisites) in graph.adjacency().iter().enumerate() {
        in_degree[course] = prerequisites.len();
        for &prerequisite in prerequisites {
            dependents[prerequisite].push(course);
        }
    }

    // Min-heap of courses whose prerequisites are all taken
    let mut heap: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(course, _)| Reverse(course))
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(course)) = heap.pop() {
        order.push(course);
        for &dependent in &dependents[course] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                heap.push(Reverse(dependent));
            }
        }
    }

    if order.len() < n {
        debug!(
            ordered = order.len(),
            num_courses = n,
            "courses left on a cycle"
        );
        return None;
    }
    Some(order)
}
