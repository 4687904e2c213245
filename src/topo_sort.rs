//! Topological ordering by repeatedly removing zero in-degree nodes (Kahn).

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::graph::Adjacency;

/// A removal order of courses `0..course_count`, or `None` if the prerequisites
/// contain a cycle.
///
/// Each pair is `(course, prerequisite)`: the prerequisite must come first.
pub fn topological_order(
    course_count: usize,
    prerequisites: &[(usize, usize)],
) -> Result<Option<Vec<usize>>> {
    let graph = Adjacency::directed(
        course_count,
        prerequisites
            .iter()
            .map(|&(course, prereq)| (prereq, course, ())),
    )?;
    let mut in_degree = graph.in_degrees();

    let mut ready: VecDeque<usize> = (0..course_count).filter(|&c| in_degree[c] == 0).collect();
    let mut order = Vec::with_capacity(course_count);

    while let Some(course) = ready.pop_front() {
        order.push(course);
        for &(next, ()) in graph.targets(course) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() == course_count {
        Ok(Some(order))
    } else {
        debug!(
            "prerequisite cycle: {} of {course_count} courses never became ready",
            course_count - order.len()
        );
        Ok(None)
    }
}

/// Whether every course can be taken (Course Schedule).
pub fn can_finish(course_count: usize, prerequisites: &[(usize, usize)]) -> Result<bool> {
    Ok(topological_order(course_count, prerequisites)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::prelude::*;

    #[test]
    fn schedule_feasibility() {
        assert_eq!(can_finish(4, &[(1, 0), (2, 0), (3, 1), (3, 2)]), Ok(true));
        assert_eq!(can_finish(2, &[(1, 0), (0, 1)]), Ok(false));
        assert_eq!(can_finish(3, &[]), Ok(true));
        assert_eq!(can_finish(3, &[(1, 0), (2, 1)]), Ok(true));
        assert_eq!(can_finish(1, &[]), Ok(true));
        assert_eq!(can_finish(1, &[(0, 0)]), Ok(false));
    }

    #[test]
    fn order_respects_prerequisites() {
        let order = topological_order(4, &[(1, 0), (2, 0), (3, 1), (3, 2)])
            .unwrap()
            .unwrap();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_unknown_course() {
        assert_eq!(
            can_finish(2, &[(2, 0)]),
            Err(Error::InvalidNode { node: 2, node_count: 2 })
        );
    }

    proptest! {
        /// Edges that only point from lower to higher index form a DAG, in any order.
        #[test]
        fn dags_are_always_feasible(
            n in 1usize..16,
            raw in prop::collection::vec((0usize..16, 0usize..16), 0..40),
        ) {
            let prerequisites: Vec<(usize, usize)> = raw
                .into_iter()
                .map(|(a, b)| (a % n, b % n))
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.max(b), a.min(b)))
                .collect();

            let order = topological_order(n, &prerequisites).unwrap();
            prop_assert!(order.is_some());
            let order = order.unwrap();

            let mut position = vec![0; n];
            for (pos, &course) in order.iter().enumerate() {
                position[course] = pos;
            }
            for &(course, prereq) in &prerequisites {
                prop_assert!(position[prereq] < position[course]);
            }

            let mut reversed = prerequisites.clone();
            reversed.reverse();
            prop_assert_eq!(can_finish(n, &reversed), Ok(true));
        }
    }
}
