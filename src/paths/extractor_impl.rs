use std::collections::VecDeque;

use petgraph::graph::NodeIndex;

use crate::error::ModGraphError;
use crate::graph::ModuleGraph;

/// One frontier entry: the node reached plus the crumb it was reached from
#[derive(Debug, Clone, Copy)]
struct Crumb {
    node: NodeIndex,
    from: Option<usize>,
}

/// Extracts every acyclic path from a graph's root to a target module
///
/// The search is breadth first. Each frontier entry carries its trail back
/// to the root; an entry whose node already appears earlier on its own trail
/// is dropped without being expanded, which cuts cycles and guarantees
/// termination. Every trail that reaches the target is merged into a fresh
/// result graph.
#[derive(Debug, Default)]
pub struct PathExtractor {
    paths_found: usize,
    cycles_cut: usize,
}

impl PathExtractor {
    pub fn new() -> Self {
        Self {
            paths_found: 0,
            cycles_cut: 0,
        }
    }

    /// Number of root-to-target trails merged by the last extraction
    pub fn paths_found(&self) -> usize {
        self.paths_found
    }

    /// Number of frontier entries dropped for revisiting their own trail
    pub fn cycles_cut(&self) -> usize {
        self.cycles_cut
    }

    /// Build a new graph holding only the acyclic paths from the root of
    /// `graph` to `target`
    ///
    /// Fails with `TargetNotFound` when `target` was never mentioned in
    /// `graph`, whether or not it is reachable. The result shares no storage
    /// with `graph`; its root carries the same name as the source root.
    pub fn extract_paths_to(
        &mut self,
        graph: &ModuleGraph,
        target: &str,
    ) -> Result<ModuleGraph, ModGraphError> {
        self.paths_found = 0;
        self.cycles_cut = 0;

        let Some(target_idx) = graph.index_of(target) else {
            return Err(ModGraphError::TargetNotFound {
                target: target.to_string(),
            });
        };

        let Some(root) = graph.root() else {
            return Ok(ModuleGraph::new());
        };

        let mut result = ModuleGraph::with_root(graph.graph()[root].name());

        // Crumbs live for this call only; the queue holds indices into them
        let mut crumbs = vec![Crumb {
            node: root,
            from: None,
        }];
        let mut queue = VecDeque::from([0usize]);

        while let Some(cursor) = queue.pop_front() {
            if revisits_trail(&crumbs, cursor) {
                self.cycles_cut += 1;
                continue;
            }

            let node = crumbs[cursor].node;
            if node == target_idx {
                self.paths_found += 1;
                merge_trail(graph, &crumbs, cursor, &mut result);
            }

            for next in graph.successors(node) {
                crumbs.push(Crumb {
                    node: next,
                    from: Some(cursor),
                });
                queue.push_back(crumbs.len() - 1);
            }
        }

        Ok(result)
    }
}

/// Convenience wrapper around [`PathExtractor::extract_paths_to`]
pub fn extract_paths_to(graph: &ModuleGraph, target: &str) -> Result<ModuleGraph, ModGraphError> {
    PathExtractor::new().extract_paths_to(graph, target)
}

/// Whether the node at `cursor` already occurs earlier on its own trail
///
/// Every prefix of the trail was checked when it was dequeued, so only the
/// newest node can close a cycle.
fn revisits_trail(crumbs: &[Crumb], cursor: usize) -> bool {
    let node = crumbs[cursor].node;
    let mut link = crumbs[cursor].from;

    while let Some(idx) = link {
        if crumbs[idx].node == node {
            return true;
        }
        link = crumbs[idx].from;
    }

    false
}

/// Insert the trail ending at `cursor` into `result`, root first
fn merge_trail(graph: &ModuleGraph, crumbs: &[Crumb], cursor: usize, result: &mut ModuleGraph) {
    let mut trail = Vec::new();
    let mut link = Some(cursor);
    while let Some(idx) = link {
        trail.push(graph.graph()[crumbs[idx].node].name());
        link = crumbs[idx].from;
    }
    trail.reverse();

    for pair in trail.windows(2) {
        result.add_edge(pair[0], pair[1]);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use petgraph::Direction;
    use petgraph::algo::is_cyclic_directed;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::ModuleGraphBuilder;

    fn build(lines: &[&str]) -> ModuleGraph {
        ModuleGraphBuilder::from_lines(lines.iter().copied()).unwrap()
    }

    fn edge_set(graph: &ModuleGraph) -> HashSet<(String, String)> {
        graph
            .edges()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    fn pairs(edges: &[(&str, &str)]) -> HashSet<(String, String)> {
        edges
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_chain() {
        let graph = build(&["A B", "B C"]);
        let result = extract_paths_to(&graph, "C").unwrap();

        assert_eq!(edge_set(&result), pairs(&[("A", "B"), ("B", "C")]));
        assert_eq!(result.root_name(), Some("A"));
    }

    #[test]
    fn test_two_cycle_back_to_root_yields_no_edges() {
        let graph = build(&["A B", "B A"]);
        let mut extractor = PathExtractor::new();
        let result = extractor.extract_paths_to(&graph, "A").unwrap();

        assert_eq!(result.edge_count(), 0);
        assert_eq!(result.root_name(), Some("A"));
        assert_eq!(extractor.cycles_cut(), 1);
    }

    #[test]
    fn test_unknown_target_fails() {
        let graph = build(&["A B", "B C"]);
        let err = extract_paths_to(&graph, "Z").unwrap_err();

        match err {
            ModGraphError::TargetNotFound { target } => assert_eq!(target, "Z"),
            other => panic!("Expected TargetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_graph_has_no_targets() {
        let graph = ModuleGraph::new();
        assert!(matches!(
            extract_paths_to(&graph, "A"),
            Err(ModGraphError::TargetNotFound { .. })
        ));
    }

    #[test]
    fn test_known_but_unreachable_target() {
        let graph = build(&["A B", "C D"]);
        let result = extract_paths_to(&graph, "D").unwrap();

        assert_eq!(result.edge_count(), 0);
        assert_eq!(result.node_count(), 1);
        assert!(!result.exists("D"));
    }

    #[test]
    fn test_single_path_ignores_side_branches() {
        let graph = build(&["A B", "A X", "B C", "X Y", "C D", "B Z"]);
        let result = extract_paths_to(&graph, "D").unwrap();

        assert_eq!(
            edge_set(&result),
            pairs(&[("A", "B"), ("B", "C"), ("C", "D")])
        );
        assert!(!result.exists("X"));
        assert!(!result.exists("Z"));
    }

    #[test]
    fn test_independent_paths_sum_edges() {
        let graph = build(&["A B1", "B1 B2", "B2 T", "A C1", "C1 T", "A N", "N M"]);
        let mut extractor = PathExtractor::new();
        let result = extractor.extract_paths_to(&graph, "T").unwrap();

        assert_eq!(result.edge_count(), 3 + 2);
        assert_eq!(extractor.paths_found(), 2);
    }

    #[test]
    fn test_shared_prefix_is_not_duplicated() {
        let graph = build(&["A B", "B C", "B D", "C T", "D T"]);
        let mut extractor = PathExtractor::new();
        let result = extractor.extract_paths_to(&graph, "T").unwrap();

        assert_eq!(extractor.paths_found(), 2);
        assert_eq!(result.edge_count(), 5);
        assert_eq!(
            edge_set(&result),
            pairs(&[("A", "B"), ("B", "C"), ("B", "D"), ("C", "T"), ("D", "T")])
        );
    }

    #[test]
    fn test_cycles_inside_paths_are_cut() {
        let graph = build(&["A B", "B C", "C B", "C D"]);
        let mut extractor = PathExtractor::new();
        let result = extractor.extract_paths_to(&graph, "D").unwrap();

        assert_eq!(
            edge_set(&result),
            pairs(&[("A", "B"), ("B", "C"), ("C", "D")])
        );
        assert!(extractor.cycles_cut() >= 1);
        assert!(!is_cyclic_directed(result.graph()));
    }

    #[test]
    fn test_paths_through_target_continue() {
        // T -> U -> T loops back through the target
        let graph = build(&["A T", "T U", "U T", "U V"]);
        let result = extract_paths_to(&graph, "T").unwrap();

        assert_eq!(edge_set(&result), pairs(&[("A", "T")]));
    }

    #[test]
    fn test_output_paths_run_from_root_to_target() {
        let graph = build(&[
            "r a", "r b", "a c", "b c", "c t", "a t", "b x", "x b", "t r",
        ]);
        let result = extract_paths_to(&graph, "t").unwrap();
        let inner = result.graph();

        assert!(!is_cyclic_directed(inner));
        let root = result.root().unwrap();
        let target = result.index_of("t").unwrap();
        for idx in inner.node_indices() {
            if idx != root {
                assert!(
                    inner.neighbors_directed(idx, Direction::Incoming).count() > 0,
                    "{} has no predecessor",
                    inner[idx].name()
                );
            }
            if idx != target {
                assert!(
                    inner.neighbors_directed(idx, Direction::Outgoing).count() > 0,
                    "{} leads nowhere",
                    inner[idx].name()
                );
            }
        }
        assert!(!result.exists("x"));
    }

    #[test]
    fn test_merged_trails_may_cross_each_other() {
        // r-a-c-t and r-b-c-a-t are both simple but meet with opposite
        // orientation between a and c
        let graph = build(&["r a", "r b", "a c", "b c", "c a", "c t", "a t"]);
        let mut extractor = PathExtractor::new();
        let result = extractor.extract_paths_to(&graph, "t").unwrap();

        let a = result.index_of("a").unwrap();
        let c = result.index_of("c").unwrap();
        assert_eq!(extractor.paths_found(), 4);
        assert!(result.graph().find_edge(a, c).is_some());
        assert!(result.graph().find_edge(c, a).is_some());
    }

    #[test]
    fn test_source_graph_is_untouched() {
        let graph = build(&["A B", "B C", "A C"]);
        let before = edge_set(&graph);
        let _ = extract_paths_to(&graph, "B").unwrap();

        assert_eq!(edge_set(&graph), before);
    }

    #[test]
    fn test_extractor_state_resets_between_calls() {
        let graph = build(&["A B", "B A", "A C"]);
        let mut extractor = PathExtractor::new();

        extractor.extract_paths_to(&graph, "C").unwrap();
        let first = (extractor.paths_found(), extractor.cycles_cut());
        extractor.extract_paths_to(&graph, "C").unwrap();

        assert_eq!((extractor.paths_found(), extractor.cycles_cut()), first);
    }
}
