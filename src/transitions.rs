use log::{debug, info};

use crate::bfs::{bfs_parents, walk_to_root, FxIndexMap};
use crate::map_graph::{MapGraph, NodeId};

/// [TransitionTable] maps every node reached from the root to its next hop along a shortest path
/// towards the root. The root maps to itself; nodes that cannot reach the root have no entry.
/// Entries are kept in breadth-first discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    root: Option<NodeId>,
    next: FxIndexMap<NodeId, NodeId>,
}

impl TransitionTable {
    /// Searches outwards from the first node carrying `target`. An unknown target yields an empty
    /// table.
    pub fn compute(graph: &MapGraph, target: char) -> TransitionTable {
        match graph.find_first_of(target) {
            Some(root) => TransitionTable::from_root(graph, root),
            None => {
                info!("Target {:?} not found in graph, no transitions computed", target);
                TransitionTable::default()
            }
        }
    }
    /// Searches outwards from `root`. An id outside the graph yields an empty table.
    pub fn from_root(graph: &MapGraph, root: NodeId) -> TransitionTable {
        if graph.node(root).is_none() {
            info!("Root {} is not a node of the graph", root);
            return TransitionTable::default();
        }
        let next = bfs_parents(&root, |&id| graph.neighbours(id).iter().copied());
        debug!(
            "Reached {} of {} nodes from root {}",
            next.len(),
            graph.len(),
            root
        );
        TransitionTable {
            root: Some(root),
            next,
        }
    }
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }
    /// The next hop from `id` towards the root.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.next.get(&id).copied()
    }
    pub fn contains(&self, id: NodeId) -> bool {
        self.next.contains_key(&id)
    }
    pub fn len(&self) -> usize {
        self.next.len()
    }
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
    /// `(node, next hop)` pairs in discovery order, starting with the root.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.next.iter().map(|(&id, &next)| (id, next))
    }
    /// The shortest path from `start` to the root, both included. Empty if `start` is unreached.
    pub fn path_from(&self, start: NodeId) -> Vec<NodeId> {
        walk_to_root(&self.next, &start)
    }
    /// Number of hops from `id` to the root.
    pub fn distance(&self, id: NodeId) -> Option<usize> {
        self.path_from(id).len().checked_sub(1)
    }
}

/// Computes the transition table towards the first node carrying `target`.
pub fn compute_transitions(graph: &MapGraph, target: char) -> TransitionTable {
    TransitionTable::compute(graph, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_grid::CharGrid;

    fn graph(text: &str) -> MapGraph {
        MapGraph::new(&CharGrid::parse(text))
    }

    #[test]
    fn single_cell_is_self_loop() {
        let g = graph("X");
        let table = compute_transitions(&g, 'X');
        assert_eq!(table.len(), 1);
        assert_eq!(table.root(), Some(0));
        assert_eq!(table.next(0), Some(0));
        assert_eq!(table.distance(0), Some(0));
    }

    #[test]
    fn missing_target_gives_empty_table() {
        let g = graph("a##\n");
        let table = compute_transitions(&g, 'z');
        assert!(table.is_empty());
        assert_eq!(table.root(), None);
        assert!(TransitionTable::from_root(&g, 42).is_empty());
    }

    #[test]
    fn hops_point_towards_root() {
        // |a###z|
        let g = graph("a###z\n");
        let table = compute_transitions(&g, 'z');
        let a = g.find_first_of('a').unwrap();
        assert_eq!(table.path_from(a), vec![0, 1, 2, 3, 4]);
        assert_eq!(table.distance(a), Some(4));
        assert_eq!(table.next(2), Some(3));
    }

    #[test]
    fn shortest_route_is_taken() {
        // |a####|
        // |#   #|
        // |##z##|
        let g = graph("a####\n#   #\n##z##\n");
        let table = compute_transitions(&g, 'z');
        let a = g.find_first_of('a').unwrap();
        assert_eq!(table.distance(a), Some(4));
        let end = g.find_node_at(4, 0).unwrap();
        assert_eq!(table.distance(end), Some(4));
        let root_entries = table.iter().filter(|(id, next)| id == next).count();
        assert_eq!(root_entries, 1);
    }

    #[test]
    fn disconnected_nodes_have_no_entry() {
        let g = graph("z# #a\n");
        let table = compute_transitions(&g, 'z');
        let a = g.find_first_of('a').unwrap();
        assert!(!table.contains(a));
        assert!(table.path_from(a).is_empty());
        assert_eq!(table.distance(a), None);
        assert_eq!(table.len(), 2);
    }
}
