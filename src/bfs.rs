//! This module implements an unweighted breadth-first search that records, for every node it
//! reaches, the node it was discovered from. Searching outwards from a destination turns this
//! parent map into a table of next hops towards that destination.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Performs a breadth-first search from `root`, returning a map from every reached node to the node
/// it was first discovered from. The root maps to itself.
///
/// The map is kept in insertion order, so the entries appear in discovery order and the map itself
/// serves as the FIFO frontier: the search walks it by index until no unexpanded entries are left.
/// A node is written once, when first discovered, which makes ties between equally short paths
/// resolve to whichever was found first through the order `successors` yields nodes in.
pub fn bfs_parents<N, FN, IN>(root: &N, mut successors: FN) -> FxIndexMap<N, N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    let mut parents: FxIndexMap<N, N> = FxIndexMap::default();
    parents.insert(root.clone(), root.clone());
    let mut cursor = 0;
    while let Some((node, _)) = parents.get_index(cursor) {
        let node = node.clone();
        for successor in successors(&node) {
            if let Vacant(e) = parents.entry(successor) {
                e.insert(node.clone());
            }
        }
        cursor += 1;
    }
    parents
}

/// Follows parent links from `start` until the self-referencing root, returning every node
/// visited including both ends. Empty if `start` was never reached.
pub fn walk_to_root<N>(parents: &FxIndexMap<N, N>, start: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    std::iter::successors(
        parents.contains_key(start).then(|| start.clone()),
        |node| parents.get(node).filter(|&next| next != node).cloned(),
    )
    .collect()
}
