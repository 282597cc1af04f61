use grid_util::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::char_grid::CharGrid;
use crate::{is_traversable, N_NEIGHBOURS};

/// Dense node index, assigned in row-major discovery order.
pub type NodeId = usize;

/// Offsets probed for neighbours, in order: up, down, left, right.
const PROBES: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A traversable cell of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub marker: char,
}

/// [MapGraph] is the graph of traversable cells of a [CharGrid]. Nodes live in a flat arena indexed
/// by [NodeId], adjacency is stored in fixed [SmallVec] slots and coordinates map to ids through a
/// dense lookup table. Connected components are computed once with a [UnionFind] so reachability
/// can be answered without searching.
///
/// If a marker occurs at several cells only the first one in row-major order is ever resolved by
/// [find_first_of](Self::find_first_of); callers naming duplicated markers get that cell silently.
#[derive(Clone, Debug)]
pub struct MapGraph {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    neighbours: Vec<SmallVec<[NodeId; N_NEIGHBOURS]>>,
    locations: Vec<Option<NodeId>>,
    components: UnionFind<NodeId>,
}

impl MapGraph {
    pub fn new(grid: &CharGrid) -> MapGraph {
        let width = grid.width();
        let height = grid.height();
        let mut nodes = Vec::new();
        let mut locations = vec![None; width * height];
        for (y, x) in iproduct!(0..height as i32, 0..width as i32) {
            if let Some(marker) = grid.get(x, y).filter(|&c| is_traversable(c)) {
                let id = nodes.len();
                nodes.push(Node {
                    id,
                    pos: Point::new(x, y),
                    marker,
                });
                locations[y as usize * width + x as usize] = Some(id);
            }
        }
        let mut graph = MapGraph {
            width,
            height,
            nodes,
            neighbours: Vec::new(),
            locations,
            components: UnionFind::new(0),
        };
        graph.neighbours = graph
            .nodes
            .iter()
            .map(|node| graph.probe_neighbours(node.pos))
            .collect();
        graph.generate_components();
        debug!(
            "Built graph with {} nodes and {} edges from a {}x{} grid",
            graph.len(),
            graph.edge_count(),
            width,
            height
        );
        graph
    }
    fn probe_neighbours(&self, pos: Point) -> SmallVec<[NodeId; N_NEIGHBOURS]> {
        PROBES
            .iter()
            .filter_map(|&(dx, dy)| self.find_node_at(pos.x + dx, pos.y + dy))
            .collect()
    }
    /// Links every node with its right and lower neighbour; this covers each edge exactly once.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.nodes.len());
        for node in &self.nodes {
            for (dx, dy) in [(1, 0), (0, 1)] {
                if let Some(other) = self.find_node_at(node.pos.x + dx, node.pos.y + dy) {
                    components.union(node.id, other);
                }
            }
        }
        self.components = components;
    }
    /// All nodes in ascending id order, which is row-major discovery order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(|n| n.len()).sum::<usize>() / 2
    }
    /// Neighbours of `id` in up, down, left, right order. Unknown ids have no neighbours.
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.neighbours
            .get(id)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }
    /// The first node in id order carrying `marker`.
    pub fn find_first_of(&self, marker: char) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|node| node.marker == marker)
            .map(|node| node.id)
    }
    pub fn find_node_at(&self, x: i32, y: i32) -> Option<NodeId> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.locations[y as usize * self.width + x as usize]
    }
    pub fn find_node_at_point(&self, point: Point) -> Option<NodeId> {
        self.find_node_at(point.x, point.y)
    }
    /// Representative of the connected component `id` belongs to.
    pub fn component(&self, id: NodeId) -> Option<usize> {
        (id < self.nodes.len()).then(|| self.components.find(id))
    }
    /// Checks if `a` and `b` are on the same connected component.
    pub fn reachable(&self, a: NodeId, b: NodeId) -> bool {
        a < self.nodes.len() && b < self.nodes.len() && self.components.equiv(a, b)
    }
}

impl From<&CharGrid> for MapGraph {
    fn from(grid: &CharGrid) -> MapGraph {
        MapGraph::new(grid)
    }
}
