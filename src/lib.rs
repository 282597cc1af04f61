//! # grid_transitions
//!
//! Shortest paths on ASCII grid maps. A map is plain text in which `#` marks a corridor cell and
//! letters mark named locations; every other character is impassable terrain. The map is turned
//! into a graph of traversable cells with up to four orthogonal neighbours each, and a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) rooted at a target
//! location records for every reachable cell the neighbour to step to next. The resulting
//! [TransitionTable] can be rendered back onto the map as direction glyphs, either for every cell
//! or only along the path from a chosen start.
//!
//! ```
//! use grid_transitions::PathMap;
//!
//! let map = PathMap::parse("a##\n  #\nz##\n");
//! let table = map.transitions_to('z');
//! assert_eq!(map.render_path(&table, 'a'), "a>V\n  V\nz<<\n");
//! ```
//!
//! Markers are resolved to the first matching cell in row-major order, so a letter that occurs
//! several times only ever refers to its top-left-most occurrence.
pub mod bfs;
pub mod char_grid;
pub mod map_graph;
pub mod render;
pub mod transitions;

use core::fmt;
use grid_util::Point;

pub use char_grid::CharGrid;
pub use map_graph::{MapGraph, Node, NodeId};
pub use render::{direction_glyph, on_path_set, render_all_paths, render_single_path, Step};
pub use transitions::{compute_transitions, TransitionTable};

/// Corridor cell.
pub const CORRIDOR: char = '#';
/// Padding for rows shorter than the widest one. Not traversable.
pub const FILL: char = ' ';
/// Shown for nodes that have no path to the root.
pub const NO_PATH: char = '?';
pub const GLYPH_RIGHT: char = '>';
pub const GLYPH_LEFT: char = '<';
pub const GLYPH_DOWN: char = 'V';
pub const GLYPH_UP: char = '^';
/// Inline capacity of the adjacency slots; nodes have at most four orthogonal neighbours.
pub const N_NEIGHBOURS: usize = 4;

/// Whether a cell holding `c` becomes a node: letters and [CORRIDOR].
pub fn is_traversable(c: char) -> bool {
    c == CORRIDOR || c.is_ascii_alphabetic()
}

/// [PathMap] bundles a parsed [CharGrid] with the [MapGraph] built from it, and is the entry point
/// for going from map text to rendered paths.
#[derive(Clone, Debug)]
pub struct PathMap {
    grid: CharGrid,
    graph: MapGraph,
}

impl PathMap {
    pub fn parse(text: &str) -> PathMap {
        let grid = CharGrid::parse(text);
        let graph = MapGraph::new(&grid);
        PathMap { grid, graph }
    }
    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }
    pub fn graph(&self) -> &MapGraph {
        &self.graph
    }
    /// Computes the transitions towards the first cell carrying `target`.
    pub fn transitions_to(&self, target: char) -> TransitionTable {
        TransitionTable::compute(&self.graph, target)
    }
    /// The map as parsed, padded to full width.
    pub fn render_map(&self) -> String {
        self.grid.to_string()
    }
    pub fn render_all_paths(&self, table: &TransitionTable, start: char) -> String {
        render_all_paths(&self.grid, &self.graph, table, start)
    }
    pub fn render_path(&self, table: &TransitionTable, start: char) -> String {
        render_single_path(&self.grid, &self.graph, table, start)
    }
    /// The cells from `start` to the root of `table`, both included. Empty if `start` is unknown
    /// or cannot reach the root.
    pub fn path_points(&self, table: &TransitionTable, start: char) -> Vec<Point> {
        self.graph
            .find_first_of(start)
            .map(|id| table.path_from(id))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| self.graph.node(id).map(|node| node.pos))
            .collect()
    }
}

impl fmt::Display for PathMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
