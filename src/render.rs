use fxhash::FxHashSet;
use itertools::Itertools;
use log::info;

use crate::char_grid::CharGrid;
use crate::map_graph::{MapGraph, Node, NodeId};
use crate::transitions::TransitionTable;
use crate::{FILL, GLYPH_DOWN, GLYPH_LEFT, GLYPH_RIGHT, GLYPH_UP, NO_PATH};

/// The orthogonal step from a node to its next hop. [Step::Stay] only occurs at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Right,
    Left,
    Down,
    Up,
    Stay,
}

impl Step {
    pub fn between(from: &Node, to: &Node) -> Step {
        if to.pos.x > from.pos.x {
            Step::Right
        } else if to.pos.x < from.pos.x {
            Step::Left
        } else if to.pos.y > from.pos.y {
            Step::Down
        } else if to.pos.y < from.pos.y {
            Step::Up
        } else {
            Step::Stay
        }
    }
    /// The glyph for this step; a node that stays in place shows its own `marker`.
    pub fn glyph(self, marker: char) -> char {
        match self {
            Step::Right => GLYPH_RIGHT,
            Step::Left => GLYPH_LEFT,
            Step::Down => GLYPH_DOWN,
            Step::Up => GLYPH_UP,
            Step::Stay => marker,
        }
    }
}

pub fn direction_glyph(from: &Node, to: &Node) -> char {
    Step::between(from, to).glyph(from.marker)
}

/// Glyph shown for node `id`: the direction of its transition, or [NO_PATH] if it has none.
fn transition_glyph(graph: &MapGraph, table: &TransitionTable, id: NodeId) -> char {
    match (graph.node(id), table.next(id).and_then(|next| graph.node(next))) {
        (Some(from), Some(to)) => direction_glyph(from, to),
        _ => NO_PATH,
    }
}

/// Renders every cell of `grid`, replacing nodes for which `show` holds (except `start`) with
/// their transition glyph.
fn render_cells<F>(
    grid: &CharGrid,
    graph: &MapGraph,
    table: &TransitionTable,
    start: NodeId,
    show: F,
) -> String
where
    F: Fn(NodeId) -> bool,
{
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| match graph.find_node_at(x, y) {
                    Some(id) if id != start && show(id) => transition_glyph(graph, table, id),
                    _ => grid.get(x, y).unwrap_or(FILL),
                })
                .collect::<String>()
        })
        .map(|row| row + "\n")
        .join("")
}

fn resolve_start(graph: &MapGraph, start_marker: char) -> Option<NodeId> {
    let start = graph.find_first_of(start_marker);
    if start.is_none() {
        info!("Start {:?} not found in graph, nothing rendered", start_marker);
    }
    start
}

/// Renders the transition of every node towards the root. The start node keeps its marker, nodes
/// without a transition show [NO_PATH] and all other cells are reproduced unchanged. Returns an
/// empty string if `start_marker` is not in the graph.
pub fn render_all_paths(
    grid: &CharGrid,
    graph: &MapGraph,
    table: &TransitionTable,
    start_marker: char,
) -> String {
    match resolve_start(graph, start_marker) {
        Some(start) => render_cells(grid, graph, table, start, |_| true),
        None => String::new(),
    }
}

/// Nodes visited while following transitions from the start towards the root, excluding the root.
/// Empty if the start is unknown or was not reached by the search.
pub fn on_path_set(
    graph: &MapGraph,
    table: &TransitionTable,
    start_marker: char,
) -> FxHashSet<NodeId> {
    let Some(start) = graph.find_first_of(start_marker) else {
        return FxHashSet::default();
    };
    let mut path = table.path_from(start);
    // The last entry of a non-empty path is the root.
    path.pop();
    path.into_iter().collect()
}

/// Renders only the chain of transitions from the start towards the root; nodes off that chain are
/// reproduced unchanged. Returns an empty string if `start_marker` is not in the graph.
pub fn render_single_path(
    grid: &CharGrid,
    graph: &MapGraph,
    table: &TransitionTable,
    start_marker: char,
) -> String {
    let Some(start) = resolve_start(graph, start_marker) else {
        return String::new();
    };
    if let Some(root) = table.root() {
        if !graph.reachable(start, root) {
            info!("Start {} is not connected to root {}", start, root);
        }
    }
    let on_path = on_path_set(graph, table, start_marker);
    render_cells(grid, graph, table, start, |id| on_path.contains(&id))
}
