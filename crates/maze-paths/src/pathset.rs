//! Path storage for the solver and the union of optimal tiles.
//!
//! Instead of copying the path into every frontier entry, each discovered
//! state gets one arena [`Node`] holding the indices of every predecessor that
//! reaches it at its best cost. The predecessor links form a DAG rooted at the
//! start; walking it backwards from the goal nodes recovers any optimal path.

use std::collections::{BTreeSet, HashMap};

use maze_core::{Point, State};

use crate::Cost;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) state: State,
    /// Best known cost, `None` until the node is first relaxed.
    pub(crate) g: Option<Cost>,
    pub(crate) preds: Vec<usize>,
    pub(crate) settled: bool,
}

/// Index-addressed node storage, one node per discovered state.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<Node>,
    index: HashMap<State, usize>,
}

impl Arena {
    /// Index of the node for `state`, creating it on first sight.
    pub(crate) fn intern(&mut self, state: State) -> usize {
        if let Some(&i) = self.index.get(&state) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(Node {
            state,
            g: None,
            preds: Vec::new(),
            settled: false,
        });
        self.index.insert(state, i);
        i
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// One path from the root to `goal`, following the first predecessor of
    /// every node. Consecutive duplicates (turns in place) are collapsed.
    pub(crate) fn witness(&self, goal: usize) -> Vec<Point> {
        let mut path: Vec<Point> = Vec::new();
        let mut ci = Some(goal);
        while let Some(i) = ci {
            let node = &self.nodes[i];
            if path.last() != Some(&node.state.pos) {
                path.push(node.state.pos);
            }
            ci = node.preds.first().copied();
        }
        path.reverse();
        path
    }

    /// Every position on any predecessor chain leading to one of `goals`.
    pub(crate) fn tiles(&self, goals: &[usize]) -> PathSet {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = Vec::with_capacity(goals.len());
        let mut tiles = BTreeSet::new();

        for &g in goals {
            if !seen[g] {
                seen[g] = true;
                stack.push(g);
            }
        }

        while let Some(ci) = stack.pop() {
            let node = &self.nodes[ci];
            tiles.insert(node.state.pos);
            for &pi in &node.preds {
                if !seen[pi] {
                    seen[pi] = true;
                    stack.push(pi);
                }
            }
        }

        PathSet { tiles }
    }
}

/// The distinct positions lying on at least one minimum-cost path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    tiles: BTreeSet<Point>,
}

impl PathSet {
    /// Number of distinct tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.tiles.contains(&p)
    }

    /// Tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles.iter().copied()
    }

    /// The union of all optimal paths' positions.
    pub fn union_points(&self) -> &BTreeSet<Point> {
        &self.tiles
    }
}

impl FromIterator<Point> for PathSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
