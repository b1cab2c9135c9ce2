use std::collections::BinaryHeap;

use maze_core::{Point, State};

use crate::error::PathError;
use crate::pathset::{Arena, PathSet};
use crate::traits::{Edge, StateGraph};
use crate::Cost;

/// Frontier entry, ordered by `(cost, seq)` for use in `BinaryHeap`.
///
/// `seq` is the push order, so equal-cost entries pop first-in first-out.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Frontier {
    cost: Cost,
    seq: u64,
    idx: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries pushed onto the frontier.
    pub pushed: usize,
    /// States settled (popped with their final cost).
    pub settled: usize,
    /// Popped entries discarded because their state was already settled or
    /// had since been reached more cheaply.
    pub stale: usize,
    /// Distinct states discovered.
    pub discovered: usize,
    /// Edges dropped because the path cost through them exceeds `Cost::MAX`.
    pub overflowed: usize,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Minimum total cost from the start state to any goal state.
    pub cost: Cost,
    /// One minimum-cost route, start and goal included. Turns in place do
    /// not repeat a position.
    pub witness: Vec<Point>,
    /// Every tile on any minimum-cost route.
    pub paths: PathSet,
    /// The goal states settled at [`cost`](Self::cost), in settle order.
    pub end_states: Vec<State>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of distinct tiles lying on some optimal route.
    pub fn tile_count(&self) -> usize {
        self.paths.len()
    }
}

/// Find the cheapest way from `start` to any state positioned on `goal`,
/// together with the union of all equally cheap routes.
pub fn solve<G: StateGraph + ?Sized>(
    graph: &G,
    start: State,
    goal: Point,
) -> Result<Solution, PathError> {
    solve_observed(graph, start, goal, |_, _| {})
}

/// Like [`solve`], calling `on_settle` once per settled state in pop order.
///
/// Costs passed to `on_settle` never decrease over a run.
pub fn solve_observed<G, F>(
    graph: &G,
    start: State,
    goal: Point,
    mut on_settle: F,
) -> Result<Solution, PathError>
where
    G: StateGraph + ?Sized,
    F: FnMut(State, Cost),
{
    let mut arena = Arena::default();
    let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
    let mut stats = SearchStats::default();
    let mut seq: u64 = 0;

    let si = arena.intern(start);
    arena.nodes[si].g = Some(0);
    open.push(Frontier {
        cost: 0,
        seq,
        idx: si,
    });
    seq += 1;
    stats.pushed += 1;

    let mut best: Option<Cost> = None;
    let mut goals: Vec<usize> = Vec::new();
    let mut nbuf: Vec<Edge> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        let cost = current.cost;

        // Skip stale entries.
        {
            let cn = &arena.nodes[ci];
            if cn.settled || cn.g.is_some_and(|g| cost > g) {
                stats.stale += 1;
                continue;
            }
        }
        if best.is_some_and(|b| cost > b) {
            break;
        }

        arena.nodes[ci].settled = true;
        stats.settled += 1;
        let state = arena.nodes[ci].state;
        log::trace!("settled {state} at cost {cost}");
        on_settle(state, cost);

        if state.pos == goal {
            best.get_or_insert(cost);
            goals.push(ci);
            continue;
        }

        nbuf.clear();
        graph.neighbors(state, &mut nbuf);

        for edge in &nbuf {
            let ni = arena.intern(edge.to);
            let n = &mut arena.nodes[ni];
            if n.settled {
                continue;
            }
            let Some(tentative) = cost.checked_add(edge.cost) else {
                log::warn!("dropping edge {state} -> {}: cost overflows", edge.to);
                stats.overflowed += 1;
                continue;
            };
            let known = n.g;
            match known {
                Some(g) if tentative > g => {}
                Some(g) if tentative == g => n.preds.push(ci),
                _ => {
                    n.g = Some(tentative);
                    n.preds.clear();
                    n.preds.push(ci);
                    open.push(Frontier {
                        cost: tentative,
                        seq,
                        idx: ni,
                    });
                    seq += 1;
                    stats.pushed += 1;
                }
            }
        }
    }
    stats.discovered = arena.len();

    let (Some(cost), Some(&first)) = (best, goals.first()) else {
        log::debug!(
            "no path from {start} to {goal}: {} states settled",
            stats.settled
        );
        return Err(PathError::NoPath {
            start,
            goal,
            settled: stats.settled,
        });
    };

    let witness = arena.witness(first);
    let paths = arena.tiles(&goals);
    let end_states = goals.iter().map(|&i| arena.nodes[i].state).collect();
    log::debug!(
        "solved {start} -> {goal}: cost {cost}, {} optimal tiles, {} settled, {} stale",
        paths.len(),
        stats.settled,
        stats.stale
    );

    Ok(Solution {
        cost,
        witness,
        paths,
        end_states,
        stats,
    })
}
