//! Shortest-path search over the metro network.
//!
//! Uniform-cost (Dijkstra) search where the unit of visitation is the pair
//! (station, arrival line), not the station alone. Continuing on the
//! current line and switching lines carry different future cost, so two
//! arrivals at the same station on different lines are genuinely different
//! states; a plain visited-stations set would misprice every route through
//! an interchange.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::{LineId, StationName};
use crate::network::Network;

use super::config::RoutingConfig;
use super::penalty::InterchangePenalty;

/// A station together with the line the traveller arrived on.
///
/// The line is `None` only at the origin, before any hop has been taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    station: StationName,
    line: Option<LineId>,
}

/// Heap entry ordered by cumulative cost, cheapest first.
struct QueueEntry {
    cost: i64,
    state: SearchState,
    parent: Option<SearchState>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the cheapest entry first.
        other.cost.cmp(&self.cost)
    }
}

/// Cost-aware path finder over an immutable network.
pub struct PathFinder<'a> {
    network: &'a Network,
    config: &'a RoutingConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over the given network.
    pub fn new(network: &'a Network, config: &'a RoutingConfig) -> Self {
        Self { network, config }
    }

    /// Find the lowest-cost station sequence from `start` to `end`.
    ///
    /// Every hop costs the configured per-hop base cost; a hop whose
    /// common-line set does not contain the arrival line additionally
    /// costs `penalty`. Returns `None` when either endpoint is unknown or
    /// no connecting route exists; both are ordinary outcomes, not errors.
    pub fn find_path(
        &self,
        start: &StationName,
        end: &StationName,
        penalty: InterchangePenalty,
    ) -> Option<Vec<StationName>> {
        if !self.network.contains(start) || !self.network.contains(end) {
            return None;
        }
        if start == end {
            return Some(vec![start.clone()]);
        }

        let mut queue = BinaryHeap::new();
        // Best cost pushed so far per state; emulates decrease-key.
        let mut pushed: HashMap<SearchState, i64> = HashMap::new();
        // Parent pointers, recorded when a state is settled. Doubles as
        // the settled set.
        let mut parents: HashMap<SearchState, Option<SearchState>> = HashMap::new();

        let origin = SearchState {
            station: start.clone(),
            line: None,
        };
        pushed.insert(origin.clone(), 0);
        queue.push(QueueEntry {
            cost: 0,
            state: origin,
            parent: None,
        });

        // Cheapest completion seen so far, over all arrival-line states at
        // the goal. The first settle of the goal is not necessarily the
        // cheapest one, so keep scanning until the queue front is worse.
        let mut best: Option<(i64, SearchState)> = None;

        while let Some(entry) = queue.pop() {
            if let Some((best_cost, _)) = &best {
                if entry.cost > *best_cost {
                    break;
                }
            }

            if parents.contains_key(&entry.state) {
                continue;
            }
            parents.insert(entry.state.clone(), entry.parent);

            if &entry.state.station == end {
                let cheaper = best
                    .as_ref()
                    .is_none_or(|(best_cost, _)| entry.cost < *best_cost);
                if cheaper {
                    best = Some((entry.cost, entry.state.clone()));
                }
                continue;
            }

            for neighbour in self.network.neighbours(&entry.state.station) {
                let common = self.network.common_lines(&entry.state.station, neighbour);

                let mut move_cost = self.config.hop_cost_mins;
                let next_line = match &entry.state.line {
                    // Continuing on the arrival line is free; the line
                    // sticks for the next state.
                    Some(line) if common.contains(line) => line.clone(),
                    // Line change (or unknown metadata): pay the penalty
                    // and board the smallest common line so the pick is
                    // deterministic.
                    Some(_) => {
                        move_cost += penalty.mins();
                        common
                            .iter()
                            .next()
                            .cloned()
                            .unwrap_or_else(LineId::unknown)
                    }
                    // First hop from the origin: board whichever line
                    // serves the edge, no charge.
                    None => common
                        .iter()
                        .next()
                        .cloned()
                        .unwrap_or_else(LineId::unknown),
                };

                let next_state = SearchState {
                    station: neighbour.clone(),
                    line: Some(next_line),
                };
                if parents.contains_key(&next_state) {
                    continue;
                }

                let next_cost = entry.cost + move_cost;
                let improves = pushed
                    .get(&next_state)
                    .is_none_or(|&seen| next_cost < seen);
                if improves {
                    pushed.insert(next_state.clone(), next_cost);
                    queue.push(QueueEntry {
                        cost: next_cost,
                        state: next_state,
                        parent: Some(entry.state.clone()),
                    });
                }
            }
        }

        let (_, goal_state) = best?;
        Some(reconstruct(&parents, goal_state))
    }
}

/// Walk parent pointers back from the goal state to the origin.
fn reconstruct(
    parents: &HashMap<SearchState, Option<SearchState>>,
    goal: SearchState,
) -> Vec<StationName> {
    let mut path = vec![goal.station.clone()];
    let mut current = goal;
    while let Some(Some(parent)) = parents.get(&current) {
        path.push(parent.station.clone());
        current = parent.clone();
    }
    path.reverse();
    path
}
