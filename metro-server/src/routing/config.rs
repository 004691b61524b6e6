//! Routing configuration.

use chrono::Duration;

/// Configuration parameters for route search.
///
/// All costs are whole minutes. The network model carries no per-edge
/// travel times, so every hop costs the same `hop_cost_mins`; the two
/// penalty values are what the `fastest` and `comfort` criteria map to.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Cost of travelling one hop between adjacent stations (minutes).
    pub hop_cost_mins: i64,

    /// Interchange penalty for the `fastest` criterion (minutes).
    pub fastest_penalty_mins: i64,

    /// Interchange penalty for the `comfort` criterion (minutes).
    /// High enough that the search trades several extra hops for staying
    /// on the same line.
    pub comfort_penalty_mins: i64,
}

impl RoutingConfig {
    /// Returns the hop cost as a Duration.
    pub fn hop_cost(&self) -> Duration {
        Duration::minutes(self.hop_cost_mins)
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            hop_cost_mins: 2,
            fastest_penalty_mins: 2,
            comfort_penalty_mins: 15,
        }
    }
}
