//! Keyword-based station resolution.
//!
//! The cheap, local tier of station resolution: scan the message for
//! canonical station names by case-insensitive substring match. Anything
//! this misses (landmarks, misspellings) is for a smarter resolver behind
//! the [`StationResolver`](super::StationResolver) trait.

use crate::domain::StationName;
use crate::network::Network;

use super::StationResolver;

/// Resolves stations by scanning for their names in the message.
pub struct KeywordResolver<'a> {
    network: &'a Network,
}

impl<'a> KeywordResolver<'a> {
    /// Create a resolver over the given network's station names.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// All stations mentioned in the text, ordered by first appearance.
    ///
    /// At equal positions the longer name wins, so "Rajiv Chowk" is not
    /// shadowed by a hypothetical station named "Rajiv".
    pub fn extract_endpoints(&self, text: &str) -> Vec<StationName> {
        let lower = text.to_lowercase();

        let mut found: Vec<(usize, &StationName)> = self
            .network
            .stations()
            .filter_map(|station| {
                lower
                    .find(&station.as_str().to_lowercase())
                    .map(|pos| (pos, station))
            })
            .collect();

        found.sort_by(|(pos_a, name_a), (pos_b, name_b)| {
            pos_a
                .cmp(pos_b)
                .then(name_b.as_str().len().cmp(&name_a.as_str().len()))
        });

        // Drop names that start inside an already-accepted match.
        let mut result: Vec<StationName> = Vec::new();
        let mut covered_until = 0;
        for (pos, station) in found {
            if pos >= covered_until {
                covered_until = pos + station.as_str().len();
                result.push(station.clone());
            }
        }
        result
    }
}

impl StationResolver for KeywordResolver<'_> {
    fn resolve(&self, text: &str) -> Option<StationName> {
        self.extract_endpoints(text).into_iter().next()
    }
}
