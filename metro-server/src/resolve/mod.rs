//! Free-text station resolution.
//!
//! The routing core never invents station names: whatever resolves a
//! rider's message to canonical stations sits behind [`StationResolver`].
//! The built-in [`KeywordResolver`] handles exact-name mentions; an
//! LLM-backed matcher for landmark-style input ("near India Gate") is an
//! external collaborator implementing the same trait.

mod keyword;

pub use keyword::KeywordResolver;

use crate::domain::StationName;

/// Maps free text to a canonical station, or signals "unknown".
///
/// Implementations must only return stations that exist in the network;
/// an unresolved input is turned back to the caller as a request for
/// clarification, never guessed.
pub trait StationResolver {
    /// Resolve free text to a best-guess canonical station.
    fn resolve(&self, text: &str) -> Option<StationName>;
}
