//! Route planning over the metro network.
//!
//! The pipeline is: [`PathFinder`] produces a station sequence, [`segment`]
//! turns it into a structured [`crate::domain::Itinerary`], and the render
//! module formats that for the rider. All of it is synchronous and
//! side-effect-free; the only shared data is the immutable network.

mod config;
mod criteria;
mod penalty;
mod search;
mod segment;

pub use config::RoutingConfig;
pub use criteria::{InvalidCriteria, RoutingCriteria};
pub use penalty::{InterchangePenalty, InvalidPenalty};
pub use search::PathFinder;
pub use segment::segment;
