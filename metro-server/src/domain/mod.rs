//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod itinerary;
mod line;
mod station;

pub use itinerary::{Itinerary, Step};
pub use line::{InvalidLineId, LineId};
pub use station::{InvalidStationName, StationName};
