pub mod resolver;

pub use crate::domain::model::{Airport, FlightOutput, FlightsInput, Itinerary, Segment};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{ResolveError, Result};
pub use resolver::{exclusive_member, resolve, resolve_input};
