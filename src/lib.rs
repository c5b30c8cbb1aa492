pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, EffectiveConfig};
pub use config::TomlConfig;

pub use crate::core::{resolve, resolve_input, Airport, FlightOutput, FlightsInput, Itinerary, Segment};
pub use utils::error::{FlightError, ResolveError, Result};
