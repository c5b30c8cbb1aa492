// Domain layer: flight models and ports. No dependencies beyond std/serde and the shared error types.

pub mod model;
pub mod ports;
