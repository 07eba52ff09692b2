// Domain layer: record shapes and the ports the engine depends on.

pub mod model;
pub mod ports;
