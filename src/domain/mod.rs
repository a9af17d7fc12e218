// Domain layer: value types and the HTTP port. Nothing here talks to the network.

pub mod model;
pub mod ports;
