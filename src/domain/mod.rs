// Domain layer: ping results and the configuration port. No I/O lives here.

pub mod model;
pub mod ports;
