// Domain layer: parameter/metric models and the input-source port.

pub mod model;
pub mod ports;
