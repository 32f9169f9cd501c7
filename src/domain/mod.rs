// Domain layer: staging models and ports (interfaces).

pub mod model;
pub mod ports;
