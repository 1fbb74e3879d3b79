// Domain layer: article/settings models and the ports (traits) the services depend on.

pub mod model;
pub mod ports;
