// Domain layer: roster models and the ports roster sources implement.

pub mod model;
pub mod ports;
