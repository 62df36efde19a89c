// Domain layer: launch records and the ports used to obtain them.

pub mod model;
pub mod ports;
