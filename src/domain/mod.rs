// Domain layer: the agency record model and the input port used during registration.

pub mod model;
pub mod ports;
