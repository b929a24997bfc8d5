// Domain layer: the record model and the ports around it. No dependencies
// beyond std, serde, and chrono.

pub mod model;
pub mod ports;
