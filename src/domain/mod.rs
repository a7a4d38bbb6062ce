// Domain layer: data model records and ports (interfaces).

pub mod model;
pub mod ports;
