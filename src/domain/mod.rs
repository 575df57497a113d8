// Domain layer: cart models and ports (interfaces). No dependencies beyond serde/thiserror.

pub mod model;
pub mod ports;
