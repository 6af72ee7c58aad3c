//! Domain layer: entities, value objects, and the ports the use cases
//! depend on.

pub mod payment;
pub mod ports;
pub mod user;
