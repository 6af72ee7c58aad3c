//! Infrastructure layer: concrete adapters behind the domain ports.

pub mod clock;
pub mod in_memory;
pub mod provider;
