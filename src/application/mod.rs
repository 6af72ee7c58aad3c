//! Application layer: the use cases orchestrating the domain rules.

pub mod processor;
pub mod service;
pub mod transition;
pub mod validator;
