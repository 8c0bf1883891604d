//! Application layer - Use cases and ports
//!
//! Coordinates the domain migration logic over documents supplied by the
//! outbound store port. Services depend on ports, never on concrete
//! adapters.

pub mod ports;
pub mod services;
