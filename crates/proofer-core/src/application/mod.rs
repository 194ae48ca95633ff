//! Application layer: use cases, ports, and orchestration.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{BatchOptions, MatrixService, StructureValidator};
