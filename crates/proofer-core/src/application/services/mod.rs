//! Application services: the use-case orchestration layer.

pub mod cleanup;
pub mod conflict;
pub mod matrix_service;
pub mod structure;

pub use matrix_service::{BatchOptions, MatrixService};
pub use structure::StructureValidator;
