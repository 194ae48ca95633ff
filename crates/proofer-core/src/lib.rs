//! Proofer Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Proofer
//! template test driver, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          proofer-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (MatrixService, StructureValidator)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Engine, SpecStore) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    proofer-adapters (Infrastructure)    │
//! │ (LocalFilesystem, CookiecutterEngine)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (OptionSchema, ConfigSet, RunOutcome)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use proofer_core::{
//!     application::{BatchOptions, MatrixService},
//!     domain::ExistsStrategy,
//! };
//!
//! // 1. Build the service (with injected adapters)
//! let service = MatrixService::new(filesystem, engine, specs, reporter);
//!
//! // 2. Load configurations and run the batch
//! let configs = service.load_configs().unwrap();
//! let options = BatchOptions::new("template", "tmp", ExistsStrategy::Clean);
//! let summary = service.run(&configs, None, &options).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchOptions, MatrixService, StructureValidator,
        ports::{EngineOutput, EngineRequest, Filesystem, Reporter, SpecStore, TemplateEngine},
    };
    pub use crate::domain::{
        BatchSummary, ConfigSet, ExistsStrategy, NamedConfig, OptionSchema, OptionSpec,
        ProceedDecision, RunOutcome, StructureReport, slug,
    };
    pub use crate::error::{ProoferError, ProoferResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
