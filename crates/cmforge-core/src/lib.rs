//! Cmforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cmforge
//! CMake project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cmforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (PromptService, ScaffoldService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Console, Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cmforge-adapters (Infrastructure)   │
//! │   (StdConsole, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectConfig, cmake templates, plan) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cmforge_core::{
//!     application::{PromptService, ScaffoldService},
//!     domain::ProjectConfig,
//! };
//!
//! // 1. Collect a configuration interactively (console adapter injected)
//! let prompts = PromptService::new(console);
//! let config = prompts.collect_config()?;
//!
//! // 2. Materialise the starter project (filesystem adapter injected)
//! let service = ScaffoldService::new(filesystem);
//! service.scaffold(&config, "./output")?;
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
        PromptService, ScaffoldService,
        ports::{Console, Filesystem},
    };
    pub use crate::domain::{Answer, ProjectConfig, ProjectStructure};
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
