//! Exemplar Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Exemplar
//! example scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          exemplar-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateStore, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    exemplar-adapters (Infrastructure)   │
//! │  (LocalTemplateStore, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ExampleName, Manifest, GenerationPlan)│
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exemplar_core::{
//!     application::GenerateService,
//!     domain::{GenerationRequest, ScopeFolder, TemplateKind},
//! };
//!
//! // 1. Describe what to generate
//! let request = GenerationRequest::new(
//!     "My Notes App",
//!     TemplateKind::BundlerOnly,
//!     ScopeFolder::UiDemos,
//! ).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(store, filesystem);
//! service.generate(request, std::path::Path::new(".")).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
