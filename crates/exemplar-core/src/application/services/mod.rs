//! Application services.

mod generate_service;

pub use generate_service::{GenerateService, GenerationReport, KindInfo};
