//! Rubric grading core: turns a student essay and one deterministic LLM
//! call into a validated, bounded [`GradingResult`], or a typed
//! [`GradeError`]. Storage, spreadsheet import/export and HTTP surfaces
//! live in the surrounding backend, not here.

pub mod errors;
pub mod essay;
pub mod grader;
pub mod model;
pub mod providers;
pub mod record;
pub mod rubric;

pub use errors::GradeError;
pub use grader::{GenerationConfig, GraderConfig, GraderService};
pub use model::{GradingResult, LlmResponse, RubricResponse};
pub use providers::llm::LlmClient;
pub use rubric::Dimension;
