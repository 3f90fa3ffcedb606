//! Structured-output analysis backed by the Gemini generateContent API

pub mod gemini;
pub mod prompts;
pub mod schema;

pub use gemini::GeminiClient;
pub use prompts::{build_classification_prompt, build_report_prompt, project_items, ReportInputItem};
pub use schema::{classification_schema, report_schema};
