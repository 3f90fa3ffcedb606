pub mod delete;
pub mod list;
pub mod report;
pub mod stats;
pub mod submit;
pub mod version;
