//! Durable storage for feedback items and the batch report

mod io;
mod json_store;
mod paths;

pub use io::{atomic_write, read_optional, remove_if_exists};
pub use json_store::JsonFileStore;
pub use paths::{Paths, DATA_DIR_VAR};
