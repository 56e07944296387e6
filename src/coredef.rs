pub mod error;
pub mod log;
pub mod options;
pub mod types;
