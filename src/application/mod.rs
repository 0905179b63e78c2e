// Application layer - errors and derived reports shared by the CLI and exporters

pub mod error;
pub mod reporting;

pub use error::*;
pub use reporting::*;
