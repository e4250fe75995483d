pub mod annotate;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod lang;
pub mod reporting;

pub use annotate::Annotator;
pub use config::Config;
pub use error::{DocstampError, Result};
