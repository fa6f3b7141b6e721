pub mod config;
pub mod error;
pub mod ir;
pub mod output;
pub mod parse;
pub mod transform;

pub use error::{ConfigError, OutputError, ParseError};

/// A generated file with a path relative to its output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for emitters that produce files from the grouped endpoint data.
pub trait CodeGenerator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn generate(&self, api: &ir::ApiSpec) -> Result<Vec<GeneratedFile>, Self::Error>;
}
