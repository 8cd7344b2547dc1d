//! Sample sources for accessing verified `.properties` test files
//!
//! These samples are the canonical inputs for parser and formatter tests. Each
//! one targets a corner of the format; keep the list below in sync with
//! `docs/samples/`.

use super::{process_file, ProcessingError, ProcessingSpec};
use crate::properties::lexer::lex;
use std::fs;
use std::path::PathBuf;

/// Available sample files (canonical sources)
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-pairs.properties",
    "010-comments.properties",
    "020-escapes.properties",
    "030-continuations.properties",
    "040-edge-cases.properties",
    "050-malformed-escape.properties",
];

/// Format options for sample content
#[derive(Debug, Clone, PartialEq)]
pub enum SampleFormat {
    /// Raw string content
    String,
    /// Lexed tokens with spans, as JSON
    Tokens,
    /// Processed content using the specified format string
    Processed(String),
}

/// Main interface for accessing properties sample files
pub struct PropertiesSamples;

impl PropertiesSamples {
    /// Get the path to the samples directory
    fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs/samples")
    }

    /// Get the full path to a sample file
    pub fn sample_path(filename: &str) -> PathBuf {
        Self::samples_dir().join(filename)
    }

    /// Validate that a sample file exists and is available
    fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(ProcessingError::FileNotFound(format!(
                "sample '{}' is not available; available samples: {:?}",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    /// Get sample content in the specified format
    pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;

        let path = Self::sample_path(filename);

        match format {
            SampleFormat::String => Ok(fs::read_to_string(&path)?),
            SampleFormat::Tokens => {
                let content = fs::read_to_string(&path)?;
                Ok(serde_json::to_string_pretty(&lex(&content))?)
            }
            SampleFormat::Processed(format_str) => {
                let spec = ProcessingSpec::from_string(&format_str)?;
                process_file(&path, &spec)
            }
        }
    }

    /// Get sample content as raw string
    pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::String)
    }

    /// Get sample content as tokens (JSON format)
    pub fn get_tokens(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Tokens)
    }

    /// Get sample content processed with the specified format
    pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
    }

    /// List all available sample files
    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }
}
