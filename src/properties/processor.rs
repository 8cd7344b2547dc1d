//! File processing API for properties files
//!
//! This module provides an extensible API for processing properties files with
//! different stages (token, ast, raw) and formats (simple, json, tag, ...).
//! A processing spec is written `<stage>-<format>`, for example `token-json`
//! or `ast-treeviz`; `raw` alone re-serializes the parsed document.
//!
//! # Sample Sources
//!
//! The [`samples`] module provides access to verified `.properties` files for
//! testing. Tests should load content from there instead of inlining it.
//!
//! ```rust,ignore
//! use javaprops::properties::processor::samples::PropertiesSamples;
//!
//! let content = PropertiesSamples::get_string("000-pairs.properties")?;
//! let tree = PropertiesSamples::get_processed("000-pairs.properties", "ast-treeviz")?;
//! ```

pub mod samples;

use serde::Serialize;
use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

use crate::properties::ast::{ParseError, RawText};
use crate::properties::formats::{serialize_ast_tag, to_treeviz_str};
use crate::properties::lexer::{lex, Token};
use crate::properties::parser::parse_document;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    /// The parsed document written back out
    Raw,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    /// Plain text, used by the raw stage
    Text,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-tag"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        if format_str == "raw" {
            return Ok(ProcessingSpec {
                stage: ProcessingStage::Raw,
                format: OutputFormat::Text,
            });
        }

        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json)
            | (
                ProcessingStage::Ast,
                OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Tag | OutputFormat::Treeviz,
            ) => Ok(ProcessingSpec { stage, format }),
            _ => Err(ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            ))),
        }
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Tag),
            (ProcessingStage::Ast, OutputFormat::Treeviz),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Raw, OutputFormat::Text),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Raw => "raw",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            ProcessingStage::Raw => f.write_str("raw"),
            stage => write!(f, "{}-{}", stage.name(), self.format.name()),
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid stage: {0}")]
    InvalidStage(String),
    #[error("invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse document: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Process properties source text according to the given specification
pub fn process_str(content: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(content, &lex(content), spec.format),
        ProcessingStage::Ast => {
            let doc = parse_document(content)?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_ast_tag(&doc)),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&doc)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&doc)?),
                OutputFormat::Yaml => Ok(serde_yaml::to_string(&doc)?),
                other => Err(ProcessingError::InvalidFormatType(format!(
                    "'{}' is not supported for the ast stage",
                    other.name()
                ))),
            }
        }
        ProcessingStage::Raw => Ok(parse_document(content)?.raw_text()),
    }
}

/// Process a properties file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    tracing::debug!(path = %file_path.display(), %spec, "processing file");

    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(file_path)?;
    process_str(&content, spec)
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    token: Token,
    text: &'a str,
    span: Range<usize>,
}

/// Format tokens according to the specified format
fn format_tokens(
    content: &str,
    tokens: &[(Token, Range<usize>)],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (token, span) in tokens {
                if !result.is_empty() && !result.ends_with('\n') {
                    result.push(' ');
                }
                let text = content.get(span.clone()).unwrap_or_default();
                result.push_str(&format!("{}({:?})", token.name(), text));
                if *token == Token::Newline {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens
                .iter()
                .map(|(token, span)| TokenRecord {
                    token: *token,
                    text: content.get(span.clone()).unwrap_or_default(),
                    span: span.clone(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "'{}' is not supported for the token stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ToString::to_string)
        .collect()
}
