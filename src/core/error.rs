//! Error handling for armgraph
//!
//! Two layers, as in most CLI crates:
//! 1. [`ArmGraphError`] - strongly-typed failures for input, configuration and rendering
//! 2. [`ErrorContext`] - a user-facing wrapper adding details and a suggestion
//!
//! The graph core itself (resolver, catalog, builder, filter) never fails; everything
//! here concerns the edges of the program: reading inputs, loading configuration and
//! writing rendered graphs.
//!
//! # Examples
//!
//! ```rust,no_run
//! use armgraph::core::{ArmGraphError, user_friendly_error};
//!
//! let err = anyhow::Error::from(ArmGraphError::InputNotFound {
//!     path: "template.json".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for armgraph operations.
#[derive(Error, Debug)]
pub enum ArmGraphError {
    /// The manifest input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The input file has an extension with no matching input channel.
    #[error("Unsupported input '{path}': no reader for extension '{extension}'")]
    UnsupportedInput {
        /// Path of the rejected input
        path: String,
        /// Extension found on the path (may be empty)
        extension: String,
    },

    /// A manifest document could not be decoded.
    #[error("Invalid manifest in {source_label}: {reason}")]
    ManifestParseError {
        /// Label of the manifest (file path or run label)
        source_label: String,
        /// Decoder message
        reason: String,
    },

    /// A run-log row is structurally unusable.
    #[error("Invalid run log row {row} in {file}: {reason}")]
    RunLogError {
        /// Run-log path
        file: String,
        /// 1-based row number
        row: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Configuration file problems.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// A renderer could not emit its output.
    #[error("Failed to render graph to {path}: {reason}")]
    RenderError {
        /// Output path
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML decoding error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper carrying user-facing details and a suggested fix.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ArmGraphError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without any extra context.
    #[must_use]
    pub const fn new(error: ArmGraphError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Walks the `anyhow` chain looking for an [`ArmGraphError`] or one of the decoder
/// errors it wraps; anything unrecognised is reported with its full context chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<ArmGraphError>() {
            return create_error_context(err, &error);
        }
        if let Some(json_error) = cause.downcast_ref::<serde_json::Error>() {
            return ErrorContext::new(ArmGraphError::ManifestParseError {
                source_label: top_context(&error),
                reason: json_error.to_string(),
            })
            .with_suggestion("Check that the file is a deployment template with a top-level \"resources\" array");
        }
        if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(ArmGraphError::ConfigError {
                message: toml_error.to_string(),
            })
            .with_suggestion("Check the TOML syntax of your armgraph configuration file");
        }
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>()
            && io_error.kind() == std::io::ErrorKind::PermissionDenied
        {
            return ErrorContext::new(ArmGraphError::IoError(std::io::Error::new(
                io_error.kind(),
                io_error.to_string(),
            )))
            .with_details(top_context(&error))
            .with_suggestion("Check file ownership and permissions");
        }
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>().join(": ");
    let ctx = ErrorContext::new(ArmGraphError::Other {
        message: error.to_string(),
    });
    if details.is_empty() {
        ctx
    } else {
        ctx.with_details(details)
    }
}

fn top_context(error: &anyhow::Error) -> String {
    error.to_string()
}

fn create_error_context(error: &ArmGraphError, chain: &anyhow::Error) -> ErrorContext {
    match error {
        ArmGraphError::InputNotFound {
            path,
        } => ErrorContext::new(ArmGraphError::InputNotFound {
            path: path.clone(),
        })
        .with_suggestion("Pass the template path explicitly, e.g. `armgraph render azuredeploy.json`")
        .with_details("Without an argument armgraph reads template.json from the current directory"),
        ArmGraphError::UnsupportedInput {
            path,
            extension,
        } => ErrorContext::new(ArmGraphError::UnsupportedInput {
            path: path.clone(),
            extension: extension.clone(),
        })
        .with_suggestion("Use a .json deployment template or a .csv run log"),
        ArmGraphError::ManifestParseError {
            source_label,
            reason,
        } => ErrorContext::new(ArmGraphError::ManifestParseError {
            source_label: source_label.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Each resource needs string \"type\" and \"name\" fields"),
        ArmGraphError::RunLogError {
            file,
            row,
            reason,
        } => ErrorContext::new(ArmGraphError::RunLogError {
            file: file.clone(),
            row: *row,
            reason: reason.clone(),
        })
        .with_details("Run log rows are: timestamp, run id, template JSON"),
        ArmGraphError::ConfigError {
            message,
        } => ErrorContext::new(ArmGraphError::ConfigError {
            message: message.clone(),
        })
        .with_suggestion("Check ~/.armgraph/config.toml or the file given with --config"),
        ArmGraphError::RenderError {
            path,
            reason,
        } => ErrorContext::new(ArmGraphError::RenderError {
            path: path.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check that the output directory is writable"),
        other => ErrorContext::new(ArmGraphError::Other {
            message: other.to_string(),
        })
        .with_details(chain.to_string()),
    }
}
