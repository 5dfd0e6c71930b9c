//! Structured error types shared across nest crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NestError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, values, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for a nested-sampling run.
///
/// Every variant is fatal for the run that raised it. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NestError {
    /// The live population's minimum likelihood is attained by more than one member.
    #[error("degenerate minimum: {0}")]
    DegenerateMinimum(ErrorInfo),
    /// Run parameters or collaborator inputs rejected before use.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ErrorInfo),
    /// A caller supplied collaborator broke its contract.
    #[error("collaborator error: {0}")]
    Collaborator(ErrorInfo),
    /// Floating point breakdown of the volume or evidence bookkeeping.
    #[error("numeric error: {0}")]
    Numeric(ErrorInfo),
    /// Serialization, configuration loading and report IO errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl NestError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NestError::DegenerateMinimum(info)
            | NestError::InvalidConfiguration(info)
            | NestError::Collaborator(info)
            | NestError::Numeric(info)
            | NestError::Serde(info) => info,
        }
    }

    /// Shorthand for an [`NestError::InvalidConfiguration`] with a bare payload.
    pub fn invalid_config(code: impl Into<String>, message: impl Into<String>) -> Self {
        NestError::InvalidConfiguration(ErrorInfo::new(code, message))
    }

    /// Returns true when the error is a tied-minimum abort.
    pub fn is_degenerate_minimum(&self) -> bool {
        matches!(self, NestError::DegenerateMinimum(_))
    }
}
