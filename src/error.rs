// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the MikroTik provider core

use thiserror::Error;

use crate::resource::Action;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// RouterOS API transport or protocol failure
    #[error("RouterOS error: {0}")]
    RouterOs(String),

    /// The device rejected a command with `!trap`
    #[error("RouterOS trap: {message}")]
    Trap {
        category: Option<String>,
        message: String,
    },

    /// A filtered print returned no records
    #[error("Not found: {0}")]
    NotFound(String),

    /// A reply value could not be coerced into the field type
    #[error("Failed to unmarshal field '{field}' from '{value}': {reason}")]
    Unmarshal {
        field: String,
        value: String,
        reason: String,
    },

    /// The resource has no command path for the requested action
    #[error("{kind} does not support the {action} action")]
    UnsupportedAction { kind: &'static str, action: Action },

    /// Update was requested without an identifier
    #[error("{kind} has no identifier set; find or add it before updating")]
    MissingId { kind: &'static str },

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// JSON error
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Error with additional context
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Returns true when the error (or the error it wraps) is a `NotFound`
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Context { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Wraps the error with a context message
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Predicate form of [`AppError::is_not_found`]
#[must_use]
pub fn is_not_found(error: &AppError) -> bool {
    error.is_not_found()
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
