//! Error types and failure classification for the dispatch core.
//!
//! This module provides:
//! - [`DispatchError`]: The main error enum for all dispatch operations
//! - [`ErrorKind`]: Classification used to tag failure results

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while resolving, building, or invoking a command.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method. The command runner uses that classification to produce a uniform
/// failure shape; none of these errors are retried internally.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The requested route is not registered in the command map.
    /// This is a terminal error - there is nothing to fall back to.
    #[error("Route not found: {route}")]
    RouteNotFound {
        /// The route that was requested
        route: String,
    },

    /// The command's declared signature cannot be used for argument merging.
    /// Indicates a provider-plugin bug, e.g. a variadic catch-all parameter.
    #[error("Unsupported signature: parameter '{parameter}' {reason}")]
    UnsupportedSignature {
        /// The offending parameter
        parameter: String,
        /// Why the parameter cannot be merged
        reason: String,
    },

    /// A provider named in an explicit `provider_choices` selection is not
    /// part of the registry's known provider set.
    #[error("Unknown provider '{provider}' selected for route '{route}'")]
    UnknownProvider {
        /// The provider name that failed the membership check
        provider: String,
        /// The route the selection was made for
        route: String,
    },

    /// A required parameter was neither supplied nor defaulted.
    #[error("Missing required parameter '{parameter}'")]
    MissingParameter {
        /// The parameter that is absent
        parameter: String,
    },

    /// A supplied value could not be coerced to the parameter's declared type.
    #[error("Invalid value for parameter '{parameter}': cannot coerce {value} to {expected}")]
    InvalidParameter {
        /// The offending parameter
        parameter: String,
        /// The value that was attempted, rendered as JSON
        value: String,
        /// The declared target type
        expected: String,
    },

    /// More positional arguments were supplied than the signature declares.
    #[error("Too many positional arguments: expected at most {expected}, got {given}")]
    TooManyArguments {
        /// Number of declared parameters
        expected: usize,
        /// Number of positional arguments supplied
        given: usize,
    },

    /// The command callable itself returned an error during invocation.
    #[error("Command '{route}' failed: {message}")]
    ExecutionFailed {
        /// The route that was being executed
        route: String,
        /// The error message reported by the command
        message: String,
    },

    /// Serializing the injected command context failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DispatchError {
    /// Returns the failure classification for this error.
    ///
    /// The command runner stamps this kind onto the failure outcome so that
    /// downstream callers receive a uniform, tagged failure shape.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::RouteNotFound { .. } => ErrorKind::RouteNotFound,
            DispatchError::UnsupportedSignature { .. } => ErrorKind::Signature,
            DispatchError::UnknownProvider { .. } => ErrorKind::InvalidProviderChoice,
            DispatchError::MissingParameter { .. }
            | DispatchError::InvalidParameter { .. }
            | DispatchError::TooManyArguments { .. } => ErrorKind::ParameterValidation,
            DispatchError::ExecutionFailed { .. } => ErrorKind::Execution,
            DispatchError::Serialization(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let err = DispatchError::RouteNotFound {
            route: "equity.price.historical".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::RouteNotFound);

        let err = DispatchError::UnsupportedSignature {
            parameter: "args".to_string(),
            reason: "is variadic".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Signature);

        let err = DispatchError::UnknownProvider {
            provider: "NOPE".to_string(),
            route: "equity.price.historical".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidProviderChoice);

        let err = DispatchError::InvalidParameter {
            parameter: "limit".to_string(),
            value: "\"abc\"".to_string(),
            expected: "integer".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ParameterValidation);

        let err = DispatchError::TooManyArguments {
            expected: 2,
            given: 3,
        };
        assert_eq!(err.kind(), ErrorKind::ParameterValidation);
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = DispatchError::InvalidParameter {
            parameter: "limit".to_string(),
            value: "\"abc\"".to_string(),
            expected: "integer".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("limit"));
        assert!(message.contains("abc"));
        assert!(message.contains("integer"));
    }
}
