use serde::{Deserialize, Serialize};

/// Classification of dispatch failures.
///
/// Stamped onto failure outcomes so that every caller surface (CLI, HTTP
/// layer, notebook front end) receives the same tagged failure shape.
///
/// # Behavior Summary
///
/// | Kind | Meaning |
/// |------|---------|
/// | `RouteNotFound` | Unknown route, nothing registered to run |
/// | `Signature` | Command not introspectable in a supported shape |
/// | `InvalidProviderChoice` | Selected provider absent from the known set |
/// | `ParameterValidation` | Argument missing or not coercible to its type |
/// | `Execution` | The command callable itself failed |
/// | `Internal` | Unexpected failure inside the dispatch core |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unknown route - fatal, surfaced to the caller, no retry.
    RouteNotFound,

    /// The command's signature is not usable for argument merging.
    /// Indicates a provider-plugin bug rather than a caller mistake.
    Signature,

    /// A named provider is not part of the registry's known provider set.
    InvalidProviderChoice,

    /// A parameter was missing or its value could not be coerced.
    ParameterValidation,

    /// The command was invoked and reported an error of its own.
    Execution,

    /// Internal dispatch failure, e.g. context serialization.
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::RouteNotFound => "route_not_found",
            ErrorKind::Signature => "signature",
            ErrorKind::InvalidProviderChoice => "invalid_provider_choice",
            ErrorKind::ParameterValidation => "parameter_validation",
            ErrorKind::Execution => "execution",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}
