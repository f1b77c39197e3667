//! Command trait definition.
//!
//! Implement [`DataCommand`] to expose a provider operation to the dispatch
//! core. The command declares an inspectable parameter signature; the
//! parameter builder merges, injects, and validates arguments against it
//! before `execute` is ever called.

use crate::models::{CommandSignature, ParamMap, Value};

/// Error type returned by command callables.
///
/// Commands are external collaborators and may fail in arbitrary ways; the
/// runner folds any such error into a uniform failure outcome.
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a command invocation: a raw record or list of records.
pub type CommandResult = Result<Value, CommandError>;

/// A registered command with an inspectable parameter signature.
///
/// # Example
///
/// ```
/// use quotelab_core::command::{CommandResult, DataCommand};
/// use quotelab_core::models::{CommandSignature, ParamMap, ParamType, Parameter};
/// use serde_json::json;
///
/// struct LatestQuote;
///
/// impl DataCommand for LatestQuote {
///     fn signature(&self) -> CommandSignature {
///         CommandSignature::new(vec![
///             Parameter::required("symbol", ParamType::String),
///             Parameter::optional("provider_choices", ParamType::ProviderChoices, json!({})),
///         ])
///     }
///
///     fn execute(&self, params: &ParamMap) -> CommandResult {
///         Ok(json!({ "symbol": params["symbol"], "close": 102.5 }))
///     }
/// }
/// ```
pub trait DataCommand: Send + Sync {
    /// The declared parameter signature.
    ///
    /// For wrapped commands this describes the wrapper; normalization walks
    /// [`inner`](Self::inner) to the original command before inspecting.
    fn signature(&self) -> CommandSignature;

    /// The wrapped command, for decorator-style implementations.
    ///
    /// Defaults to `None` (this command is the original).
    fn inner(&self) -> Option<&dyn DataCommand> {
        None
    }

    /// Invoke the command with a fully built and validated argument mapping.
    ///
    /// The mapping contains exactly the declared parameter names, each value
    /// already coerced to its declared type.
    fn execute(&self, params: &ParamMap) -> CommandResult;
}
