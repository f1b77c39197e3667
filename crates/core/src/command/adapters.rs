use log::debug;

use super::traits::{CommandResult, DataCommand};
use crate::models::{CommandSignature, ParamMap};

/// Adapter binding an explicit signature to a plain function or closure.
///
/// This is the usual way the registry feed turns provider fetchers into
/// registrable commands.
pub struct FnCommand<F> {
    signature: CommandSignature,
    func: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&ParamMap) -> CommandResult + Send + Sync,
{
    pub fn new(signature: CommandSignature, func: F) -> Self {
        Self { signature, func }
    }
}

impl<F> DataCommand for FnCommand<F>
where
    F: Fn(&ParamMap) -> CommandResult + Send + Sync,
{
    fn signature(&self) -> CommandSignature {
        self.signature.clone()
    }

    fn execute(&self, params: &ParamMap) -> CommandResult {
        (self.func)(params)
    }
}

/// Decorator that logs invocations and delegates to the wrapped command.
///
/// Signature normalization unwraps decorators via [`DataCommand::inner`], so
/// the original command's declared parameters are preserved exactly.
pub struct TracedCommand<C> {
    label: String,
    command: C,
}

impl<C: DataCommand> TracedCommand<C> {
    pub fn new(label: impl Into<String>, command: C) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

impl<C: DataCommand> DataCommand for TracedCommand<C> {
    fn signature(&self) -> CommandSignature {
        self.command.signature()
    }

    fn inner(&self) -> Option<&dyn DataCommand> {
        Some(&self.command)
    }

    fn execute(&self, params: &ParamMap) -> CommandResult {
        debug!("invoking command '{}'", self.label);
        let result = self.command.execute(params);
        match &result {
            Ok(_) => debug!("command '{}' succeeded", self.label),
            Err(e) => debug!("command '{}' failed: {}", self.label, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParamType, Parameter};
    use serde_json::json;

    fn echo_command() -> FnCommand<impl Fn(&ParamMap) -> CommandResult + Send + Sync> {
        FnCommand::new(
            CommandSignature::new(vec![Parameter::required("symbol", ParamType::String)]),
            |params: &ParamMap| Ok(json!({ "echo": params["symbol"] })),
        )
    }

    #[test]
    fn test_fn_command_executes() {
        let command = echo_command();
        let mut params = ParamMap::new();
        params.insert("symbol".to_string(), json!("AAPL"));

        let output = command.execute(&params).unwrap();
        assert_eq!(output, json!({ "echo": "AAPL" }));
        assert!(command.inner().is_none());
    }

    #[test]
    fn test_traced_command_delegates_and_exposes_inner() {
        let traced = TracedCommand::new("echo", echo_command());

        assert!(traced.inner().is_some());
        assert_eq!(traced.signature(), traced.command.signature());

        let mut params = ParamMap::new();
        params.insert("symbol".to_string(), json!("MSFT"));
        let output = traced.execute(&params).unwrap();
        assert_eq!(output, json!({ "echo": "MSFT" }));
    }
}
