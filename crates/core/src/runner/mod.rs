//! Command runner: resolve → build → invoke, with a uniform result shape.

mod result;

pub use result::{InvocationResult, Outcome};

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use crate::context::{ExecutionContext, SystemSettings, UserSettings};
use crate::errors::DispatchError;
use crate::models::{ParamMap, Value};
use crate::params::ParametersBuilder;
use crate::registry::CommandMap;

/// Synchronous command dispatcher.
///
/// A call moves through three phases: idle (holding shared settings and the
/// command map), resolving (route lookup), and executing (parameter build
/// plus invocation). Any failure short-circuits to a terminal failure
/// result; nothing is retried.
///
/// The runner is safe to share across threads: the command map and system
/// settings are read-only after startup, and user-settings mutation goes
/// through [`set_user_settings`](Self::set_user_settings), to be serialized
/// by the embedding application.
pub struct CommandRunner {
    command_map: Arc<CommandMap>,
    system_settings: Arc<SystemSettings>,
    user_settings: Arc<UserSettings>,
}

impl CommandRunner {
    pub fn new(
        command_map: Arc<CommandMap>,
        system_settings: Arc<SystemSettings>,
        user_settings: Arc<UserSettings>,
    ) -> Self {
        Self {
            command_map,
            system_settings,
            user_settings,
        }
    }

    pub fn command_map(&self) -> &Arc<CommandMap> {
        &self.command_map
    }

    pub fn system_settings(&self) -> &Arc<SystemSettings> {
        &self.system_settings
    }

    pub fn user_settings(&self) -> &Arc<UserSettings> {
        &self.user_settings
    }

    /// Replace the user settings. The single mutation boundary; callers must
    /// serialize access.
    pub fn set_user_settings(&mut self, user_settings: Arc<UserSettings>) {
        self.user_settings = user_settings;
    }

    /// Run a command by route with positional and keyword arguments.
    ///
    /// Never panics and never propagates raw errors: every dispatch or
    /// execution failure is folded into a failure-tagged
    /// [`InvocationResult`]. A fresh [`ExecutionContext`] is created per
    /// call; no state leaks across calls.
    pub fn run(&self, route: &str, args: &[Value], kwargs: ParamMap) -> InvocationResult {
        let started = Instant::now();
        let timestamp = Utc::now();

        let outcome = match self.execute(route, args, &kwargs) {
            Ok(output) => Outcome::Success { output },
            Err(e) => {
                warn!("command '{}' failed: {}", route, e);
                Outcome::Failure {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };

        InvocationResult {
            id: Uuid::new_v4(),
            route: route.to_string(),
            timestamp,
            duration_ms: started.elapsed().as_millis() as u64,
            outcome,
        }
    }

    fn execute(
        &self,
        route: &str,
        args: &[Value],
        kwargs: &ParamMap,
    ) -> Result<Value, DispatchError> {
        debug!("resolving route '{}'", route);
        let entry = self.command_map.resolve(route)?;

        debug!("executing route '{}'", route);
        let execution_context = ExecutionContext::new(
            Arc::clone(&self.command_map),
            route,
            Arc::clone(&self.system_settings),
            Arc::clone(&self.user_settings),
        );
        let params = ParametersBuilder::build(
            args,
            kwargs,
            entry.command.as_ref(),
            &execution_context,
            route,
        )?;

        entry
            .command
            .execute(&params)
            .map_err(|e| DispatchError::ExecutionFailed {
                route: route.to_string(),
                message: e.to_string(),
            })
    }
}
