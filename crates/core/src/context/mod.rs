//! Settings bundles and the per-invocation execution context.
//!
//! `SystemSettings` and the `CommandMap` are shared read-only state, loaded
//! once at process start. `UserSettings` may be mutated, but only through the
//! embedding application; the core never writes to it.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{ProviderId, Route, Value};
use crate::registry::CommandMap;

/// Process-wide settings, immutable after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub app_name: String,
    pub version: String,
    pub log_level: String,
    pub test_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            app_name: "quotelab".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            test_mode: false,
        }
    }
}

/// Per-user settings, owned and mutated by the embedding application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub preferences: HashMap<String, Value>,
    pub credentials: HashMap<String, String>,
    pub default_provider: Option<ProviderId>,
}

/// Settings bundle injected into commands that declare a context parameter.
///
/// Serialized fresh for every invocation; a caller-supplied value under the
/// context parameter's name is always overwritten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandContext {
    pub system_settings: SystemSettings,
    pub user_settings: UserSettings,
}

impl CommandContext {
    pub fn new(system_settings: &SystemSettings, user_settings: &UserSettings) -> Self {
        Self {
            system_settings: system_settings.clone(),
            user_settings: user_settings.clone(),
        }
    }
}

/// Per-invocation bundle of shared state and the route being executed.
///
/// Created fresh for every call; never persisted and never shared across
/// calls.
#[derive(Clone)]
pub struct ExecutionContext {
    pub command_map: Arc<CommandMap>,
    pub route: Route,
    pub system_settings: Arc<SystemSettings>,
    pub user_settings: Arc<UserSettings>,
}

impl ExecutionContext {
    pub fn new(
        command_map: Arc<CommandMap>,
        route: impl Into<Route>,
        system_settings: Arc<SystemSettings>,
        user_settings: Arc<UserSettings>,
    ) -> Self {
        Self {
            command_map,
            route: route.into(),
            system_settings,
            user_settings,
        }
    }
}
