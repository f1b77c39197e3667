//! Command registry: route → command, provider coverage, defaults.

mod command_map;

pub use command_map::{CommandEntry, CommandMap};
