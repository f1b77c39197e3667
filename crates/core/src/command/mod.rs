//! Command plugin contract.
//!
//! Provider plugins register commands implementing [`DataCommand`]; the
//! dispatch pipeline only ever sees this trait.

mod adapters;
mod traits;

pub use adapters::{FnCommand, TracedCommand};
pub use traits::{CommandError, CommandResult, DataCommand};
