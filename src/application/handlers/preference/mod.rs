//! Preference application handlers.
//!
//! Boolean flag lists are stored and returned verbatim; they never touch
//! the interest weights.

mod get_flags;
mod save_flags;

pub use get_flags::{GetFlagsHandler, GetFlagsQuery};
pub use save_flags::{SaveFlagsCommand, SaveFlagsHandler};
