//! Configuration section definitions.

mod input;
mod output;
mod strip;

pub use input::InputConfig;
pub use output::OutputConfig;
pub use strip::StripConfig;
