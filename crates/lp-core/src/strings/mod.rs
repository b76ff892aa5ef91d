//! Display string keys and positional interpolation.

mod format;
mod key;

pub use format::interpolate;
pub use key::StringKey;
